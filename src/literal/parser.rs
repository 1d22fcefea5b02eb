use super::error::Result;
use crate::{motif::Motif, types::VId};
use pest::Parser;
use pest_derive::Parser;

pub type MotifRule = Rule;

#[derive(Parser)]
#[grammar = "literal/grammar.pest"]
struct MotifParser;

/// Parses a data line into the motifs it lists.
///
/// A data line is either a sequence of motifs (`[[1, 2, 3], [4, 5, 6]]`) or
/// a single flat motif (`[1, 2, 3]`), the shape the subgraph writer emits.
pub fn parse(input: &str) -> Result<Vec<Motif>> {
    let mut motifs = vec![];
    for pair in MotifParser::parse(Rule::data_line, input)? {
        match pair.as_rule() {
            Rule::motif_seq => {
                for motif in pair.into_inner() {
                    motifs.push(parse_motif(motif)?);
                }
            }
            Rule::motif => motifs.push(parse_motif(pair)?),
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    Ok(motifs)
}

fn parse_motif(pair: pest::iterators::Pair<Rule>) -> Result<Motif> {
    let mut nodes = vec![];
    for int in pair.into_inner() {
        match int.as_str().parse::<VId>() {
            Ok(node) => nodes.push(node),
            Err(_) => return Err(out_of_range_error(int)),
        }
    }
    Ok(Motif::new(nodes))
}

fn out_of_range_error(pair: pest::iterators::Pair<Rule>) -> pest::error::Error<MotifRule> {
    pest::error::Error::new_from_span(
        pest::error::ErrorVariant::CustomError {
            message: String::from("node id out of range"),
        },
        pair.as_span(),
    )
}
