use crate::{
    literal,
    motif::{Motif, SortedMotifs},
    reader::RecordPairs,
    types::Label,
};
use derive_more::Display;
use std::collections::BTreeMap;
use std::io::BufRead;

/// A fatal failure while reading a collection file.
#[derive(Debug, Display)]
pub enum Error {
    Io(std::io::Error),
    Parse(pest::error::Error<literal::MotifRule>),
}

impl std::error::Error for Error {}

/// The per-label motif collections read from one NEMO result file.
#[derive(Debug, Default, PartialEq)]
pub struct NemoCollection {
    groups: BTreeMap<Label, SortedMotifs>,
}

impl NemoCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads alternating label/data lines, folding every parsed motif into
    /// the label's sorted collection.
    ///
    /// A label line may repeat; its motifs accumulate in one collection.
    pub fn read<B: BufRead>(reader: B) -> Result<Self, Error> {
        let mut collection = Self::new();
        for pair in RecordPairs::new(reader) {
            let (label, data) = pair.map_err(Error::Io)?;
            let motifs = literal::parse(&data).map_err(Error::Parse)?;
            let group = collection.groups.entry(label).or_default();
            for motif in motifs {
                group.insert(motif);
            }
        }
        Ok(collection)
    }

    /// Insorts `motif` into the collection of `label`.
    pub fn insert(&mut self, label: Label, motif: Motif) {
        self.groups.entry(label).or_default().insert(motif);
    }

    /// The number of labels.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The total number of motifs over all labels.
    pub fn num_motifs(&self) -> usize {
        self.groups.values().map(SortedMotifs::len).sum()
    }

    pub fn get(&self, label: &str) -> Option<&SortedMotifs> {
        self.groups.get(label)
    }

    /// The labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(Label::as_str)
    }

    /// The (label, motifs) entries in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SortedMotifs)> {
        self.groups
            .iter()
            .map(|(label, motifs)| (label.as_str(), motifs))
    }
}
