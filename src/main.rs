use clap::{crate_authors, crate_description, crate_name, crate_version, App, Arg, ArgMatches};
use log::info;
use nemocmp::{collection::NemoCollection, report::print_mismatches};
use std::{
    error::Error,
    fs::File,
    io::{BufReader, BufWriter, Write},
};

fn read_collection(path: &str) -> Result<NemoCollection, Box<dyn Error>> {
    let collection = NemoCollection::read(BufReader::new(File::open(path)?))?;
    info!(
        "{}: {} labels, {} motifs",
        path,
        collection.len(),
        collection.num_motifs()
    );
    Ok(collection)
}

fn handle_compare(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let expected = read_collection(matches.value_of("EXPECTED").unwrap())?;
    let actual = read_collection(matches.value_of("ACTUAL").unwrap())?;
    let mut writer = BufWriter::new(std::io::stdout());
    print_mismatches(&mut writer, &expected, &actual)?;
    writer.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::with_name("EXPECTED")
                .help("The reference NEMO result file")
                .required(true),
        )
        .arg(
            Arg::with_name("ACTUAL")
                .help("The NEMO result file to check against the reference")
                .required(true),
        )
        .get_matches();
    handle_compare(&matches)
}
