//! Command line parsing.

use std::path::PathBuf;

use clap::{Arg, Command, builder::PathBufValueParser};

/// Parses `font-converter`'s arguments to determine the configuration file to use.
pub fn get_config_path() -> PathBuf {
    let matches = command_parser().get_matches();

    matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| unreachable!("`config` should have a default value"))
}

/// Returns the command parser for `font-converter`.
fn command_parser() -> Command {
    let config = Arg::new("config")
        .value_name("CONFIG")
        .help("The JSON file describing the fonts to convert")
        .value_parser(PathBufValueParser::new())
        .default_value("fonts.json");

    Command::new("font-converter")
        .about("Converts BMFont bitmap fonts into packed font tables")
        .arg(config)
}
