use langpack_tool::types::*;
use clap::{ArgAction, Parser};

/// Language pack files converted when no input is given.
pub const DEFAULT_TARGETS: &[&str] = &[
    "games/fish-master/client/fish/src/project.js",
    "games/fish-master/client/temp_extract/fish/src/project.js",
];

/// Convert Simplified Chinese language packs in game scripts to Traditional Chinese (Taiwan)
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Arg {
    /// Script files or directories to convert in place.
    /// Defaults to the bundled fish-master client scripts.
    pub inputs: Vec<String>,
    #[arg(short = 'e', long, value_enum, default_value_t = TextEncoding::Utf8)]
    /// Script encoding
    pub encoding: TextEncoding,
    #[arg(short = 'c', long, value_enum, default_value_t = ConverterType::S2tw)]
    /// Simplified to Traditional Chinese converter
    pub converter: ConverterType,
    #[arg(long)]
    /// CSV file (Source,Target) with extra terms replaced after the built-in Taiwan terms
    pub terms: Option<String>,
    #[arg(short, long, action = ArgAction::SetTrue)]
    /// Search for script files in the directory recursively
    pub recursive: bool,
    #[arg(action = ArgAction::SetTrue, short, long)]
    /// Print backtrace on error
    pub backtrace: bool,
}

impl Arg {
    /// Returns the inputs, or the default targets when none were given.
    pub fn targets(&self) -> Vec<String> {
        if self.inputs.is_empty() {
            DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect()
        } else {
            self.inputs.clone()
        }
    }
}

pub fn parse_args() -> Arg {
    Arg::parse()
}
