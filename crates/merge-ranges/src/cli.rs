use clap::{Parser, ValueEnum};
use std::path::PathBuf;


#[derive(ValueEnum, Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// One interval per line
    #[default]
    Lines,
    /// Single comma separated line
    Comma,
    /// JSON array of interval strings
    Json,
}


/// Merges overlapping closed integer intervals given as `start-end` tokens
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Interval tokens, e.g. `1-3 5-7 2-4`. Comma separated lists are accepted as well
    #[arg(value_name = "INTERVAL")]
    pub tokens: Vec<String>,

    /// File to read tokens from when none are given on the command line.
    /// Standard input is used when neither is present
    #[arg(short, long, value_name = "FILE", conflicts_with = "tokens")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,

    /// Whether the logs should be structured in JSON format
    #[arg(long)]
    pub json_log: bool,
}
