use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use fruitbox::ValidationPolicy;

/// Read when present; any other configuration file must exist.
pub const DEFAULT_CONFIG: &str = "fruitbox.toml";

/// How results are written to standard output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Token grid, combination grid, then one line per combination.
    #[default]
    Text,
    /// A JSON report suitable for an overlay.
    Json,
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds groups of adjacent numbered tokens summing to ten.", long_about = None)]
pub struct Cli {
    /// JSON array of tokens to search; standard input is read when omitted
    pub input: Option<PathBuf>,

    /// Configuration file, overridden by FRUITBOX_* environment variables and then by the flags below
    #[clap(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Sum every combination must reach
    #[clap(long)]
    pub target: Option<f64>,

    /// Maximum straight-line distance between neighboring token centers
    #[clap(long)]
    pub threshold: Option<f64>,

    /// Multiplier on the threshold for the axis-aligned distance test
    #[clap(long)]
    pub manhattan_factor: Option<f64>,

    /// What to do with malformed tokens: skip, reject, or abort
    #[clap(long)]
    pub validation: Option<ValidationPolicy>,

    #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also list every pair of neighboring tokens
    #[clap(long)]
    pub edges: bool,

    /// Log more; repeat for more detail
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
