use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::UnresolvedPolicy;
use crate::format::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable rollup
    Text,
    /// Full rollup payload as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "statusroll")]
#[command(about = "Aggregate child process statuses into a rollup summary", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON file with the child records to aggregate
    pub input: PathBuf,

    /// Locale for display text
    #[arg(short, long, value_enum, default_value = "pt")]
    pub locale: Locale,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Policy for records whose status reference did not resolve
    #[arg(long, value_enum, default_value = "skip")]
    pub unresolved: UnresolvedPolicy,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
