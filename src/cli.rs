use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pluvia IDF rainfall analysis.
#[derive(Parser)]
#[command(
    name = "pluvia",
    version,
    about = "IDF curve estimation from daily rainfall station records"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full IDF analysis for one station record.
    Analyze(AnalyzeArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to the station's semicolon-separated rainfall CSV.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the JSON report (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of metadata lines before the CSV header.
    #[arg(long = "skip-rows", default_value_t = 12)]
    pub skip_rows: usize,
}
