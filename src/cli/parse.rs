use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "station-summary",
    version,
    about = "Per-station min/avg/max over large `station;temperature` files"
)]
pub struct Cli {
    /// Log filter when `RUST_LOG` is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize a measurements file
    Summarize(SummarizeArgs),
    /// Write a synthetic measurements file
    Generate(GenerateArgs),
    /// Print example invocations
    Examples,
}

/// `station-summary summarize …`
#[derive(Parser, Debug)]
pub struct SummarizeArgs {
    /// Measurements path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "measurements.txt")]
    pub file: PathBuf,

    /// Read buffer size in bytes; must hold the longest record
    #[arg(long, env = "STATION_SUMMARY_BUFFER")]
    pub buffer_size: Option<usize>,

    /// Ignore a final record that has no trailing line-break
    #[arg(long)]
    pub drop_trailing: bool,
}

/// `station-summary generate …`
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Output path (use `-` for stdout)
    #[arg(value_name = "OUTPUT", default_value = "measurements.txt")]
    pub output: PathBuf,

    /// Number of records to write
    #[arg(long, default_value_t = 1_000_000)]
    pub rows: u64,

    /// Distinct stations to draw from
    #[arg(long, default_value_t = 26)]
    pub stations: usize,

    /// Fixed seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}
