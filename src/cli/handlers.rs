use std::{fs::File, io, path::Path};

use crate::{
    core::{
        config::{Config, TrailingRecord},
        error::SummaryError,
    },
    engine::generate::{GenerateOptions, write_measurements},
    summarize_path,
};

use super::parse::{GenerateArgs, SummarizeArgs};

pub fn summarize(a: &SummarizeArgs) -> Result<(), SummaryError> {
    let trailing = if a.drop_trailing {
        TrailingRecord::Drop
    } else {
        TrailingRecord::Flush
    };
    let cfg = Config::builder()
        .buffer_capacity_opt(a.buffer_size)
        .trailing(trailing)
        .build()?;

    let line = summarize_path(&a.file, &cfg)?;
    println!("{line}");
    Ok(())
}

pub fn generate(a: &GenerateArgs) -> Result<(), SummaryError> {
    let opts = GenerateOptions {
        rows: a.rows,
        stations: a.stations,
        seed: a.seed,
    };
    if a.output == Path::new("-") {
        write_measurements(io::stdout().lock(), &opts)?;
    } else {
        write_measurements(File::create(&a.output)?, &opts)?;
    }
    Ok(())
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "cargo run --release --"; // adjust if you rename the binary
    println!(
        "
Example invocations
-------------------
• Make test data    : {bin} generate measurements.txt --rows 10000000 --seed 1
• Summarize         : {bin} summarize measurements.txt
• From stdin        : cat measurements.txt | {bin} summarize -
• Smaller buffer    : {bin} summarize measurements.txt --buffer-size 65536
• Reference mode    : {bin} summarize measurements.txt --drop-trailing
• Chunk diagnostics : RUST_LOG=debug {bin} summarize measurements.txt
"
    );
}
