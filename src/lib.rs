//! Public-facing crate root – re-exports + one-shot helpers.
//!
//! Streams a `station;reading` file through a fixed-size buffer and renders
//! `name=min/avg/max, …` sorted by station name.

pub mod cli;
pub mod core;
pub mod engine;
pub mod logging;

use std::{fs::File, io::Read, path::Path, time::Instant};

use tracing::info;

pub use crate::core::{
    config::{Config, ConfigBuilder, TrailingRecord},
    constants::{DECIMAL_PRECISION, DEFAULT_BUFFER_CAPACITY},
    error::{ConfigError, ParseRecordError, RecordErrorKind, SummaryError},
    stats::{StationMap, StationStats},
};

pub use engine::{Aggregator, RenderedEntry, StreamingReader, Tenths, process_chunk};

/// Run every chunk of `src` through the aggregator.
pub fn summarize_reader<R: Read>(src: R, cfg: &Config) -> Result<Aggregator, SummaryError> {
    let started = Instant::now();
    let mut reader = StreamingReader::new(src, cfg);
    let mut agg = Aggregator::new();
    for chunk in &mut reader {
        agg.merge(chunk?);
    }
    info!(
        chunks = agg.chunks(),
        bytes = reader.bytes_consumed(),
        stations = agg.stations().len(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "input summarized"
    );
    Ok(agg)
}

/// Summarize the file at `path` (`-` reads stdin) into the final line.
pub fn summarize_path(path: impl AsRef<Path>, cfg: &Config) -> Result<String, SummaryError> {
    let path = path.as_ref();
    let agg = if path == Path::new("-") {
        summarize_reader(std::io::stdin().lock(), cfg)?
    } else {
        summarize_reader(File::open(path)?, cfg)?
    };
    Ok(agg.render())
}

/// Convenience for in-memory input with the default configuration.
pub fn summarize_bytes(data: &[u8]) -> Result<String, SummaryError> {
    let cfg = Config::builder()
        .buffer_capacity((data.len() + 1).min(DEFAULT_BUFFER_CAPACITY))
        .build()?;
    Ok(summarize_reader(data, &cfg)?.render())
}
