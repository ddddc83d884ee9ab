//! Chunk processor: a block of whole records → a fresh `StationMap`.

use crate::core::{
    constants::LINE_BREAK, error::ParseRecordError, record::parse_record, stats::StationMap,
};

/// Parse every record in `chunk` and fold it into a chunk-local map.
///
/// `chunk` is expected to end at a line-break (or at the end of input).
/// Blank lines are skipped. The first bad record aborts the chunk; its
/// error offset is relative to the start of `chunk`.
pub fn process_chunk(chunk: &[u8]) -> Result<StationMap, ParseRecordError> {
    let mut stations = StationMap::new();
    let mut offset = 0u64;

    for line in chunk.split(|&b| b == LINE_BREAK) {
        let start = offset;
        offset += line.len() as u64 + 1;
        if line.is_empty() {
            continue;
        }
        let (station, tenths) = parse_record(line).map_err(|e| e.rebased(start))?;
        stations.observe(station, tenths);
    }
    Ok(stations)
}
