//! Aggregator / reporter.
//!
//! Owns the run-wide `StationMap`, absorbs one chunk map at a time, and
//! renders the sorted `name=min/avg/max, …` summary.

use std::fmt;

use crate::core::{
    constants::{DECIMAL_PRECISION, ENTRY_SEPARATOR, TENTHS_PER_UNIT},
    stats::{StationMap, StationStats},
};

/// A fixed-point decimal with one fractional digit.
///
/// Zero is always printed as `0.0`, never `-0.0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tenths(pub i64);

impl Tenths {
    /// Mean of `sum / count` tenths, rounded half away from zero.
    ///
    /// # Panics
    /// If `count` is zero.
    #[must_use]
    pub fn mean(sum: i64, count: u64) -> Self {
        assert!(count > 0, "mean of zero observations");
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        let (q, r) = (sum / count, sum % count);
        if 2 * r.unsigned_abs() >= count.unsigned_abs() {
            Self(q + sum.signum())
        } else {
            Self(q)
        }
    }
}

impl fmt::Display for Tenths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let unit = TENTHS_PER_UNIT.unsigned_abs();
        write!(
            f,
            "{sign}{}.{:0width$}",
            abs / unit,
            abs % unit,
            width = DECIMAL_PRECISION
        )
    }
}

/// Read-only view of one station, computed at report time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedEntry {
    pub city: String,
    pub min: Tenths,
    pub avg: Tenths,
    pub max: Tenths,
}

impl RenderedEntry {
    #[must_use]
    pub fn new(city: String, stats: &StationStats) -> Self {
        Self {
            city,
            min: Tenths(i64::from(stats.min)),
            avg: Tenths::mean(stats.sum, stats.count),
            max: Tenths(i64::from(stats.max)),
        }
    }
}

impl fmt::Display for RenderedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}/{}/{}", self.city, self.min, self.avg, self.max)
    }
}

/// Sole owner of the run-wide station map.
#[derive(Debug, Default)]
pub struct Aggregator {
    global: StationMap,
    chunks: usize,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished chunk's map into the global one.
    pub fn merge(&mut self, chunk: StationMap) {
        self.global.merge(chunk);
        self.chunks += 1;
    }

    #[must_use]
    pub fn stations(&self) -> &StationMap {
        &self.global
    }

    /// Number of chunk maps merged so far.
    #[must_use]
    pub fn chunks(&self) -> usize {
        self.chunks
    }

    /// Entries sorted ascending by station name.
    #[must_use]
    pub fn entries(self) -> Vec<RenderedEntry> {
        let mut out: Vec<RenderedEntry> = self
            .global
            .into_iter()
            .map(|(city, stats)| RenderedEntry::new(city, &stats))
            .collect();
        out.sort_unstable_by(|l, r| l.city.cmp(&r.city));
        out
    }

    /// The final summary line; empty when no station was seen.
    #[must_use]
    pub fn render(self) -> String {
        self.entries()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR)
    }
}
