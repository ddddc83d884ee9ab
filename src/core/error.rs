//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

/// Precise configuration faults.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCapacity => write!(f, "buffer capacity must be at least one byte"),
        }
    }
}
impl Error for ConfigError {}

/// A record that could not be turned into a station and a reading.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseRecordError {
    /// Byte offset of the record's first byte, counted from the start of the input.
    pub offset: u64,
    pub kind: RecordErrorKind,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RecordErrorKind {
    MissingDelimiter,
    EmptyStation,
    InvalidUtf8,
    BadFraction { text: String },
    InvalidValue { text: String },
}

impl ParseRecordError {
    #[inline]
    pub(crate) fn new(kind: RecordErrorKind) -> Self {
        Self { offset: 0, kind }
    }

    /// Shift the offset by the number of bytes that preceded the chunk.
    #[must_use]
    pub(crate) fn rebased(mut self, base: u64) -> Self {
        self.offset += base;
        self
    }
}

impl fmt::Display for ParseRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = self.offset;
        match &self.kind {
            RecordErrorKind::MissingDelimiter => {
                write!(f, "record at byte {at}: missing `;` delimiter")
            }
            RecordErrorKind::EmptyStation => write!(f, "record at byte {at}: empty station name"),
            RecordErrorKind::InvalidUtf8 => {
                write!(f, "record at byte {at}: station name is not valid UTF-8")
            }
            RecordErrorKind::BadFraction { text } => write!(
                f,
                "record at byte {at}: reading '{text}' must have exactly one fractional digit"
            ),
            RecordErrorKind::InvalidValue { text } => {
                write!(f, "record at byte {at}: invalid reading '{text}'")
            }
        }
    }
}
impl Error for ParseRecordError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum SummaryError {
    Io(io::Error),
    Record(ParseRecordError),
    Config(ConfigError),
    RecordTooLong { capacity: usize },
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryError::Io(e) => write!(f, "{e}"),
            SummaryError::Record(e) => write!(f, "{e}"),
            SummaryError::Config(e) => write!(f, "{e}"),
            SummaryError::RecordTooLong { capacity } => write!(
                f,
                "a record does not fit in the {capacity}-byte read buffer; raise --buffer-size"
            ),
        }
    }
}
impl Error for SummaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SummaryError::Io(e) => Some(e),
            SummaryError::Record(e) => Some(e),
            SummaryError::Config(e) => Some(e),
            SummaryError::RecordTooLong { .. } => None,
        }
    }
}

// automatic conversions
impl From<io::Error> for SummaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseRecordError> for SummaryError {
    fn from(e: ParseRecordError) -> Self {
        Self::Record(e)
    }
}
impl From<ConfigError> for SummaryError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebased_offset_is_absolute() {
        let e = ParseRecordError::new(RecordErrorKind::MissingDelimiter).rebased(40);
        assert_eq!(e.offset, 40);
        assert_eq!(e.to_string(), "record at byte 40: missing `;` delimiter");
    }

    #[test]
    fn summary_error_exposes_source() {
        let e = SummaryError::from(ConfigError::ZeroCapacity);
        assert!(e.source().is_some());
        assert!(SummaryError::RecordTooLong { capacity: 8 }.source().is_none());
    }
}
