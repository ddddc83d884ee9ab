//! Fixed-point record parser: `station;[-]digits.digit` → (`&str`, tenths).
//!
//! No floats are involved. The decimal point is squeezed out and the
//! remaining digit run is parsed as an integer number of tenths.

use crate::core::{
    constants::{MAX_VALUE_LEN, RECORD_DELIMITER},
    error::{ParseRecordError, RecordErrorKind},
};

/// Split one record (no line-break) into its station name and reading.
///
/// Errors carry offset 0; callers that know where the record started
/// rebase them.
pub fn parse_record(line: &[u8]) -> Result<(&str, i32), ParseRecordError> {
    let semi = line
        .iter()
        .position(|&b| b == RECORD_DELIMITER)
        .ok_or_else(|| ParseRecordError::new(RecordErrorKind::MissingDelimiter))?;
    let (name, value) = (&line[..semi], &line[semi + 1..]);

    if name.is_empty() {
        return Err(ParseRecordError::new(RecordErrorKind::EmptyStation));
    }
    let station = std::str::from_utf8(name)
        .map_err(|_| ParseRecordError::new(RecordErrorKind::InvalidUtf8))?;
    let tenths = parse_tenths(value).map_err(ParseRecordError::new)?;
    Ok((station, tenths))
}

/// `"-12.3"` → `-123`. Exactly one fractional digit is required.
pub fn parse_tenths(value: &[u8]) -> Result<i32, RecordErrorKind> {
    let invalid = || RecordErrorKind::InvalidValue {
        text: String::from_utf8_lossy(value).into_owned(),
    };

    let len = value.len();
    match value.last() {
        Some(b) if b.is_ascii_digit() => {}
        _ => return Err(invalid()),
    }
    if len < 2 || value[len - 2] != b'.' {
        return Err(RecordErrorKind::BadFraction {
            text: String::from_utf8_lossy(value).into_owned(),
        });
    }
    let whole = &value[..len - 2];
    if matches!(whole, [] | [b'-' | b'+']) || len > MAX_VALUE_LEN {
        return Err(invalid());
    }

    // whole part + fractional digit, point dropped
    let mut digits = [0u8; MAX_VALUE_LEN];
    digits[..whole.len()].copy_from_slice(whole);
    digits[whole.len()] = value[len - 1];

    lexical_core::parse::<i32>(&digits[..len - 1]).map_err(|_| invalid())
}
