//! A collection of constants.

/// Separates the station name from its reading inside a record.
pub const RECORD_DELIMITER: u8 = b';';
/// Terminates every record.
pub const LINE_BREAK: u8 = b'\n';
/// Placed between rendered entries; never after the last one.
pub const ENTRY_SEPARATOR: &str = ", ";

/// Readings carry exactly one digit after the decimal point.
///
/// 14.8 is stored as 148 tenths.
pub const DECIMAL_PRECISION: usize = 1;
/// Tenths per whole degree.
pub const TENTHS_PER_UNIT: i64 = 10;

/// 12 MiB, the size the reference run was tuned for.
pub const DEFAULT_BUFFER_CAPACITY: usize = 12 * 1024 * 1024;

/// Longest reading text we accept, sign and point included (`-214748364.8`).
pub const MAX_VALUE_LEN: usize = 12;
