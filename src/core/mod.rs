//! Data model, parser and the plumbing shared by every layer.

pub mod config;
pub mod constants;
pub mod error;
pub mod record;
pub mod rng;
pub mod stats;

// re-export frequently-used items for convenience
pub use config::{Config, ConfigBuilder, TrailingRecord};
pub use constants::{DECIMAL_PRECISION, DEFAULT_BUFFER_CAPACITY, ENTRY_SEPARATOR};
pub use error::{ConfigError, ParseRecordError, RecordErrorKind, SummaryError};
pub use record::parse_record;
pub use stats::{StationMap, StationStats};
