//! Run-time configuration object + fluent builder.

use crate::core::{constants::DEFAULT_BUFFER_CAPACITY, error::ConfigError};

/// What to do with a final record that has no line-break after it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TrailingRecord {
    /// Treat it as a complete record.
    #[default]
    Flush,
    /// Ignore it, stopping at the last line-break.
    Drop,
}

/// Immutable parameters handed to the streaming reader.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bytes held by the read buffer. Must be at least the longest record.
    pub buffer_capacity: usize,
    pub trailing: TrailingRecord,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            trailing: TrailingRecord::default(),
        }
    }
}

/// Fluent builder; nothing is validated until `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    buffer_capacity: Option<usize>,
    trailing: Option<TrailingRecord>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn buffer_capacity(mut self, bytes: usize) -> Self {
        self.buffer_capacity = Some(bytes);
        self
    }
    #[inline]
    #[must_use]
    pub fn buffer_capacity_opt(mut self, bytes: Option<usize>) -> Self {
        if let Some(b) = bytes {
            self.buffer_capacity = Some(b);
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn trailing(mut self, policy: TrailingRecord) -> Self {
        self.trailing = Some(policy);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let buffer_capacity = self.buffer_capacity.unwrap_or(DEFAULT_BUFFER_CAPACITY);
        if buffer_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Config {
            buffer_capacity,
            trailing: self.trailing.unwrap_or_default(),
        })
    }
}
