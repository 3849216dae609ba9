//! Configuration for parse invocations.
//!
//! Provides the tunables a caller can set per parse: window sizing, sink
//! pre-sizing, and which parser implementation to run.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ENTRY_CAPACITY_HINT, DEFAULT_WINDOW_CAPACITY, MIN_WINDOW_CAPACITY};
use crate::{Error, Result};

/// Parser implementation selected at runtime.
///
/// Both variants expose the identical parse contract, so callers can
/// substitute one for the other transparently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ParserStrategy {
    /// Chunked reads through a reusable window buffer (the default)
    Streaming,
    /// Whole-file read followed by a line-by-line parse; reference baseline
    Eager,
}

/// Tunables for a single parse invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Initial window buffer capacity in bytes.
    ///
    /// The window grows (doubling) only when one record exceeds it, so the
    /// parse result is independent of this value.
    pub window_capacity: usize,

    /// Pre-size hint for the entry collection
    pub entry_capacity_hint: usize,

    /// Which parser implementation to run
    pub strategy: ParserStrategy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            entry_capacity_hint: DEFAULT_ENTRY_CAPACITY_HINT,
            strategy: ParserStrategy::Streaming,
        }
    }
}

impl ParserConfig {
    /// Validate tunables before a parse starts
    pub fn validate(&self) -> Result<()> {
        if self.window_capacity < MIN_WINDOW_CAPACITY {
            return Err(Error::configuration(format!(
                "window capacity {} is below the minimum of {} bytes",
                self.window_capacity, MIN_WINDOW_CAPACITY
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ParserConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.strategy, ParserStrategy::Streaming);
    }

    #[test]
    fn undersized_window_is_rejected() {
        let config = ParserConfig {
            window_capacity: 8,
            ..ParserConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
