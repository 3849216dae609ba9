//! Fastlog Analyzer Library
//!
//! A Rust library for parsing large comma-delimited log files into typed
//! entries without reading the whole file into memory.
//!
//! This library provides tools for:
//! - Reading a log file as a sequence of fixed-size byte windows
//! - Locating record boundaries that straddle two reads
//! - Splitting records into fields without copying the underlying bytes
//! - Converting fields into typed values with fail-fast error reporting
//! - A whole-file reference parser with the identical public contract
//! - Cooperative cancellation and explicit progress reporting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod eager_parser;
        pub mod stream_parser;
        pub mod traits;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::LogEntry;
pub use app::services::traits::LogParser;
pub use config::{ParserConfig, ParserStrategy};

/// Result type alias for log parsing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for log parsing operations
///
/// Every failure carries enough positional context for the caller to
/// diagnose the input: the file path for I/O failures, the 1-based line
/// number for structural and conversion failures.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Opening or reading the input file failed
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Structurally malformed record (insufficient delimiters, invalid UTF-8)
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// Timestamp field present but not parseable with the fixed format
    #[error("malformed timestamp at line {line}: '{value}'")]
    MalformedTimestamp {
        line: u64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Response-time field present but not a plain non-negative integer
    #[error("malformed response time at line {line}: '{value}'")]
    MalformedInteger { line: u64, value: String },

    /// Cooperative cancellation observed before the parse completed
    #[error("parse cancelled after {entries_parsed} entries")]
    Cancelled { entries_parsed: usize },

    /// Invalid configuration values
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error carrying the offending path
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create a structural record error at a 1-based line number
    pub fn malformed_record(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Create a timestamp conversion error
    pub fn malformed_timestamp(
        line: u64,
        value: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        Self::MalformedTimestamp {
            line,
            value: value.into(),
            source,
        }
    }

    /// Create an integer conversion error
    pub fn malformed_integer(line: u64, value: impl Into<String>) -> Self {
        Self::MalformedInteger {
            line,
            value: value.into(),
        }
    }

    /// Create a cancellation outcome recording how far the parse got
    pub fn cancelled(entries_parsed: usize) -> Self {
        Self::Cancelled { entries_parsed }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The 1-based input line this error refers to, when positional
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::MalformedRecord { line, .. }
            | Self::MalformedTimestamp { line, .. }
            | Self::MalformedInteger { line, .. } => Some(*line),
            _ => None,
        }
    }
}
