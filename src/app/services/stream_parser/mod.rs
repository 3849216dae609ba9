//! Chunked streaming parser for delimited log files.
//!
//! This is the core engine: it reads the file as a sequence of byte windows,
//! finds record boundaries that may straddle two reads, splits each record
//! into fields without copying, and converts fields into typed entries.
//!
//! ## Architecture
//!
//! The parser is organized into leaf-first components:
//! - [`source`] - Chunked file reads into a single reusable window buffer
//! - [`scanner`] - Line-terminator scanning within a filled window
//! - [`tokenizer`] - Zero-copy field boundary location within one record
//! - [`record_builder`] - Typed conversion of tokenized fields
//! - [`engine`] - Orchestration, sink pre-sizing, cancellation, progress
//! - [`stats`] - Parse output and throughput counters
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fastlog_analyzer::app::services::stream_parser::StreamingParser;
//! use fastlog_analyzer::config::ParserConfig;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> fastlog_analyzer::Result<()> {
//! let parser = StreamingParser::new(ParserConfig::default());
//! let output = parser
//!     .parse_with_progress(std::path::Path::new("app.log"), CancellationToken::new(), None)
//!     .await?;
//!
//! println!(
//!     "Parsed {} entries from {} bytes",
//!     output.stats.entries_parsed, output.stats.bytes_read
//! );
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod record_builder;
pub mod scanner;
pub mod source;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use engine::StreamingParser;
pub use scanner::{LineScanner, RecordSpan};
pub use source::ChunkedSource;
pub use stats::{ParseOutput, ParseStats};
pub use tokenizer::{FieldSet, FieldSpan};
