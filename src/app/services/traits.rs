//! Capability interface shared by the parser implementations.
//!
//! Callers program against [`LogParser`] and pick an implementation through
//! [`ParserStrategy`](crate::config::ParserStrategy); nothing downstream of
//! the trait knows which strategy produced the entries.

use std::future::Future;
use std::path::Path;

use tokio_util::sync::CancellationToken;

use crate::Result;
use crate::app::models::LogEntry;
use crate::app::services::eager_parser::EagerParser;
use crate::app::services::stream_parser::StreamingParser;
use crate::config::{ParserConfig, ParserStrategy};

/// Parses a file path into a sequence of log entries, honouring a
/// cooperative cancellation token.
///
/// Contract shared by every implementation:
/// - entries come back in input order, duplicates preserved
/// - the outcome is terminal: the full sequence or a single error
/// - cancellation yields [`Error::Cancelled`](crate::Error::Cancelled),
///   never a silently truncated result
pub trait LogParser {
    /// Short strategy name used in logs and reports
    fn name(&self) -> &'static str;

    /// Parse the file at `path` into typed entries
    fn parse(
        &self,
        path: &Path,
        cancellation: CancellationToken,
    ) -> impl Future<Output = Result<Vec<LogEntry>>>;
}

/// Incremental progress emitted by the streaming engine, once per window
/// fill. Passed to an explicit callback, never ambient state, so concurrent
/// parses stay independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// Total bytes read from the file so far
    pub bytes_read: u64,

    /// Entries built from fully-consumed records so far
    pub entries_parsed: usize,
}

/// Run a parse with the strategy named in the configuration.
pub async fn parse_with(
    config: &ParserConfig,
    path: &Path,
    cancellation: CancellationToken,
) -> Result<Vec<LogEntry>> {
    match config.strategy {
        ParserStrategy::Streaming => {
            StreamingParser::new(config.clone())
                .parse(path, cancellation)
                .await
        }
        ParserStrategy::Eager => EagerParser::new().parse(path, cancellation).await,
    }
}
