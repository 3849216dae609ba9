//! Whole-file parse implementation.

use std::path::Path;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::app::models::LogEntry;
use crate::app::services::stream_parser::record_builder::build_entry;
use crate::app::services::stream_parser::scanner::LineScanner;
use crate::app::services::stream_parser::tokenizer::tokenize;
use crate::app::services::traits::LogParser;
use crate::{Error, Result};

/// Records between cancellation checks while converting lines
const CANCELLATION_CHECK_INTERVAL: usize = 65_536;

/// Reference parser: one read, then a synchronous line-by-line parse.
///
/// Exposes the identical public contract as the streaming engine so callers
/// can substitute implementations transparently.
#[derive(Debug, Clone, Copy, Default)]
pub struct EagerParser;

impl EagerParser {
    pub fn new() -> Self {
        Self
    }
}

impl LogParser for EagerParser {
    fn name(&self) -> &'static str {
        "eager"
    }

    async fn parse(&self, path: &Path, cancellation: CancellationToken) -> Result<Vec<LogEntry>> {
        if cancellation.is_cancelled() {
            return Err(Error::cancelled(0));
        }

        let content = tokio::fs::read(path).await.map_err(|e| Error::io(path, e))?;

        let mut entries = Vec::new();
        let mut scanner = LineScanner::new(&content, 1);

        for span in &mut scanner {
            if entries.len() % CANCELLATION_CHECK_INTERVAL == 0 && cancellation.is_cancelled() {
                return Err(Error::cancelled(entries.len()));
            }

            let record = &content[span.start..span.end];
            let fields = tokenize(record, span.line)?;
            entries.push(build_entry(record, &fields, span.line)?);
        }

        let consumed = scanner.consumed();
        let next_line = scanner.next_line();
        drop(scanner);

        // Tolerate a final record without a terminator.
        if consumed < content.len() {
            let tail = &content[consumed..];
            let fields = tokenize(tail, next_line)?;
            entries.push(build_entry(tail, &fields, next_line)?);
        }

        info!(
            "Parsed {} entries from {} bytes (whole-file read)",
            entries.len(),
            content.len()
        );

        Ok(entries)
    }
}
