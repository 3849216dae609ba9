//! Parse orchestration for the chunked streaming strategy.
//!
//! Drives source → scanner → tokenizer → record builder and accumulates
//! entries into a pre-sized sink. Suspension happens only at the read
//! boundary; all scanning and conversion between reads is synchronous, so a
//! record is never half-parsed across a suspension point.

use std::path::Path;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::record_builder::build_entry;
use super::scanner::LineScanner;
use super::source::ChunkedSource;
use super::stats::{ParseOutput, ParseStats};
use super::tokenizer::tokenize;
use crate::app::models::LogEntry;
use crate::app::services::traits::{LogParser, ProgressUpdate};
use crate::config::ParserConfig;
use crate::{Error, Result};

/// Streaming chunked parser.
///
/// Memory stays bounded by the window capacity plus the accumulated
/// entries; the file is never resident in full. On any component failure
/// the engine propagates immediately, abandoning the remaining input.
#[derive(Debug, Clone)]
pub struct StreamingParser {
    config: ParserConfig,
}

impl StreamingParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse `path`, invoking `progress` once per window fill.
    ///
    /// Cancellation is checked at the same boundary. A cancelled parse
    /// returns [`Error::Cancelled`]; it never silently returns the entries
    /// accumulated so far.
    pub async fn parse_with_progress(
        &self,
        path: &Path,
        cancellation: CancellationToken,
        mut progress: Option<&mut dyn FnMut(ProgressUpdate)>,
    ) -> Result<ParseOutput> {
        self.config.validate()?;

        let mut source = ChunkedSource::open(path, self.config.window_capacity).await?;
        let mut entries: Vec<LogEntry> = Vec::with_capacity(self.config.entry_capacity_hint);
        let mut stats = ParseStats::default();
        let mut next_line: u64 = 1;

        loop {
            if cancellation.is_cancelled() {
                debug!("Cancellation observed after {} entries", entries.len());
                return Err(Error::cancelled(entries.len()));
            }

            let new_bytes = source.fill().await?;
            if new_bytes == 0 {
                break;
            }
            stats.windows_filled += 1;

            let consumed = {
                let window = source.window();
                let mut scanner = LineScanner::new(window, next_line);

                for span in &mut scanner {
                    let record = &window[span.start..span.end];
                    let fields = tokenize(record, span.line)?;
                    entries.push(build_entry(record, &fields, span.line)?);
                }

                next_line = scanner.next_line();
                scanner.consumed()
            };
            source.carry(consumed);

            if let Some(report) = progress.as_mut() {
                report(ProgressUpdate {
                    bytes_read: source.bytes_read(),
                    entries_parsed: entries.len(),
                });
            }
        }

        // A final record without a terminator still counts.
        if let Some(tail) = source.residual() {
            let fields = tokenize(tail, next_line)?;
            entries.push(build_entry(tail, &fields, next_line)?);
            next_line += 1;
        }

        stats.bytes_read = source.bytes_read();
        stats.lines_scanned = next_line - 1;
        stats.entries_parsed = entries.len();

        info!(
            "Parsed {} entries from {} bytes in {} window fills",
            stats.entries_parsed, stats.bytes_read, stats.windows_filled
        );

        Ok(ParseOutput { entries, stats })
    }
}

impl LogParser for StreamingParser {
    fn name(&self) -> &'static str {
        "streaming"
    }

    async fn parse(&self, path: &Path, cancellation: CancellationToken) -> Result<Vec<LogEntry>> {
        let output = self.parse_with_progress(path, cancellation, None).await?;
        Ok(output.entries)
    }
}
