//! Parse output and throughput counters for the streaming engine.

use serde::{Deserialize, Serialize};

use crate::app::models::LogEntry;

/// Outcome of a successful streaming parse
#[derive(Debug, Clone)]
pub struct ParseOutput {
    /// Typed entries in input order
    pub entries: Vec<LogEntry>,

    /// Counters accumulated while parsing
    pub stats: ParseStats,
}

/// Counters for one parse invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total bytes read from the file
    pub bytes_read: u64,

    /// Number of window fills performed
    pub windows_filled: usize,

    /// Lines scanned, counting empty lines and any final unterminated record
    pub lines_scanned: u64,

    /// Entries built
    pub entries_parsed: usize,
}

impl ParseStats {
    /// Throughput in megabytes per second for a measured wall-clock duration
    pub fn throughput_mb_per_sec(&self, elapsed: std::time::Duration) -> f64 {
        let secs = elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            (self.bytes_read as f64 / (1024.0 * 1024.0)) / secs
        }
    }
}
