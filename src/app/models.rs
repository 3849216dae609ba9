//! Data models for parsed log entries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One typed log event, immutable once built.
///
/// `level` and `message` are owned copies made at build time; the window
/// buffer the record was read into is reused by the next fill, so borrowed
/// views into it cannot outlive a parse step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Event time with millisecond precision
    pub timestamp: NaiveDateTime,

    /// Severity text as it appeared in the record (e.g., "ERROR").
    /// Not validated against a vocabulary.
    pub level: String,

    /// Free-form message text
    pub message: String,

    /// Recorded response time in milliseconds. Construction does not
    /// enforce a sign; the strict digit-only field parse rejects negative
    /// literals before an entry is ever built.
    pub response_time_ms: i32,
}

impl LogEntry {
    pub fn new(
        timestamp: NaiveDateTime,
        level: String,
        message: String,
        response_time_ms: i32,
    ) -> Self {
        Self {
            timestamp,
            level,
            message,
            response_time_ms,
        }
    }
}
