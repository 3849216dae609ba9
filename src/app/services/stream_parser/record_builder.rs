//! Typed conversion of tokenized fields into a log entry.
//!
//! This is the one place the zero-copy discipline ends: level and message
//! bytes are copied into owned strings here, because the window the record
//! points into is overwritten by the next fill. Copy-on-build keeps every
//! entry valid under any buffer-reuse policy.

use chrono::NaiveDateTime;

use super::tokenizer::FieldSet;
use crate::app::models::LogEntry;
use crate::constants::TIMESTAMP_FORMAT;
use crate::{Error, Result};

/// Build a typed entry from a record's bytes and its field boundaries.
///
/// Fails on a timestamp deviating from the fixed format, a response-time
/// field that is not a plain decimal integer, or text fields that are not
/// valid UTF-8. The ip field is located by the tokenizer but never
/// converted.
pub fn build_entry(record: &[u8], fields: &FieldSet, line: u64) -> Result<LogEntry> {
    let timestamp = parse_timestamp(fields.timestamp.slice(record), line)?;
    let level = field_str(fields.level.slice(record), line)?.to_owned();
    let message = field_str(fields.message.slice(record), line)?.to_owned();
    let response_time_ms = parse_response_time(fields.response_time.slice(record), line)?;

    Ok(LogEntry::new(timestamp, level, message, response_time_ms))
}

fn field_str(bytes: &[u8], line: u64) -> Result<&str> {
    std::str::from_utf8(bytes)
        .map_err(|_| Error::malformed_record(line, "field is not valid UTF-8"))
}

/// Strict parse of `yyyy-MM-dd HH:mm:ss.fff`; no heuristics, no fallback
/// formats.
fn parse_timestamp(bytes: &[u8], line: u64) -> Result<NaiveDateTime> {
    let text = field_str(bytes, line)?;
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|e| Error::malformed_timestamp(line, text, e))
}

/// Strict digit-only integer parse: no sign, no whitespace, overflow is an
/// error rather than a wrapped value.
fn parse_response_time(bytes: &[u8], line: u64) -> Result<i32> {
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(Error::malformed_integer(
            line,
            String::from_utf8_lossy(bytes),
        ));
    }

    let mut value: i32 = 0;
    for &byte in bytes {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((byte - b'0') as i32))
            .ok_or_else(|| Error::malformed_integer(line, String::from_utf8_lossy(bytes)))?;
    }
    Ok(value)
}
