//! Zero-copy field boundary location within one record.
//!
//! The record format is fixed-arity, comma-delimited, five fields in order:
//! timestamp, level, message, ip address (ignored downstream), response
//! time. Tokenizing returns (offset, length) pairs over the caller's bytes;
//! nothing is copied here.

use crate::constants::{CARRIAGE_RETURN, FIELD_DELIMITER};
use crate::{Error, Result};

/// Non-owning (offset, length) view of one field within a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    pub offset: usize,
    pub len: usize,
}

impl FieldSpan {
    /// The field's bytes within the record it was tokenized from
    pub fn slice<'a>(&self, record: &'a [u8]) -> &'a [u8] {
        &record[self.offset..self.offset + self.len]
    }
}

/// Field boundaries for one five-field record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSet {
    pub timestamp: FieldSpan,
    pub level: FieldSpan,
    pub message: FieldSpan,
    pub ip: FieldSpan,
    pub response_time: FieldSpan,
}

/// Locate the first four delimiters of `record` and derive the five field
/// spans. Field five runs to the end of the record, with a single trailing
/// carriage return stripped when present.
///
/// Fewer than four delimiters is a structural failure, reported with the
/// record's 1-based line number.
pub fn tokenize(record: &[u8], line: u64) -> Result<FieldSet> {
    let mut delimiters = [0usize; 4];
    let mut found = 0;

    for (i, &byte) in record.iter().enumerate() {
        if byte == FIELD_DELIMITER {
            delimiters[found] = i;
            found += 1;
            if found == delimiters.len() {
                break;
            }
        }
    }

    if found < delimiters.len() {
        return Err(Error::malformed_record(line, "missing field boundary"));
    }

    let mut tail_end = record.len();
    if tail_end > delimiters[3] + 1 && record[tail_end - 1] == CARRIAGE_RETURN {
        tail_end -= 1;
    }

    let span = |start: usize, end: usize| FieldSpan {
        offset: start,
        len: end - start,
    };

    Ok(FieldSet {
        timestamp: span(0, delimiters[0]),
        level: span(delimiters[0] + 1, delimiters[1]),
        message: span(delimiters[1] + 1, delimiters[2]),
        ip: span(delimiters[2] + 1, delimiters[3]),
        response_time: span(delimiters[3] + 1, tail_end),
    })
}
