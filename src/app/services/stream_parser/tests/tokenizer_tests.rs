//! Tests for zero-copy field boundary location.

use super::SAMPLE_LINE;
use crate::Error;
use crate::app::services::stream_parser::tokenizer::tokenize;

#[test]
fn locates_all_five_fields() {
    let record = SAMPLE_LINE.as_bytes();
    let fields = tokenize(record, 1).unwrap();

    assert_eq!(fields.timestamp.slice(record), b"2024-01-15 09:30:00.123");
    assert_eq!(fields.level.slice(record), b"ERROR");
    assert_eq!(
        fields.message.slice(record),
        b"Database connection failed or timeout occured at service level".as_slice()
    );
    assert_eq!(fields.ip.slice(record), b"192.168.1.1");
    assert_eq!(fields.response_time.slice(record), b"1432");
}

#[test]
fn spans_reference_the_callers_bytes() {
    let record = b"t,l,m,i,9";
    let fields = tokenize(record, 1).unwrap();

    assert_eq!(fields.timestamp.offset, 0);
    assert_eq!(fields.timestamp.len, 1);
    assert_eq!(fields.response_time.offset, 8);
    assert_eq!(fields.response_time.len, 1);
}

#[test]
fn trailing_carriage_return_is_stripped_from_field_five() {
    let record = b"t,l,m,i,1432\r";
    let fields = tokenize(record, 1).unwrap();

    assert_eq!(fields.response_time.slice(record), b"1432");
}

#[test]
fn only_one_carriage_return_is_stripped() {
    let record = b"t,l,m,i,1432\r\r";
    let fields = tokenize(record, 1).unwrap();

    assert_eq!(fields.response_time.slice(record), b"1432\r");
}

#[test]
fn too_few_delimiters_is_a_structural_failure() {
    let record = b"2024-01-15 09:30:00.123,INFO,ok";
    let err = tokenize(record, 1).unwrap_err();

    match err {
        Error::MalformedRecord { line, reason } => {
            assert_eq!(line, 1);
            assert_eq!(reason, "missing field boundary");
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn failure_carries_the_records_line_number() {
    let err = tokenize(b"no delimiters here", 17).unwrap_err();
    assert_eq!(err.line(), Some(17));
}

#[test]
fn empty_fields_are_structurally_valid() {
    // Semantic validity is the builder's concern, not the tokenizer's
    let record = b",,,,";
    let fields = tokenize(record, 1).unwrap();

    assert_eq!(fields.timestamp.len, 0);
    assert_eq!(fields.response_time.len, 0);
}

#[test]
fn extra_delimiters_extend_field_five() {
    // Only the first four commas are boundaries; the rest belong to field five
    let record = b"t,l,m,i,12,34";
    let fields = tokenize(record, 1).unwrap();

    assert_eq!(fields.response_time.slice(record), b"12,34");
}
