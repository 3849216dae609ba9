//! Tests for line-terminator scanning within a window.

use crate::app::services::stream_parser::scanner::{LineScanner, RecordSpan};

#[test]
fn yields_spans_for_terminated_records() {
    let window = b"a\nbb\nccc\n";
    let spans: Vec<RecordSpan> = LineScanner::new(window, 1).collect();

    assert_eq!(
        spans,
        vec![
            RecordSpan { start: 0, end: 1, line: 1 },
            RecordSpan { start: 2, end: 4, line: 2 },
            RecordSpan { start: 5, end: 8, line: 3 },
        ]
    );
}

#[test]
fn trailing_bytes_stay_unconsumed() {
    let window = b"a\nbb\nccc";
    let mut scanner = LineScanner::new(window, 1);

    let spans: Vec<RecordSpan> = (&mut scanner).collect();
    assert_eq!(spans.len(), 2);
    // "ccc" has no terminator: it is the next leftover
    assert_eq!(scanner.consumed(), 5);
    assert_eq!(scanner.next_line(), 3);
}

#[test]
fn empty_lines_are_counted_but_not_yielded() {
    let window = b"a\n\n\nbb\n";
    let mut scanner = LineScanner::new(window, 1);

    let spans: Vec<RecordSpan> = (&mut scanner).collect();
    assert_eq!(
        spans,
        vec![
            RecordSpan { start: 0, end: 1, line: 1 },
            RecordSpan { start: 4, end: 6, line: 4 },
        ]
    );
    // Empty lines are consumed even though nothing was emitted for them
    assert_eq!(scanner.consumed(), 7);
    assert_eq!(scanner.next_line(), 5);
}

#[test]
fn window_without_terminator_consumes_nothing() {
    let window = b"partial record";
    let mut scanner = LineScanner::new(window, 7);

    assert!(scanner.next().is_none());
    assert_eq!(scanner.consumed(), 0);
    assert_eq!(scanner.next_line(), 7);
}

#[test]
fn empty_window_yields_nothing() {
    let mut scanner = LineScanner::new(b"", 1);
    assert!(scanner.next().is_none());
    assert_eq!(scanner.consumed(), 0);
}

#[test]
fn line_numbering_starts_where_the_caller_says() {
    let window = b"x\ny\n";
    let spans: Vec<RecordSpan> = LineScanner::new(window, 42).collect();

    assert_eq!(spans[0].line, 42);
    assert_eq!(spans[1].line, 43);
}

#[test]
fn carriage_return_is_part_of_the_span() {
    // CR handling belongs to the tokenizer; the scanner is terminator-agnostic
    let window = b"ab\r\n";
    let spans: Vec<RecordSpan> = LineScanner::new(window, 1).collect();

    assert_eq!(spans, vec![RecordSpan { start: 0, end: 3, line: 1 }]);
}
