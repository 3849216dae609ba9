//! Line-terminator scanning within a filled window.

use crate::constants::LINE_TERMINATOR;

/// Byte range of one terminator-delimited record within a window, together
/// with its 1-based line number in the input. `end` excludes the terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSpan {
    pub start: usize,
    pub end: usize,
    pub line: u64,
}

/// Lazily yields successive record spans within one window.
///
/// Zero-length lines (a terminator immediately following another) are
/// counted for line numbering but never yielded; they are not records.
/// Bytes after the last terminator stay unconsumed and are reported through
/// [`consumed`](Self::consumed) so the caller can carry them into the next
/// window.
#[derive(Debug)]
pub struct LineScanner<'a> {
    window: &'a [u8],
    pos: usize,
    consumed: usize,
    line: u64,
}

impl<'a> LineScanner<'a> {
    /// Scan `window`, numbering its first line `first_line`.
    pub fn new(window: &'a [u8], first_line: u64) -> Self {
        Self {
            window,
            pos: 0,
            consumed: 0,
            line: first_line,
        }
    }

    /// Bytes covered by terminated lines so far; everything beyond is the
    /// caller's leftover.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Line number the next record would receive. Lets the caller keep
    /// global numbering across windows.
    pub fn next_line(&self) -> u64 {
        self.line
    }
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = RecordSpan;

    fn next(&mut self) -> Option<RecordSpan> {
        while self.pos < self.window.len() {
            let rel = self.window[self.pos..]
                .iter()
                .position(|&b| b == LINE_TERMINATOR)?;

            let start = self.pos;
            let end = start + rel;
            let line = self.line;

            self.pos = end + 1;
            self.consumed = self.pos;
            self.line += 1;

            if end > start {
                return Some(RecordSpan { start, end, line });
            }
            // empty line: terminator consumed, nothing emitted
        }
        None
    }
}
