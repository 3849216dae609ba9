//! Chunked byte source over a log file.
//!
//! Owns the file handle and one reusable window buffer for the whole parse.
//! Nothing at this layer allocates per record; the only recurring cost is
//! copying the unconsumed tail of each window to its front, which is
//! O(leftover) per read and keeps the total cost linear in file size.

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, trace};

use crate::{Error, Result};

/// Sequential chunked reader with leftover carry.
///
/// Lifecycle: the window is allocated once in [`open`](Self::open), refilled
/// by [`fill`](Self::fill), and dropped with the source on every exit path,
/// including failure and cancellation.
#[derive(Debug)]
pub struct ChunkedSource {
    file: File,
    path: PathBuf,
    window: Vec<u8>,
    /// Bytes of `window` currently holding data
    filled: usize,
    /// Bytes at the front of `window` carried over from the previous fill;
    /// they belong to a record whose terminator has not been read yet
    leftover: usize,
    bytes_read: u64,
}

impl ChunkedSource {
    /// Open `path` for chunked reading with the given initial window capacity.
    pub async fn open(path: &Path, window_capacity: usize) -> Result<Self> {
        let file = File::open(path).await.map_err(|e| Error::io(path, e))?;
        debug!(
            "Opened {} with a {}-byte window",
            path.display(),
            window_capacity
        );

        Ok(Self {
            file,
            path: path.to_path_buf(),
            window: vec![0; window_capacity],
            filled: 0,
            leftover: 0,
            bytes_read: 0,
        })
    }

    /// Perform one read into the window, after any leftover bytes.
    ///
    /// Returns the number of new bytes read; zero means the file is
    /// exhausted. A record longer than the window leaves no room to read
    /// into, so the window doubles first; growth keeps the parse result
    /// independent of the configured capacity.
    pub async fn fill(&mut self) -> Result<usize> {
        if self.leftover == self.window.len() {
            let grown = self.window.len() * 2;
            self.window.resize(grown, 0);
            trace!("Window grown to {} bytes for an oversized record", grown);
        }

        let read = self
            .file
            .read(&mut self.window[self.leftover..])
            .await
            .map_err(|e| Error::io(&self.path, e))?;

        self.filled = self.leftover + read;
        self.bytes_read += read as u64;
        Ok(read)
    }

    /// The bytes currently holding data
    pub fn window(&self) -> &[u8] {
        &self.window[..self.filled]
    }

    /// Move the unconsumed tail to the window's front.
    ///
    /// The tail becomes the leftover the next [`fill`](Self::fill) reads
    /// after. Must be called with the consumed byte count reported by the
    /// scanner before the next fill.
    pub fn carry(&mut self, consumed: usize) {
        debug_assert!(consumed <= self.filled);
        let leftover = self.filled - consumed;
        if leftover > 0 && consumed > 0 {
            self.window.copy_within(consumed..self.filled, 0);
        }
        self.leftover = leftover;
        self.filled = leftover;
    }

    /// Unterminated bytes still held once the file is exhausted, if any.
    ///
    /// A non-empty leftover at end-of-file is a final, terminator-less
    /// record the engine must still emit.
    pub fn residual(&self) -> Option<&[u8]> {
        (self.filled > 0).then(|| &self.window[..self.filled])
    }

    /// Total bytes read from the file so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}
