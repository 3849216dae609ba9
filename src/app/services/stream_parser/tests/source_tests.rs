//! Tests for the chunked byte source.

use super::write_temp_log;
use crate::Error;
use crate::app::services::stream_parser::source::ChunkedSource;

#[tokio::test]
async fn open_fails_for_a_missing_path() {
    let err = ChunkedSource::open(std::path::Path::new("/nonexistent/log.csv"), 1024)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
}

#[tokio::test]
async fn fill_reads_the_whole_file_into_a_large_window() {
    let file = write_temp_log("hello\nworld\n");
    let mut source = ChunkedSource::open(file.path(), 1024).await.unwrap();

    let read = source.fill().await.unwrap();
    assert_eq!(read, 12);
    assert_eq!(source.window(), b"hello\nworld\n");

    source.carry(12);
    assert_eq!(source.fill().await.unwrap(), 0);
    assert!(source.residual().is_none());
}

#[tokio::test]
async fn carry_moves_the_unconsumed_tail_to_the_front() {
    let file = write_temp_log("hello\nwo");
    let mut source = ChunkedSource::open(file.path(), 1024).await.unwrap();

    source.fill().await.unwrap();
    // Scanner would consume through the terminator only
    source.carry(6);

    assert_eq!(source.window(), b"wo");
    assert_eq!(source.fill().await.unwrap(), 0);
    assert_eq!(source.residual(), Some(b"wo".as_slice()));
}

#[tokio::test]
async fn leftover_survives_subsequent_fills() {
    let content = "aaaa\nbbbb\ncccc\n";
    let file = write_temp_log(content);
    let mut source = ChunkedSource::open(file.path(), 16).await.unwrap();

    let mut reassembled = Vec::new();
    loop {
        let read = source.fill().await.unwrap();
        if read == 0 {
            break;
        }
        let window = source.window();
        // Consume only complete lines, as the scanner would
        let consumed = window
            .iter()
            .rposition(|&b| b == b'\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        reassembled.extend_from_slice(&window[..consumed]);
        source.carry(consumed);
    }

    assert_eq!(reassembled, content.as_bytes());
    assert_eq!(source.bytes_read(), content.len() as u64);
    assert!(source.residual().is_none());
}

#[tokio::test]
async fn window_grows_when_one_record_exceeds_it() {
    // A 40-byte unterminated record through a 16-byte window
    let content = "x".repeat(40);
    let file = write_temp_log(&content);
    let mut source = ChunkedSource::open(file.path(), 16).await.unwrap();

    loop {
        let read = source.fill().await.unwrap();
        if read == 0 {
            break;
        }
        // Nothing is ever consumable: no terminator arrives
        source.carry(0);
    }

    assert_eq!(source.residual(), Some(content.as_bytes()));
}

#[tokio::test]
async fn empty_file_is_end_of_input_immediately() {
    let file = write_temp_log("");
    let mut source = ChunkedSource::open(file.path(), 64).await.unwrap();

    assert_eq!(source.fill().await.unwrap(), 0);
    assert!(source.residual().is_none());
    assert_eq!(source.bytes_read(), 0);
}
