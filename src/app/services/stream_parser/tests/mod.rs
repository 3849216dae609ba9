//! Test utilities and fixtures for the streaming parser components.

use std::io::Write;

use tempfile::NamedTempFile;

mod scanner_tests;
mod source_tests;
mod tokenizer_tests;

/// A well-formed record matching the fixed five-field format
pub const SAMPLE_LINE: &str = "2024-01-15 09:30:00.123,ERROR,Database connection failed or timeout occured at service level,192.168.1.1,1432";

/// Helper to create a temporary log file with exactly the given bytes.
///
/// No trailing newline is added; tests control termination explicitly.
pub fn write_temp_log(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Helper to build multi-line well-formed content
pub fn sample_log(lines: usize) -> String {
    let mut content = String::new();
    let levels = ["INFO", "WARN", "ERROR", "DEBUG"];
    for i in 0..lines {
        content.push_str(&format!(
            "2024-01-15 09:30:{:02}.{:03},{},request handled,10.0.0.5,{}\n",
            i % 60,
            i % 1000,
            levels[i % levels.len()],
            10 + i
        ));
    }
    content
}
