//! Command-line argument definitions for the log analyzer.
//!
//! Defines the complete CLI interface using the clap derive API.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ParserStrategy;
use crate::constants::{DEFAULT_ENTRY_CAPACITY_HINT, DEFAULT_WINDOW_CAPACITY};

/// CLI arguments for the log analyzer
///
/// Parses large comma-delimited log files into typed entries using chunked
/// reads with a bounded, reusable window buffer.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fastlog-analyzer",
    version,
    about = "Parse large delimited log files into typed entries with bounded memory",
    long_about = "Parses five-field comma-delimited log files (timestamp, level, message, ip, \
                  response time) into typed entries. The default streaming strategy reads the \
                  file through a fixed-size reusable window so memory stays bounded regardless \
                  of file size; an eager whole-file strategy is available as a baseline."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a log file and report entry count and throughput
    Parse(ParseArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Path to the log file to parse
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Parser implementation to run
    #[arg(
        short = 'p',
        long = "parser",
        value_enum,
        default_value = "streaming",
        help = "Parser implementation: streaming (chunked) or eager (whole-file)"
    )]
    pub strategy: ParserStrategy,

    /// Initial window buffer size in bytes (streaming parser only)
    ///
    /// The parse result is independent of this value; it only tunes read
    /// granularity. The window grows automatically if a single record
    /// exceeds it.
    #[arg(
        long = "window-size",
        value_name = "BYTES",
        default_value_t = DEFAULT_WINDOW_CAPACITY,
        help = "Initial window buffer size in bytes"
    )]
    pub window_size: usize,

    /// Pre-size hint for the entry collection
    #[arg(
        long = "capacity-hint",
        value_name = "ENTRIES",
        default_value_t = DEFAULT_ENTRY_CAPACITY_HINT,
        help = "Pre-size hint for the entry collection"
    )]
    pub capacity_hint: usize,

    /// Suppress the progress bar and summary, log errors only
    #[arg(short, long, help = "Suppress progress output")]
    pub quiet: bool,

    /// Log level for diagnostic output
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        help = "Log level (error, warn, info, debug, trace)"
    )]
    pub log_level: String,
}
