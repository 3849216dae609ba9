//! Shared components for CLI commands.

use std::time::Duration;

use tracing::debug;

use crate::Result;
use crate::config::ParserStrategy;

/// Summary of one parse invocation, reported after the command finishes
#[derive(Debug, Clone)]
pub struct ParseReport {
    /// Strategy that produced the entries
    pub strategy: ParserStrategy,
    /// Number of entries parsed
    pub entries_parsed: usize,
    /// Size of the input file in bytes
    pub file_size: u64,
    /// Wall-clock parse time
    pub elapsed: Duration,
}

impl ParseReport {
    /// Throughput in megabytes per second
    pub fn throughput_mb_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            (self.file_size as f64 / (1024.0 * 1024.0)) / secs
        }
    }

    /// Format a byte count in human-readable form
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fastlog_analyzer={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
