//! The parse command: run a parser strategy over one file and report.

use std::time::Instant;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::shared::{self, ParseReport};
use crate::app::services::eager_parser::EagerParser;
use crate::app::services::stream_parser::StreamingParser;
use crate::app::services::traits::{LogParser, ProgressUpdate};
use crate::cli::args::ParseArgs;
use crate::config::{ParserConfig, ParserStrategy};
use crate::{Error, Result};

/// Execute the parse command
pub async fn run_parse(args: ParseArgs, cancellation: CancellationToken) -> Result<ParseReport> {
    shared::setup_logging(&args.log_level, args.quiet)?;

    let config = ParserConfig {
        window_capacity: args.window_size,
        entry_capacity_hint: args.capacity_hint,
        strategy: args.strategy,
    };
    config.validate()?;

    let file_size = tokio::fs::metadata(&args.path)
        .await
        .map_err(|e| Error::io(&args.path, e))?
        .len();

    info!(
        "Parsing {} ({}) with the {:?} strategy",
        args.path.display(),
        ParseReport::format_size(file_size),
        config.strategy
    );

    let started = Instant::now();

    let entries = match config.strategy {
        ParserStrategy::Streaming => {
            let parser = StreamingParser::new(config.clone());

            if args.quiet {
                parser
                    .parse_with_progress(&args.path, cancellation, None)
                    .await?
                    .entries
            } else {
                let progress_bar = create_byte_progress_bar(file_size);
                let mut on_progress = |update: ProgressUpdate| {
                    progress_bar.set_position(update.bytes_read);
                    progress_bar.set_message(format!("{} entries", update.entries_parsed));
                };

                let outcome = parser
                    .parse_with_progress(&args.path, cancellation, Some(&mut on_progress))
                    .await;

                match outcome {
                    Ok(output) => {
                        progress_bar
                            .finish_with_message(format!("{} entries", output.stats.entries_parsed));
                        output.entries
                    }
                    Err(e) => {
                        progress_bar.abandon();
                        return Err(e);
                    }
                }
            }
        }
        ParserStrategy::Eager => EagerParser::new().parse(&args.path, cancellation).await?,
    };

    let report = ParseReport {
        strategy: config.strategy,
        entries_parsed: entries.len(),
        file_size,
        elapsed: started.elapsed(),
    };

    if !args.quiet {
        print_summary(&report);
    }

    Ok(report)
}

fn create_byte_progress_bar(total_bytes: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_bytes);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%) | {msg}",
            )
            .unwrap()
            .progress_chars("█▉▊▋▌▍▎▏  "),
    );
    pb.set_message("Parsing");
    pb
}

fn print_summary(report: &ParseReport) {
    println!();
    println!("{}", "Parse complete".green().bold());
    println!("  Strategy:   {:?}", report.strategy);
    println!(
        "  Entries:    {}",
        report.entries_parsed.to_string().cyan()
    );
    println!("  Input size: {}", ParseReport::format_size(report.file_size));
    println!("  Elapsed:    {:.2?}", report.elapsed);
    println!(
        "  Throughput: {}",
        format!("{:.1} MB/s", report.throughput_mb_per_sec()).cyan()
    );
}
