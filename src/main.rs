use clap::Parser;
use fastlog_analyzer::cli::{args::Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Cancellation token for coordinating graceful shutdown
        let cancellation_token = CancellationToken::new();

        // Cancel all parsing when Ctrl+C is received
        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");

            cancellation_token.cancel();
        };

        tokio::select! {
            result = commands::run(args, cancellation_token.clone()) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(fastlog_analyzer::Error::cancelled(0))
            }
        }
    });

    match result {
        Ok(_report) => {
            // Success - the summary has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Fastlog Analyzer - Delimited Log File Parser");
    println!("============================================");
    println!();
    println!("Parse large five-field comma-delimited log files into typed entries");
    println!("using chunked reads with bounded memory.");
    println!();
    println!("USAGE:");
    println!("    fastlog-analyzer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse a log file and report entry count and throughput");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse with the default streaming strategy:");
    println!("    fastlog-analyzer parse /var/log/app.csv");
    println!();
    println!("    # Compare against the whole-file baseline:");
    println!("    fastlog-analyzer parse /var/log/app.csv --parser eager");
    println!();
    println!("    # Tune the window size:");
    println!("    fastlog-analyzer parse /var/log/app.csv --window-size 262144");
    println!();
    println!("For detailed help on any command, use:");
    println!("    fastlog-analyzer parse --help");
}
