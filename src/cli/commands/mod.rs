//! Command implementations for the log analyzer CLI.
//!
//! Contains the command execution logic, progress reporting, and summary
//! output. Each command lives in its own module.

pub mod parse;
pub mod shared;

pub use shared::ParseReport;

use tokio_util::sync::CancellationToken;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Dispatch to the appropriate subcommand handler.
///
/// The cancellation token is wired to ctrl-c by `main` and threaded through
/// every parse so shutdown stays cooperative.
pub async fn run(args: Args, cancellation: CancellationToken) -> Result<ParseReport> {
    match args.command {
        Some(Commands::Parse(parse_args)) => parse::run_parse(parse_args, cancellation).await,
        None => Err(Error::configuration("no command provided")),
    }
}
