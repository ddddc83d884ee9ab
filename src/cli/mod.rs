mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;
use tracing::{Level, error};

use crate::{core::error::SummaryError, logging::init_tracing};

pub fn run() -> Result<(), SummaryError> {
    let cli = parse::Cli::parse();
    init_tracing(&cli.log_level);
    match cli.cmd {
        parse::Command::Summarize(a) => handlers::summarize(&a),
        parse::Command::Generate(a) => handlers::generate(&a),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}

/// Surface a fatal error. Goes straight to stderr when the log filter would
/// hide it; returns whether it was logged instead.
pub fn report_error(e: &SummaryError) -> bool {
    if tracing::enabled!(Level::ERROR) {
        error!(error = %e, "aborted");
        true
    } else {
        eprintln!("error: {e}");
        false
    }
}
