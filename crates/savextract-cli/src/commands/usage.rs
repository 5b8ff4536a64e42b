//! Usage fallback for runs without a usable format selector.

use crate::cli::USAGE;
use crate::error::EXIT_USAGE;
use crate::output::OutputFormatter;
use std::process::ExitCode;

pub fn execute(formatter: &dyn OutputFormatter) -> ExitCode {
    formatter.format_usage(USAGE);
    ExitCode::from(EXIT_USAGE)
}
