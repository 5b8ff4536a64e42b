//! Formats that are recognized on the command line but not processed.

use crate::output::OutputFormatter;
use anyhow::Result;
use savextract_core::Format;
use std::process::ExitCode;

/// Reports that `format` is not implemented. Touches no files.
pub fn execute(format: Format, formatter: &dyn OutputFormatter) -> Result<ExitCode> {
    formatter.format_not_implemented(format)?;
    Ok(ExitCode::SUCCESS)
}
