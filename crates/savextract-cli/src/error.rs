//! Error conversion utilities for CLI.
//!
//! Converts savextract-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance, and maps them to
//! process exit codes.

use anyhow::Result;
use savextract_core::PipelineError;
use std::path::Path;
use std::process::ExitCode;

/// Exit code for I/O and other unclassified failures.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code when no usable format selector or source was given.
pub const EXIT_USAGE: u8 = 2;
/// Exit code when the decompression tool could not run or failed.
pub const EXIT_TOOL: u8 = 3;
/// Exit code when the tool produced no save entry.
pub const EXIT_MISSING_OUTPUT: u8 = 4;

/// Converts `PipelineError` to user-friendly anyhow error with context
pub fn convert_pipeline_error(err: PipelineError, archive: &Path) -> anyhow::Error {
    let message = match &err {
        PipelineError::ToolSpawn { tool, .. } => format!(
            "Could not start '{}' to decompress '{}'\n\
             HINT: Install offzip or point --tool / SAVEXTRACT_TOOL at the executable.",
            tool.display(),
            archive.display()
        ),
        PipelineError::ToolFailed { tool, stderr, .. } => {
            let mut message = format!(
                "An error occurred during decompression of '{}' with '{}'",
                archive.display(),
                tool.display()
            );
            if !stderr.is_empty() {
                message.push_str(&format!("\nTool output: {stderr}"));
            }
            message.push_str("\nHINT: Nothing was written to the destination directory.");
            message
        }
        PipelineError::MissingIntermediate { expected, produced } => format!(
            "Decompressing '{}' produced {} entries but not {expected}\n\
             HINT: The archive may not be a console save.",
            archive.display(),
            produced.len()
        ),
        PipelineError::ArchiveNotFound { .. } => format!(
            "Source file '{}' does not exist\n\
             HINT: Pass the path of a save archive, e.g. 'savextract -ns Manual.1.sav out'.",
            archive.display()
        ),
        PipelineError::InvalidArchiveName { .. } => format!(
            "Cannot derive a save name from '{}'\n\
             HINT: Rename the archive to use only UTF-8 characters.",
            archive.display()
        ),
        PipelineError::HomeDirUnavailable => "Cannot locate the Documents folder\n\
             HINT: Pass an explicit destination directory instead of -docs."
            .to_string(),
        PipelineError::Io(_) => format!(
            "I/O error while processing '{}'\n\
             HINT: Check that the temp directory and the destination directory exist and are writable.",
            archive.display()
        ),
    };
    anyhow::Error::new(err).context(message)
}

/// Adds context to a pipeline result about the archive being processed
pub fn add_pipeline_context<T>(
    result: Result<T, PipelineError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_pipeline_error(e, archive))
}

/// Picks the exit status for an error that reached `main`.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<PipelineError>() {
        Some(e) if e.is_tool_failure() => EXIT_TOOL,
        Some(PipelineError::MissingIntermediate { .. }) => EXIT_MISSING_OUTPUT,
        _ => EXIT_FAILURE,
    }
}

/// Process exit code for an error that reached `main`.
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}
