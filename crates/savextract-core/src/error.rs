//! Error types for the save extraction pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PipelineError`.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can stop a pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// I/O operation failed: scratch setup, listing the tool's output, or
    /// relocating files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The archive passed on the command line does not exist.
    #[error("archive not found: {path}")]
    ArchiveNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The archive file name cannot be transformed as text.
    #[error("archive name is not valid UTF-8: {path}")]
    InvalidArchiveName {
        /// Offending archive path.
        path: PathBuf,
    },

    /// The user profile directory could not be determined.
    #[error("cannot determine the home directory for the default save folder")]
    HomeDirUnavailable,

    /// The decompression tool could not be started.
    #[error("failed to start decompression tool '{tool}': {source}")]
    ToolSpawn {
        /// Program that was invoked.
        tool: PathBuf,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The decompression tool exited unsuccessfully.
    #[error("decompression tool '{tool}' failed ({})", describe_exit(.code))]
    ToolFailed {
        /// Program that was invoked.
        tool: PathBuf,
        /// Exit code, `None` when the process was killed by a signal.
        code: Option<i32>,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The tool succeeded but did not produce the expected entry.
    #[error("expected intermediate file not found: {expected}")]
    MissingIntermediate {
        /// File name the pipeline looked for.
        expected: String,
        /// Files the tool did produce.
        produced: Vec<PathBuf>,
    },
}

#[allow(clippy::ref_option)]
fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(
        || "terminated by signal".to_string(),
        |c| format!("exit code {c}"),
    )
}

impl PipelineError {
    /// Returns `true` if the external tool failed to start or run.
    ///
    /// # Examples
    ///
    /// ```
    /// use savextract_core::PipelineError;
    /// use std::path::PathBuf;
    ///
    /// let err = PipelineError::ToolFailed {
    ///     tool: PathBuf::from("offzip"),
    ///     code: Some(1),
    ///     stderr: String::new(),
    /// };
    /// assert!(err.is_tool_failure());
    /// assert!(!PipelineError::HomeDirUnavailable.is_tool_failure());
    /// ```
    #[must_use]
    pub const fn is_tool_failure(&self) -> bool {
        matches!(self, Self::ToolSpawn { .. } | Self::ToolFailed { .. })
    }

    /// Returns `true` if the run is known to have stopped before anything
    /// was written to the destination directory.
    ///
    /// I/O errors are reported as `false`: they come from several stages, and
    /// one raised while relocating may leave a partially populated
    /// destination.
    #[must_use]
    pub const fn leaves_destination_untouched(&self) -> bool {
        !matches!(self, Self::Io(_))
    }

    /// Returns the files produced by the tool when the expected entry was
    /// missing.
    #[must_use]
    pub fn produced_entries(&self) -> Option<&[PathBuf]> {
        match self {
            Self::MissingIntermediate { produced, .. } => Some(produced),
            _ => None,
        }
    }
}
