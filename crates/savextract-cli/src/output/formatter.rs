//! Output formatter trait for CLI results.

use anyhow::Result;
use savextract_core::Format;
use savextract_core::PipelineReport;
use serde::Serialize;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format a completed extraction
    fn format_pipeline_result(&self, report: &PipelineReport) -> Result<()>;

    /// Format the notice for a recognized but unimplemented format
    fn format_not_implemented(&self, format: Format) -> Result<()>;

    /// Format the usage line
    fn format_usage(&self, usage: &str);

    /// Format error message
    fn format_error(&self, error: &anyhow::Error);

    /// Format warning message
    fn format_warning(&self, message: &str);

    /// Format a notice that is not a problem but worth showing
    fn format_notice(&self, message: &str);

    /// Format a stage message shown only in verbose mode
    fn format_info(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
