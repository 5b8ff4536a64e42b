//! JSON output formatter for machine-readable results.
//!
//! Only final results and errors are printed, one JSON document per run.
//! Stage messages and notices are dropped; the result carries the same facts.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use savextract_core::CompanionOutcome;
use savextract_core::Format;
use savextract_core::PipelineReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct CompanionOutput {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

impl From<&CompanionOutcome> for CompanionOutput {
    fn from(outcome: &CompanionOutcome) -> Self {
        match outcome {
            CompanionOutcome::Copied { destination, .. } => Self {
                status: "copied",
                path: Some(destination.display().to_string()),
            },
            CompanionOutcome::Missing { expected } => Self {
                status: "missing",
                path: Some(expected.display().to_string()),
            },
            CompanionOutcome::Disabled => Self {
                status: "disabled",
                path: None,
            },
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_pipeline_result(&self, report: &PipelineReport) -> Result<()> {
        #[derive(Serialize)]
        struct ExtractionOutput {
            archive: String,
            destination_dir: String,
            save_path: String,
            bytes_moved: u64,
            entries_produced: usize,
            companion: CompanionOutput,
            duration_ms: u128,
            warnings: Vec<String>,
        }

        let data = ExtractionOutput {
            archive: report.archive.display().to_string(),
            destination_dir: report.destination_dir.display().to_string(),
            save_path: report.save_path.display().to_string(),
            bytes_moved: report.bytes_moved,
            entries_produced: report.entries_produced,
            companion: CompanionOutput::from(&report.companion),
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        };

        let output = JsonOutput::success("extract", data);
        Self::output(&output)
    }

    fn format_not_implemented(&self, format: Format) -> Result<()> {
        #[derive(Serialize)]
        struct PlaceholderData {
            format: String,
            implemented: bool,
            message: String,
        }

        let output = JsonOutput::success(
            format.to_string(),
            PlaceholderData {
                format: format.to_string(),
                implemented: false,
                message: format!("The '{format}' format processing is not implemented yet."),
            },
        );
        Self::output(&output)
    }

    fn format_usage(&self, usage: &str) {
        let output = JsonOutput::<()>::error("usage", usage);
        let _ = Self::output(&output);
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("extract", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, _message: &str) {}

    fn format_notice(&self, _message: &str) {}

    fn format_info(&self, _message: &str) {}
}
