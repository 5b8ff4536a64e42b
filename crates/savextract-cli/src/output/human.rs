//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use savextract_core::CompanionOutcome;
use savextract_core::Format;
use savextract_core::PipelineReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;

        if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn companion_line(outcome: &CompanionOutcome) -> String {
        match outcome {
            CompanionOutcome::Copied { destination, .. } => {
                format!("  Screenshot: {}", destination.display())
            }
            CompanionOutcome::Missing { expected } => {
                format!("  Screenshot: none ({} not found)", expected.display())
            }
            CompanionOutcome::Disabled => "  Screenshot: skipped".to_string(),
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_pipeline_result(&self, report: &PipelineReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} Save extracted", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line("Save extracted");
        }

        let _ = self
            .term
            .write_line(&format!("  Save file: {}", report.save_path.display()));
        let _ = self.term.write_line(&format!(
            "  Size: {}",
            Self::format_size(report.bytes_moved)
        ));
        let _ = self.term.write_line(&Self::companion_line(&report.companion));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Tool entries: {}", report.entries_produced));
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
        }

        for warning in &report.warnings {
            self.format_warning(warning);
        }

        Ok(())
    }

    fn format_not_implemented(&self, format: Format) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        let _ = self.term.write_line(&format!(
            "The '{format}' format processing is not implemented yet."
        ));
        Ok(())
    }

    fn format_usage(&self, usage: &str) {
        let _ = self.err_term.write_line(usage);
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("WARNING: {message}"));
        }
    }

    fn format_notice(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(message);
    }

    fn format_info(&self, message: &str) {
        if !self.verbose {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{}", style(message).dim()));
        } else {
            let _ = self.term.write_line(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_size() {
        assert_eq!(HumanFormatter::format_size(0), "0 B");
        assert_eq!(HumanFormatter::format_size(1023), "1023 B");
        assert_eq!(HumanFormatter::format_size(1536), "1.5 KB");
        assert_eq!(HumanFormatter::format_size(2 * 1024 * 1024), "2.0 MB");
    }

    #[test]
    fn test_companion_line() {
        let copied = CompanionOutcome::Copied {
            source: PathBuf::from("Manual.1.png"),
            destination: PathBuf::from("out/ManualSave_1.png"),
            bytes: 3,
        };
        assert!(HumanFormatter::companion_line(&copied).contains("ManualSave_1.png"));

        let missing = CompanionOutcome::Missing {
            expected: PathBuf::from("Manual.1.png"),
        };
        assert!(HumanFormatter::companion_line(&missing).contains("not found"));

        assert!(HumanFormatter::companion_line(&CompanionOutcome::Disabled).contains("skipped"));
    }
}
