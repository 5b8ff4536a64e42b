//! Stage reporting while the pipeline runs.

use crate::output::OutputFormatter;
use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use savextract_core::CompanionOutcome;
use savextract_core::PipelineObserver;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// Observer that forwards pipeline stages to the output formatter.
///
/// While offzip runs a spinner is shown on a TTY, since the tool gives no
/// progress of its own and may take a while on large saves.
pub struct StageReporter<'a> {
    formatter: &'a dyn OutputFormatter,
    show_spinner: bool,
    spinner: Option<ProgressBar>,
}

impl<'a> StageReporter<'a> {
    #[must_use]
    pub fn new(formatter: &'a dyn OutputFormatter, show_spinner: bool) -> Self {
        Self {
            formatter,
            show_spinner,
            spinner: None,
        }
    }

    /// Checks if we should show the spinner (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }

    fn start_spinner(&mut self, archive: &Path) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg} ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        let name = archive
            .file_name()
            .map_or_else(|| archive.display().to_string(), |n| n.to_string_lossy().into_owned());
        bar.set_message(format!("Decompressing {name}"));
        bar.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(bar);
    }

    fn stop_spinner(&mut self) {
        if let Some(bar) = self.spinner.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for StageReporter<'_> {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}

impl PipelineObserver for StageReporter<'_> {
    fn on_destination_resolved(&mut self, dir: &Path) {
        self.formatter
            .format_info(&format!("Destination directory: {}", dir.display()));
    }

    fn on_tool_start(&mut self, archive: &Path, scratch: &Path) {
        self.formatter
            .format_info(&format!("Scratch directory: {}", scratch.display()));
        if self.show_spinner {
            self.start_spinner(archive);
        }
    }

    fn on_tool_finish(&mut self, produced: &[PathBuf]) {
        self.stop_spinner();
        self.formatter.format_info(&format!(
            "Decompression successful, {} entries produced",
            produced.len()
        ));
    }

    fn on_save_relocated(&mut self, path: &Path) {
        self.formatter
            .format_info(&format!("File has been renamed and moved to {}", path.display()));
    }

    fn on_companion(&mut self, outcome: &CompanionOutcome) {
        match outcome {
            CompanionOutcome::Copied { destination, .. } => {
                self.formatter.format_info(&format!(
                    "Copied and renamed PNG file to {}",
                    destination.display()
                ));
            }
            CompanionOutcome::Missing { expected } => {
                self.formatter
                    .format_notice(&format!("No PNG file found to copy: {}", expected.display()));
            }
            CompanionOutcome::Disabled => {}
        }
    }
}
