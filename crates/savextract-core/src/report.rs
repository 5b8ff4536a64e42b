//! Pipeline reporting.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// What happened to the companion screenshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanionOutcome {
    /// The image was copied next to the relocated save.
    Copied {
        /// Image that was copied.
        source: PathBuf,
        /// Copy in the destination directory.
        destination: PathBuf,
        /// Bytes copied.
        bytes: u64,
    },
    /// No image sits next to the archive.
    Missing {
        /// Where the image was looked for.
        expected: PathBuf,
    },
    /// Copying images is turned off.
    Disabled,
}

impl CompanionOutcome {
    /// Returns the destination path if the image was copied.
    #[must_use]
    pub fn copied_to(&self) -> Option<&Path> {
        match self {
            Self::Copied { destination, .. } => Some(destination),
            _ => None,
        }
    }
}

/// Report of a completed pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Archive that was processed.
    pub archive: PathBuf,

    /// Resolved destination directory.
    pub destination_dir: PathBuf,

    /// Final path of the relocated save.
    pub save_path: PathBuf,

    /// Size of the relocated save in bytes.
    pub bytes_moved: u64,

    /// Number of files the tool produced.
    pub entries_produced: usize,

    /// Companion image result.
    pub companion: CompanionOutcome,

    /// Scratch directory used for the run. Already removed.
    pub scratch_dir: PathBuf,

    /// Duration of the run.
    pub duration: Duration,

    /// Non-fatal problems, such as a scratch directory that could not be
    /// removed.
    pub warnings: Vec<String>,
}

impl PipelineReport {
    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Receives stage notifications while the pipeline runs.
///
/// # Examples
///
/// ```
/// use savextract_core::PipelineObserver;
/// use std::path::Path;
///
/// struct Printer;
///
/// impl PipelineObserver for Printer {
///     fn on_destination_resolved(&mut self, dir: &Path) {
///         println!("destination: {}", dir.display());
///     }
///
///     fn on_tool_start(&mut self, archive: &Path, _scratch: &Path) {
///         println!("unpacking {}", archive.display());
///     }
///
///     fn on_tool_finish(&mut self, produced: &[std::path::PathBuf]) {
///         println!("{} entries", produced.len());
///     }
///
///     fn on_save_relocated(&mut self, path: &Path) {
///         println!("saved {}", path.display());
///     }
///
///     fn on_companion(&mut self, _outcome: &savextract_core::CompanionOutcome) {}
/// }
/// ```
pub trait PipelineObserver {
    /// Called once the destination directory is known.
    fn on_destination_resolved(&mut self, dir: &Path);

    /// Called right before the external tool starts.
    fn on_tool_start(&mut self, archive: &Path, scratch: &Path);

    /// Called after the tool exits successfully.
    fn on_tool_finish(&mut self, produced: &[PathBuf]);

    /// Called after the save has been moved to its final path.
    fn on_save_relocated(&mut self, path: &Path);

    /// Called with the companion image result.
    fn on_companion(&mut self, outcome: &CompanionOutcome);
}

/// Observer that ignores every notification.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {
    fn on_destination_resolved(&mut self, _dir: &Path) {}

    fn on_tool_start(&mut self, _archive: &Path, _scratch: &Path) {}

    fn on_tool_finish(&mut self, _produced: &[PathBuf]) {}

    fn on_save_relocated(&mut self, _path: &Path) {}

    fn on_companion(&mut self, _outcome: &CompanionOutcome) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> PipelineReport {
        PipelineReport {
            archive: PathBuf::from("Manual.1.sav"),
            destination_dir: PathBuf::from("out"),
            save_path: PathBuf::from("out/ManualSave_1.sav"),
            bytes_moved: 10,
            entries_produced: 1,
            companion: CompanionOutcome::Disabled,
            scratch_dir: PathBuf::from("/tmp/savextract-x"),
            duration: Duration::ZERO,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_warnings() {
        let mut report = sample_report();
        assert!(!report.has_warnings());
        report.add_warning("scratch directory left behind".into());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_companion_copied_to() {
        let copied = CompanionOutcome::Copied {
            source: PathBuf::from("Manual.1.png"),
            destination: PathBuf::from("out/ManualSave_1.png"),
            bytes: 4,
        };
        assert_eq!(copied.copied_to(), Some(Path::new("out/ManualSave_1.png")));
        assert_eq!(CompanionOutcome::Disabled.copied_to(), None);
        let missing = CompanionOutcome::Missing {
            expected: PathBuf::from("Manual.1.png"),
        };
        assert_eq!(missing.copied_to(), None);
    }

    #[test]
    fn test_noop_observer() {
        let mut observer = NoopObserver;
        observer.on_destination_resolved(Path::new("out"));
        observer.on_tool_finish(&[]);
        observer.on_companion(&CompanionOutcome::Disabled);
    }
}
