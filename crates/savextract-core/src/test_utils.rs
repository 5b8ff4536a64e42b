//! Test doubles for the extraction pipeline.
//!
//! These stand in for offzip so pipeline behavior can be exercised without
//! the real executable.
//!
//! # Panics
//!
//! Functions in this module may panic on I/O errors since they are designed
//! for test use only.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use crate::CompanionOutcome;
use crate::PipelineError;
use crate::PipelineObserver;
use crate::Result;
use crate::config::DEFAULT_INTERMEDIATE_NAME;
use crate::extractor::Extractor;
use crate::extractor::list_files;
use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Extractor that writes a fixed set of files into the output directory.
///
/// # Examples
///
/// ```
/// use savextract_core::extractor::Extractor;
/// use savextract_core::test_utils::StubExtractor;
///
/// let temp = tempfile::TempDir::new().unwrap();
/// let extractor = StubExtractor::snf(b"payload");
/// let produced = extractor
///     .extract(std::path::Path::new("save.sav"), temp.path())
///     .unwrap();
/// assert_eq!(produced.len(), 1);
/// assert_eq!(extractor.calls(), 1);
/// ```
#[derive(Debug, Default)]
pub struct StubExtractor {
    entries: Vec<(String, Vec<u8>)>,
    calls: Cell<usize>,
}

impl StubExtractor {
    /// Produces the given `(name, contents)` entries.
    #[must_use]
    pub fn new(entries: Vec<(String, Vec<u8>)>) -> Self {
        Self {
            entries,
            calls: Cell::new(0),
        }
    }

    /// Produces only the expected `0000000c.snf` entry.
    #[must_use]
    pub fn snf(contents: &[u8]) -> Self {
        Self::new(vec![(DEFAULT_INTERMEDIATE_NAME.to_string(), contents.to_vec())])
    }

    /// Number of times `extract` was called.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Extractor for StubExtractor {
    fn extract(&self, _archive: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
        self.calls.set(self.calls.get() + 1);
        for (name, contents) in &self.entries {
            fs::write(output_dir.join(name), contents)?;
        }
        list_files(output_dir)
    }
}

/// Extractor that always fails as if the tool exited with `code`.
///
/// It leaves a partial file behind first, the way a crashing tool would.
#[derive(Debug, Clone, Copy)]
pub struct FailingExtractor {
    code: i32,
}

impl FailingExtractor {
    /// Fails with exit code `code`.
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self { code }
    }
}

impl Extractor for FailingExtractor {
    fn extract(&self, _archive: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
        fs::write(output_dir.join(DEFAULT_INTERMEDIATE_NAME), b"trunc")?;
        Err(PipelineError::ToolFailed {
            tool: PathBuf::from("offzip"),
            code: Some(self.code),
            stderr: "simulated failure".to_string(),
        })
    }
}

/// Observer that records the order of notifications.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    /// Stage names in the order they were seen.
    pub events: Vec<&'static str>,
    /// Scratch directory reported at tool start.
    pub scratch: Option<PathBuf>,
}

impl PipelineObserver for RecordingObserver {
    fn on_destination_resolved(&mut self, _dir: &Path) {
        self.events.push("destination");
    }

    fn on_tool_start(&mut self, _archive: &Path, scratch: &Path) {
        self.scratch = Some(scratch.to_path_buf());
        self.events.push("tool_start");
    }

    fn on_tool_finish(&mut self, _produced: &[PathBuf]) {
        self.events.push("tool_finish");
    }

    fn on_save_relocated(&mut self, _path: &Path) {
        self.events.push("save");
    }

    fn on_companion(&mut self, _outcome: &CompanionOutcome) {
        self.events.push("companion");
    }
}
