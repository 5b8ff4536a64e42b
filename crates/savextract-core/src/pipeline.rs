//! The extraction pipeline.
//!
//! Stages run strictly in order: resolve the destination, unpack into a
//! scratch directory, check for the expected entry, move it, copy the
//! companion image. Nothing reaches the destination unless the tool succeeded
//! and produced the expected entry. The scratch directory is removed on every
//! exit path.

use crate::PipelineConfig;
use crate::PipelineError;
use crate::Result;
use crate::destination::resolve_destination;
use crate::extractor::Extractor;
use crate::naming;
use crate::relocate;
use crate::report::CompanionOutcome;
use crate::report::PipelineObserver;
use crate::report::PipelineReport;
use crate::request::InvocationRequest;
use crate::scratch::ScratchDir;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

/// Runs extraction requests against an [`Extractor`].
///
/// # Examples
///
/// ```no_run
/// use savextract_core::InvocationRequest;
/// use savextract_core::NoopObserver;
/// use savextract_core::OffzipExtractor;
/// use savextract_core::Pipeline;
/// use savextract_core::PipelineConfig;
/// use std::path::PathBuf;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = Pipeline::new(OffzipExtractor::default(), PipelineConfig::default());
/// let request = InvocationRequest::new("Manual.1.sav", Some(PathBuf::from("out")));
/// let report = pipeline.run(&request, &mut NoopObserver)?;
/// println!("saved to {}", report.save_path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Pipeline<E> {
    extractor: E,
    config: PipelineConfig,
}

impl<E: Extractor> Pipeline<E> {
    /// Creates a pipeline.
    pub fn new(extractor: E, config: PipelineConfig) -> Self {
        Self { extractor, config }
    }

    /// Processes one request.
    pub fn run(
        &self,
        request: &InvocationRequest,
        observer: &mut dyn PipelineObserver,
    ) -> Result<PipelineReport> {
        let start = Instant::now();
        let archive = request.archive();

        if !archive.is_file() {
            return Err(PipelineError::ArchiveNotFound {
                path: archive.to_path_buf(),
            });
        }

        // Fail on unusable names before the tool runs.
        let transform = self.config.policy.transform_names;
        let save_name = naming::save_file_name(archive, transform)?;

        let destination_dir = resolve_destination(request, &self.config)?;
        observer.on_destination_resolved(&destination_dir);

        let scratch = ScratchDir::new(&self.config.scratch_prefix)?;
        let scratch_path = scratch.path().to_path_buf();

        let outcome = self.run_in_scratch(
            archive,
            &destination_dir,
            &save_name,
            &scratch,
            observer,
        );

        let cleanup = scratch.close();
        let mut report = outcome?;
        if let Err(e) = cleanup {
            report.add_warning(format!(
                "failed to remove scratch directory {}: {e}",
                scratch_path.display()
            ));
        }

        report.scratch_dir = scratch_path;
        report.duration = start.elapsed();
        Ok(report)
    }

    fn run_in_scratch(
        &self,
        archive: &Path,
        destination_dir: &Path,
        save_name: &str,
        scratch: &ScratchDir,
        observer: &mut dyn PipelineObserver,
    ) -> Result<PipelineReport> {
        observer.on_tool_start(archive, scratch.path());
        let produced = self.extractor.extract(archive, scratch.path())?;
        observer.on_tool_finish(&produced);

        let intermediate = scratch.entry(&self.config.intermediate_name);
        if !intermediate.is_file() {
            return Err(PipelineError::MissingIntermediate {
                expected: self.config.intermediate_name.clone(),
                produced,
            });
        }

        let save_path = destination_dir.join(save_name);
        let bytes_moved = relocate::move_file(&intermediate, &save_path)?;
        observer.on_save_relocated(&save_path);

        let companion = self.copy_companion(archive, destination_dir)?;
        observer.on_companion(&companion);

        Ok(PipelineReport {
            archive: archive.to_path_buf(),
            destination_dir: destination_dir.to_path_buf(),
            save_path,
            bytes_moved,
            entries_produced: produced.len(),
            companion,
            scratch_dir: PathBuf::new(),
            duration: std::time::Duration::ZERO,
            warnings: Vec::new(),
        })
    }

    fn copy_companion(&self, archive: &Path, destination_dir: &Path) -> Result<CompanionOutcome> {
        if !self.config.policy.copy_companion_image {
            return Ok(CompanionOutcome::Disabled);
        }

        let source = naming::companion_source(archive);
        if !source.is_file() {
            return Ok(CompanionOutcome::Missing { expected: source });
        }

        let name = naming::companion_file_name(archive, self.config.policy.transform_names)?;
        let destination = destination_dir.join(name);
        let bytes = relocate::copy_preserving_times(&source, &destination)?;
        Ok(CompanionOutcome::Copied {
            source,
            destination,
            bytes,
        })
    }
}
