//! Save-game extraction pipeline around the offzip decompressor.
//!
//! `savextract-core` hands a packed save to an external tool, picks the
//! decompressed payload out of a scratch directory, and relocates it (plus an
//! optional screenshot) into a save folder under a flattened file name.
//!
//! # Examples
//!
//! ```no_run
//! use savextract_core::InvocationRequest;
//! use savextract_core::NoopObserver;
//! use savextract_core::OffzipExtractor;
//! use savextract_core::Pipeline;
//! use savextract_core::PipelineConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = Pipeline::new(OffzipExtractor::default(), PipelineConfig::default());
//! let request = InvocationRequest::new("Manual.1.sav", None).with_docs_dir(true);
//! let report = pipeline.run(&request, &mut NoopObserver)?;
//! println!("Saved to {}", report.save_path.display());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod destination;
pub mod error;
pub mod extractor;
pub mod naming;
pub mod pipeline;
pub mod relocate;
pub mod report;
pub mod request;
pub mod scratch;

#[cfg(any(test, feature = "test-utils"))]
#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use config::PipelineConfig;
pub use config::PipelinePolicy;
pub use error::PipelineError;
pub use error::Result;
pub use extractor::Extractor;
pub use extractor::OffzipExtractor;
pub use pipeline::Pipeline;
pub use report::CompanionOutcome;
pub use report::NoopObserver;
pub use report::PipelineObserver;
pub use report::PipelineReport;
pub use request::Format;
pub use request::InvocationRequest;
