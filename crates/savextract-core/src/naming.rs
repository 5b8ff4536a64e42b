//! Destination file naming.
//!
//! Manual saves are named like `Manual.J.1.sav` inside the archive set. The
//! game's save loader expects a single flat segment, so the dotted stem is
//! flattened before the save is relocated.

use crate::PipelineError;
use crate::Result;
use std::path::Path;
use std::path::PathBuf;

const MANUAL_PREFIX: &str = "Manual.";
const MANUAL_REPLACEMENT: &str = "ManualSave_";

/// Extension given to the companion screenshot.
pub const COMPANION_EXTENSION: &str = "png";

/// Flattens a save stem.
///
/// Replaces the literal `Manual.` with `ManualSave_`, then every remaining
/// `.` with `_`. The mapping is lossy: `save.01` and `save_01` land on the
/// same name, so a relocated save cannot be traced back by name alone.
///
/// # Examples
///
/// ```
/// use savextract_core::naming::transform_stem;
///
/// assert_eq!(transform_stem("Manual.J.1"), "ManualSave_J_1");
/// assert_eq!(transform_stem("save.01"), "save_01");
/// ```
#[must_use]
pub fn transform_stem(stem: &str) -> String {
    stem.replace(MANUAL_PREFIX, MANUAL_REPLACEMENT).replace('.', "_")
}

/// Splits an archive path into its UTF-8 stem and optional extension.
fn split_name(archive: &Path) -> Result<(&str, Option<&str>)> {
    let invalid = || PipelineError::InvalidArchiveName {
        path: archive.to_path_buf(),
    };
    let stem = archive.file_stem().ok_or_else(invalid)?;
    let stem = stem.to_str().ok_or_else(invalid)?;
    let extension = match archive.extension() {
        Some(ext) => Some(ext.to_str().ok_or_else(invalid)?),
        None => None,
    };
    Ok((stem, extension))
}

/// Stem used for every file relocated from `archive`.
pub fn destination_stem(archive: &Path, transform: bool) -> Result<String> {
    let (stem, _) = split_name(archive)?;
    Ok(if transform {
        transform_stem(stem)
    } else {
        stem.to_string()
    })
}

/// File name the extracted save gets in the destination directory.
///
/// The archive's own extension is reattached after the stem transformation.
pub fn save_file_name(archive: &Path, transform: bool) -> Result<String> {
    let (_, extension) = split_name(archive)?;
    let stem = destination_stem(archive, transform)?;
    Ok(match extension {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    })
}

/// File name the companion image gets in the destination directory.
pub fn companion_file_name(archive: &Path, transform: bool) -> Result<String> {
    let stem = destination_stem(archive, transform)?;
    Ok(format!("{stem}.{COMPANION_EXTENSION}"))
}

/// Expected location of the screenshot that ships next to `archive`.
#[must_use]
pub fn companion_source(archive: &Path) -> PathBuf {
    archive.with_extension(COMPANION_EXTENSION)
}
