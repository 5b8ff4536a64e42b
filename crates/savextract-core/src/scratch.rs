//! Scoped scratch directory for the tool's intermediate output.

use std::io;
use std::path::Path;
use tempfile::TempDir;

/// Temporary directory that is removed with everything inside it when
/// dropped.
///
/// Use [`ScratchDir::close`] to observe cleanup failures; a plain drop
/// ignores them.
///
/// # Examples
///
/// ```
/// use savextract_core::scratch::ScratchDir;
///
/// # fn main() -> std::io::Result<()> {
/// let scratch = ScratchDir::new("savextract-")?;
/// let path = scratch.path().to_path_buf();
/// std::fs::write(path.join("0000000c.snf"), b"payload")?;
/// scratch.close()?;
/// assert!(!path.exists());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Creates a fresh directory under the system temp location.
    pub fn new(prefix: &str) -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir()?;
        Ok(Self { dir })
    }

    /// Location of the directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `name` inside the directory.
    #[must_use]
    pub fn entry(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join(name)
    }

    /// Removes the directory and reports any failure.
    pub fn close(self) -> io::Result<()> {
        self.dir.close()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_removed_on_drop_with_contents() {
        let path = {
            let scratch = ScratchDir::new("scratch-test-").unwrap();
            fs::write(scratch.entry("0000000c.snf"), b"partial").unwrap();
            fs::create_dir(scratch.entry("nested")).unwrap();
            fs::write(scratch.path().join("nested/leftover.bin"), b"x").unwrap();
            scratch.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_close_removes_directory() {
        let scratch = ScratchDir::new("scratch-test-").unwrap();
        let path = scratch.path().to_path_buf();
        assert!(path.is_dir());
        scratch.close().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_prefix_applied() {
        let scratch = ScratchDir::new("offzip-").unwrap();
        let name = scratch.path().file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("offzip-"));
    }
}
