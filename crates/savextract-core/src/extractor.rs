//! External decompression tool.
//!
//! The pipeline never decompresses anything itself. It hands the archive to
//! an [`Extractor`] and inspects whatever files appear in the output
//! directory.

use crate::PipelineError;
use crate::Result;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use walkdir::WalkDir;

/// Default offzip executable name for the current platform.
#[cfg(windows)]
pub const DEFAULT_TOOL: &str = "offzip.exe";

/// Default offzip executable name for the current platform.
#[cfg(not(windows))]
pub const DEFAULT_TOOL: &str = "offzip";

/// Something that unpacks an archive into a directory.
///
/// Implementations return every file they produced so callers can check for
/// the entry they need instead of assuming a name.
pub trait Extractor {
    /// Unpacks `archive` into `output_dir`, returning the produced files.
    fn extract(&self, archive: &Path, output_dir: &Path) -> Result<Vec<PathBuf>>;
}

impl<E: Extractor + ?Sized> Extractor for &E {
    fn extract(&self, archive: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
        (**self).extract(archive, output_dir)
    }
}

/// Runs `offzip -a <archive> <output_dir>` and waits for it.
///
/// `-a` scans the whole file and dumps every zlib stream it finds, naming
/// each one after its hexadecimal offset.
#[derive(Debug, Clone)]
pub struct OffzipExtractor {
    program: PathBuf,
}

impl OffzipExtractor {
    /// Uses `program` as the offzip executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Executable this extractor invokes.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, archive: &Path, output_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-a")
            .arg(archive)
            .arg(output_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl Default for OffzipExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}

impl Extractor for OffzipExtractor {
    fn extract(&self, archive: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
        let output = self
            .command(archive, output_dir)
            .output()
            .map_err(|source| PipelineError::ToolSpawn {
                tool: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PipelineError::ToolFailed {
                tool: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        list_files(output_dir)
    }
}

/// Lists regular files under `dir`, sorted by path.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| PipelineError::Io(e.into()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_program() {
        let extractor = OffzipExtractor::default();
        assert_eq!(extractor.program(), Path::new(DEFAULT_TOOL));
    }

    #[test]
    fn test_command_arguments() {
        let extractor = OffzipExtractor::new("/opt/offzip");
        let cmd = extractor.command(Path::new("Manual.1.sav"), Path::new("/tmp/scratch"));
        assert_eq!(cmd.get_program(), "/opt/offzip");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["-a", "Manual.1.sav", "/tmp/scratch"]);
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let temp = TempDir::new().unwrap();
        let extractor = OffzipExtractor::new(temp.path().join("no-such-offzip"));
        let err = extractor
            .extract(Path::new("save.sav"), temp.path())
            .unwrap_err();
        assert!(matches!(err, PipelineError::ToolSpawn { .. }));
    }

    #[test]
    fn test_list_files_sorted_and_recursive() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("0000000c.snf"), b"b").unwrap();
        fs::write(temp.path().join("00000000.dat"), b"a").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/000000ff.dat"), b"c").unwrap();

        let files = list_files(temp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(temp.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            [
                PathBuf::from("00000000.dat"),
                PathBuf::from("0000000c.snf"),
                PathBuf::from("sub/000000ff.dat"),
            ]
        );
    }

    #[test]
    fn test_list_files_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(list_files(temp.path()).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_tool_failure() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let script = temp.path().join("offzip");
        fs::write(&script, "#!/bin/sh\necho 'no zlib streams found' >&2\nexit 3\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let out = temp.path().join("out");
        fs::create_dir(&out).unwrap();
        let err = OffzipExtractor::new(&script)
            .extract(Path::new("save.sav"), &out)
            .unwrap_err();
        match err {
            PipelineError::ToolFailed { code, stderr, .. } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "no zlib streams found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
