//! Moving and copying files into the destination directory.

use filetime::FileTime;
use std::fs;
use std::io;
use std::path::Path;

/// Moves `src` to `dst`, returning the number of bytes moved.
///
/// Tries a rename first. When source and destination sit on different
/// filesystems (the scratch directory usually lives in the system temp
/// location) the file is copied with its timestamps and the source removed.
/// An existing file at `dst` is replaced.
pub fn move_file(src: &Path, dst: &Path) -> io::Result<u64> {
    let len = fs::metadata(src)?.len();
    match fs::rename(src, dst) {
        Ok(()) => Ok(len),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            let copied = copy_preserving_times(src, dst)?;
            fs::remove_file(src)?;
            Ok(copied)
        }
        Err(e) => Err(e),
    }
}

/// Copies `src` to `dst` along with its access and modification times.
///
/// The source is left in place.
pub fn copy_preserving_times(src: &Path, dst: &Path) -> io::Result<u64> {
    let copied = fs::copy(src, dst)?;
    let metadata = fs::metadata(src)?;
    filetime::set_file_times(
        dst,
        FileTime::from_last_access_time(&metadata),
        FileTime::from_last_modification_time(&metadata),
    )?;
    Ok(copied)
}
