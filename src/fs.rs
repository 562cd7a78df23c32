//! Filesystem operations
//!
//! The two primitives the deployer is built from: emptying a destination
//! directory and making a metadata-preserving copy of one file.

use std::path::Path;

use filetime::FileTime;

use crate::error::DeployResult;

/// Remove every entry directly inside a directory (non-recursive).
///
/// Subdirectories are not expected in destination trees; hitting one makes
/// `remove_file` fail and the error propagates. Prints one `Cleared` line
/// per removed entry.
pub fn clear_dir(dir: &Path) -> DeployResult<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        std::fs::remove_file(&path)?;
        println!("Cleared {}", path.display());
    }
    Ok(())
}

/// Copy a file, preserving mode and timestamps.
///
/// `std::fs::copy` carries the permission bits; access and modification
/// times are restored from the source afterwards.
pub fn copy_with_metadata(src: &Path, dst: &Path) -> DeployResult<()> {
    std::fs::copy(src, dst)?;
    let meta = std::fs::metadata(src)?;
    let atime = FileTime::from_last_access_time(&meta);
    let mtime = FileTime::from_last_modification_time(&meta);
    filetime::set_file_times(dst, atime, mtime)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn clear_dir_empties_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.css"), "a").unwrap();
        std::fs::write(dir.path().join("b.css"), "b").unwrap();

        clear_dir(dir.path()).unwrap();

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn clear_dir_on_empty_directory_is_a_noop() {
        let dir = tempdir().unwrap();
        clear_dir(dir.path()).unwrap();
        assert!(dir.path().exists());
    }

    #[test]
    fn clear_dir_missing_directory_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");

        assert!(clear_dir(&missing).is_err());
    }

    #[test]
    fn clear_dir_stops_on_subdirectory() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        assert!(clear_dir(dir.path()).is_err());
    }

    #[test]
    fn copy_preserves_contents() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.css");
        let dst = dir.path().join("dst.css");
        std::fs::write(&src, "body { color: red }").unwrap();

        copy_with_metadata(&src, &dst).unwrap();

        assert_eq!(
            std::fs::read(&dst).unwrap(),
            std::fs::read(&src).unwrap()
        );
    }

    #[test]
    fn copy_preserves_mtime() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.js");
        let dst = dir.path().join("dst.js");
        std::fs::write(&src, "console.log(1);").unwrap();

        // Backdate the source so a fresh copy would differ
        let old = FileTime::from_unix_time(1_500_000_000, 0);
        filetime::set_file_mtime(&src, old).unwrap();

        copy_with_metadata(&src, &dst).unwrap();

        let meta = std::fs::metadata(&dst).unwrap();
        assert_eq!(FileTime::from_last_modification_time(&meta), old);
    }

    #[test]
    fn copy_overwrites_existing_destination() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.css");
        let dst = dir.path().join("dst.css");
        std::fs::write(&src, "new").unwrap();
        std::fs::write(&dst, "old").unwrap();

        copy_with_metadata(&src, &dst).unwrap();

        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "new");
    }

    #[test]
    fn copy_missing_source_errors() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("absent.css");
        let dst = dir.path().join("dst.css");

        assert!(copy_with_metadata(&src, &dst).is_err());
    }
}
