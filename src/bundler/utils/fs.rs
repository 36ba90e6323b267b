//! File system utilities for packaging.
//!
//! Provides file operations with automatic directory creation, symlink
//! preservation and path-carrying errors.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

/// UTF-8 byte order mark. Inno Setup needs it to read non-ASCII scripts.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Creates all of the directories of the specified path, erasing it first if specified.
pub fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path)?;
    }

    fs::create_dir_all(path).fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Fs {
            context: "removing directory",
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Removes a file if it exists.
pub fn remove_file(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Fs {
            context: "removing file",
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Makes a symbolic link to a directory.
#[cfg(unix)]
pub fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a directory.
#[cfg(windows)]
pub fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::GenericError(format!("{from:?} does not exist")));
    }
    if !from.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir).fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).fs_context("copying file to", to)?;
    Ok(())
}

/// Recursively copies a directory from one path to another, creating any
/// parent directories of the destination path as necessary.
///
/// Preserves symlinks on platforms that support them.
/// Fails if the source path is not a directory or doesn't exist.
pub fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(Error::GenericError(format!("{from:?} does not exist")));
    }
    if !from.is_dir() {
        return Err(Error::GenericError(format!("{from:?} is not a directory")));
    }

    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).fs_context("creating directory", parent)?;
    }

    for entry in walkdir::WalkDir::new(from) {
        let entry = entry?;
        let rel_path = entry.path().strip_prefix(from)?;
        let dest_path = to.join(rel_path);

        if entry.file_type().is_symlink() {
            let target = fs::read_link(entry.path()).fs_context("reading link", entry.path())?;
            let linked = if entry.path().is_dir() {
                symlink_dir(&target, &dest_path)
            } else {
                symlink_file(&target, &dest_path)
            };
            linked.fs_context("creating symlink", &dest_path)?;
        } else if entry.file_type().is_dir() {
            fs::create_dir_all(&dest_path).fs_context("creating directory", &dest_path)?;
        } else {
            fs::copy(entry.path(), &dest_path).fs_context("copying file to", &dest_path)?;
        }
    }

    Ok(())
}

/// Marks a file as executable (`0o755`). No-op on Windows.
#[cfg(unix)]
pub fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .fs_context("reading metadata", path)?
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).fs_context("setting permissions", path)
}

/// Marks a file as executable (`0o755`). No-op on Windows.
#[cfg(not(unix))]
pub fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Writes text prefixed with a UTF-8 byte order mark.
pub fn write_utf8_bom(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).fs_context("creating directory", parent)?;
    }
    let mut file = fs::File::create(path).fs_context("creating file", path)?;
    file.write_all(UTF8_BOM)
        .and_then(|()| file.write_all(text.as_bytes()))
        .fs_context("writing file", path)
}

/// Writes text as plain UTF-8, creating parent directories.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).fs_context("creating directory", parent)?;
    }
    fs::write(path, text).fs_context("writing file", path)
}

/// Reads a text file, stripping a leading byte order mark.
pub fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).fs_context("reading file", path)?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_dir_copies_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("a/b")).unwrap();
        fs::write(src.join("a/b/file.txt"), "x").unwrap();

        let dst = dir.path().join("out/dst");
        copy_dir(&src, &dst).unwrap();
        assert_eq!(fs::read_to_string(dst.join("a/b/file.txt")).unwrap(), "x");
    }

    #[cfg(unix)]
    #[test]
    fn copy_dir_preserves_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("real"), "x").unwrap();
        symlink_file(Path::new("real"), &src.join("link")).unwrap();

        let dst = dir.path().join("dst");
        copy_dir(&src, &dst).unwrap();
        let meta = fs::symlink_metadata(dst.join("link")).unwrap();
        assert!(meta.file_type().is_symlink());
    }

    #[test]
    fn bom_is_written_once_and_stripped_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("setup.iss");
        write_utf8_bom(&path, "[Setup]\n").unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        assert_eq!(read_text(&path).unwrap(), "[Setup]\n");
    }

    #[test]
    fn create_dir_all_with_erase_empties_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("work");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("stale"), "x").unwrap();

        create_dir_all(&target, true).unwrap();
        assert!(target.is_dir());
        assert!(!target.join("stale").exists());
    }

    #[test]
    fn removing_missing_paths_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        remove_dir_all(&dir.path().join("nope")).unwrap();
        remove_file(&dir.path().join("nope.txt")).unwrap();
    }
}
