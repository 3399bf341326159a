//! Single-file conveniences: touch, write, delimited reads, delete, stat.
//!
//! Plain I/O plumbing around `std::fs`; errors surface as [`io::Error`]
//! at the point of occurrence, with no retries.

use std::{
    fs::{self, Metadata, OpenOptions},
    io::{self, Write as _},
    path::Path,
};

/// How [`write_file`] opens its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate the file before writing, creating it if missing.
    Truncate,
    /// Append to the end of the file, creating it if missing.
    Append,
}

/// Creates `path` as an empty file if it does not already exist.
///
/// Existing files are left untouched, contents included, so calling this
/// twice is a no-op.
///
/// # Errors
///
/// Returns any [`io::Error`] other than the file already existing.
pub fn create_empty_file(path: &Path) -> io::Result<()> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(error) => Err(error),
    }
}

/// Writes `data` to `path` using the given [`WriteMode`].
///
/// # Errors
///
/// Returns any [`io::Error`] from opening or writing the file.
pub fn write_file(path: &Path, mode: WriteMode, data: &[u8]) -> io::Result<()> {
    let mut file = match mode {
        WriteMode::Truncate => OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?,
        WriteMode::Append => OpenOptions::new().append(true).create(true).open(path)?,
    };
    file.write_all(data)
}

/// Reads `path` fully and splits its contents on `delimiter`.
///
/// A missing file yields an empty vector rather than an error; every other
/// read failure is surfaced.
///
/// # Errors
///
/// Returns any [`io::Error`] from reading an existing file.
pub fn read_split(path: &Path, delimiter: &str) -> io::Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path)?;
    Ok(data.split(delimiter).map(str::to_string).collect())
}

/// Removes `path` if it exists.
///
/// Returns whether a file was actually removed, so deleting a missing file
/// is not an error.
///
/// # Errors
///
/// Returns any [`io::Error`] other than the file not existing.
pub fn delete_file(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(error) => Err(error),
    }
}

/// Metadata for `path` (size, timestamps, file type).
///
/// # Errors
///
/// Returns any [`io::Error`] from the underlying stat call, including the
/// path not existing.
pub fn stat_file(path: &Path) -> io::Result<Metadata> {
    fs::metadata(path)
}
