//! Raw directory listing and file/directory classification.
//!
//! [`entries`] is the foundation every other enumeration operation builds
//! on: the listing is sorted exactly once, here, and every derived view
//! preserves its relative order without re-sorting.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

/// Reasons a directory cannot be listed.
///
/// `NotFound` and `NotADirectory` are expected, recoverable conditions and
/// must never be collapsed into an empty listing by a downstream filter.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// The path does not exist.
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    /// The path exists but is not a directory.
    #[error("path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The directory exists but could not be read.
    #[error("failed to read directory")]
    Io(#[from] io::Error),
}

fn probe(path: &Path) -> Result<(), ListError> {
    if !path.exists() {
        return Err(ListError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ListError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Every entry name in `path`, including the `.` and `..` pseudo-entries,
/// sorted in ascending byte order.
///
/// Entry names are returned unqualified; use [`files`] or [`directories`]
/// for fully-qualified, classified listings.
///
/// # Errors
///
/// Returns [`ListError::NotFound`] if `path` does not exist,
/// [`ListError::NotADirectory`] if it exists but is not a directory, and
/// [`ListError::Io`] if the directory cannot be read.
pub fn entries(path: &Path) -> Result<Vec<String>, ListError> {
    probe(path)?;

    let mut names = vec![".".to_string(), "..".to_string()];
    for entry in fs::read_dir(path)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Fully-qualified regular files in `path`, in listing order.
///
/// # Errors
///
/// Propagates the [`ListError`] statuses from [`entries`] unchanged.
pub fn files(path: &Path) -> Result<Vec<PathBuf>, ListError> {
    Ok(entries(path)?
        .into_iter()
        .map(|name| path.join(name))
        .filter(|qualified| qualified.is_file())
        .collect())
}

/// Fully-qualified directories in `path`, in listing order.
///
/// The `.` and `..` pseudo-entries satisfy the directory probe against
/// themselves and are included in the output.
///
/// # Errors
///
/// Propagates the [`ListError`] statuses from [`entries`] unchanged.
pub fn directories(path: &Path) -> Result<Vec<PathBuf>, ListError> {
    Ok(entries(path)?
        .into_iter()
        .map(|name| path.join(name))
        .filter(|qualified| qualified.is_dir())
        .collect())
}

/// Every regular file at any depth under `root`, sorted by file name within
/// each directory.
///
/// Unreadable subtrees are skipped rather than aborting the walk.
///
/// # Errors
///
/// Returns the same [`ListError`] statuses as [`entries`] when `root` itself
/// is missing or not a directory.
pub fn files_under(root: &Path) -> Result<Vec<PathBuf>, ListError> {
    probe(root)?;

    Ok(WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{ListError, directories, entries, files, files_under};

    fn populated_dir() -> TempDir {
        let tmp = TempDir::new().expect("failed to create temp dir");
        fs::write(tmp.path().join("beta.txt"), b"b").unwrap();
        fs::write(tmp.path().join("alpha.txt"), b"a").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        tmp
    }

    #[test]
    fn entries_are_sorted_and_include_pseudo_entries() {
        let tmp = populated_dir();
        let listed = entries(tmp.path()).unwrap();
        assert_eq!(listed, [".", "..", "alpha.txt", "beta.txt", "sub"]);
    }

    #[test]
    fn entries_are_stable_across_calls() {
        let tmp = populated_dir();
        assert_eq!(entries(tmp.path()).unwrap(), entries(tmp.path()).unwrap());
    }

    #[test]
    fn missing_path_is_not_found_for_every_operation() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nowhere");

        assert!(matches!(entries(&missing), Err(ListError::NotFound(_))));
        assert!(matches!(files(&missing), Err(ListError::NotFound(_))));
        assert!(matches!(directories(&missing), Err(ListError::NotFound(_))));
        assert!(matches!(files_under(&missing), Err(ListError::NotFound(_))));
    }

    #[test]
    fn file_path_is_not_a_directory_for_every_operation() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();

        assert!(matches!(entries(&file), Err(ListError::NotADirectory(_))));
        assert!(matches!(files(&file), Err(ListError::NotADirectory(_))));
        assert!(matches!(
            directories(&file),
            Err(ListError::NotADirectory(_))
        ));
        assert!(matches!(
            files_under(&file),
            Err(ListError::NotADirectory(_))
        ));
    }

    #[test]
    fn files_are_qualified_and_exclude_directories() {
        let tmp = populated_dir();
        let listed = files(tmp.path()).unwrap();
        assert_eq!(
            listed,
            [tmp.path().join("alpha.txt"), tmp.path().join("beta.txt")]
        );
    }

    #[test]
    fn directories_include_the_pseudo_entries() {
        let tmp = populated_dir();
        let listed = directories(tmp.path()).unwrap();
        assert_eq!(
            listed,
            [
                tmp.path().join("."),
                tmp.path().join(".."),
                tmp.path().join("sub")
            ]
        );
    }

    #[test]
    fn files_under_descends_into_subdirectories() {
        let tmp = populated_dir();
        fs::write(tmp.path().join("sub/nested.txt"), b"n").unwrap();

        let listed = files_under(tmp.path()).unwrap();
        assert_eq!(
            listed,
            [
                tmp.path().join("alpha.txt"),
                tmp.path().join("beta.txt"),
                tmp.path().join("sub/nested.txt")
            ]
        );
    }
}
