//! Component-by-component directory creation.

use std::{fs, io, path::Path};

/// Error raised when a path segment cannot be created.
///
/// Unlike the listing statuses this is a hard failure: without the
/// directory the caller cannot meaningfully proceed, so it is surfaced at
/// the first failing segment rather than signalled as a status.
#[derive(Debug, thiserror::Error)]
#[error("cannot create folder {segment}")]
pub struct CreateFolderError {
    segment: String,
    #[source]
    source: io::Error,
}

impl CreateFolderError {
    /// The accumulated prefix that could not be created.
    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }
}

/// Creates every missing directory segment of `path`, left to right.
///
/// Already-existing paths make this a no-op, and existing prefixes are
/// skipped (existence is re-checked per segment, so partially created trees
/// can be resumed). Empty, `.` and `..` segments take part in prefix
/// accumulation but are never created themselves. Creation stops at the
/// first failing segment; segments already created are left in place.
///
/// `path` is treated as text split on `/` — no normalization happens beyond
/// the accumulation described above.
///
/// # Errors
///
/// Returns [`CreateFolderError`] naming the first accumulated prefix that
/// could not be created. Later segments are never attempted.
pub fn ensure_path(path: &str) -> Result<(), CreateFolderError> {
    if Path::new(path).exists() {
        return Ok(());
    }

    let mut prefix = String::new();
    for segment in path.split('/') {
        prefix.push_str(segment);
        prefix.push('/');

        if segment.is_empty() || segment == "." || segment == ".." {
            continue;
        }
        if Path::new(&prefix).exists() {
            continue;
        }

        fs::create_dir(&prefix).map_err(|source| CreateFolderError {
            segment: prefix.clone(),
            source,
        })?;
    }

    Ok(())
}
