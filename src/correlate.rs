//! Cross-referencing sibling files across extension groups.
//!
//! A "sibling" here is a file sharing its extension-stripped basename with a
//! file in another extension group of the same directory — `mufasa.jpg` and
//! `mufasa.txt` are siblings under the groups `jpg` and `txt`.

use std::path::{Path, PathBuf};

use crate::{
    filter::{self, ExtensionGroup},
    listing::{self, ListError},
    name,
};

/// One file list per group in `groups`, same order, each computed
/// independently against the full file listing of `path`.
///
/// The directory is listed once; each group filters that one listing, so a
/// file with an extension in two groups appears in both lists.
///
/// # Errors
///
/// Propagates the [`ListError`] statuses from the underlying listing
/// unchanged.
pub fn by_extensions(
    path: &Path,
    groups: &[ExtensionGroup],
) -> Result<Vec<Vec<PathBuf>>, ListError> {
    let files = listing::files(path)?;
    Ok(groups
        .iter()
        .map(|group| filter::by_extension(&files, group))
        .collect())
}

/// Basenames (without extension) of files in the first group that are also
/// present, by basename, in the subsequent groups.
///
/// For each file of group 0 in listing order, every subsequent group is
/// scanned in group order; the first entry of a group whose stripped
/// basename equals the candidate ends that group's scan and emits the
/// candidate once. A basename matched by several subsequent groups is
/// therefore emitted once **per matching group** — callers wanting distinct
/// names must deduplicate themselves. With fewer than two groups there is
/// nothing to match against and the result is empty.
///
/// # Errors
///
/// Propagates the [`ListError`] statuses from the underlying listing
/// unchanged.
pub fn shared_basenames(
    path: &Path,
    groups: &[ExtensionGroup],
) -> Result<Vec<String>, ListError> {
    let lists = by_extensions(path, groups)?;

    let mut shared = Vec::new();
    let Some((first, rest)) = lists.split_first() else {
        return Ok(shared);
    };

    for candidate in first {
        let key = name::stem(candidate);
        for group in rest {
            if group.iter().any(|file| name::stem(file) == key) {
                shared.push(key.clone());
            }
        }
    }

    Ok(shared)
}
