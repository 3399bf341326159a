//! Name-based filters over file listings.
//!
//! Every filter here is order-preserving: input lists arrive sorted from
//! [`crate::listing`] and are never re-sorted.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use regex::Regex;

use crate::{
    listing::{self, ListError},
    name,
};

/// A single criterion for extension matching.
///
/// Mirrors the two accepted argument shapes: one extension, or a set of
/// extensions. The shapes are not interchangeable — a leading `.` is
/// stripped from a [`Single`](Self::Single) criterion, while set members are
/// compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionGroup {
    /// One extension; an optional leading `.` is stripped before comparison.
    Single(String),

    /// A set of extensions, compared verbatim (no `.` stripping).
    AnyOf(HashSet<String>),
}

impl ExtensionGroup {
    /// Builds an [`ExtensionGroup::AnyOf`] criterion from any collection of
    /// extension strings.
    #[must_use]
    pub fn any_of<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AnyOf(extensions.into_iter().map(Into::into).collect())
    }

    /// Whether a file extension satisfies this criterion.
    ///
    /// Comparison is exact and case-sensitive.
    #[must_use]
    pub fn matches(&self, extension: &str) -> bool {
        match self {
            Self::Single(wanted) => wanted.strip_prefix('.').unwrap_or(wanted) == extension,
            Self::AnyOf(wanted) => wanted.contains(extension),
        }
    }
}

impl From<&str> for ExtensionGroup {
    fn from(extension: &str) -> Self {
        Self::Single(extension.to_string())
    }
}

impl From<String> for ExtensionGroup {
    fn from(extension: String) -> Self {
        Self::Single(extension)
    }
}

impl From<HashSet<String>> for ExtensionGroup {
    fn from(extensions: HashSet<String>) -> Self {
        Self::AnyOf(extensions)
    }
}

/// Files from `list` whose extension matches `group`, relative order
/// preserved.
#[must_use]
pub fn by_extension(list: &[PathBuf], group: &ExtensionGroup) -> Vec<PathBuf> {
    list.iter()
        .filter(|file| group.matches(&name::extension(file)))
        .cloned()
        .collect()
}

/// Files in `path` whose extension matches `group`.
///
/// # Errors
///
/// Propagates the [`ListError`] statuses from the underlying listing
/// unchanged; an invalid path is never reported as an empty match.
pub fn files_with_extension(
    path: &Path,
    group: &ExtensionGroup,
) -> Result<Vec<PathBuf>, ListError> {
    Ok(by_extension(&listing::files(path)?, group))
}

/// Files in `path` whose basename matches `pattern`.
///
/// # Errors
///
/// Propagates the [`ListError`] statuses from the underlying listing
/// unchanged.
pub fn files_matching(path: &Path, pattern: &Regex) -> Result<Vec<PathBuf>, ListError> {
    Ok(listing::files(path)?
        .into_iter()
        .filter(|file| pattern.is_match(&name::basename(file)))
        .collect())
}

/// Files in `path` whose basename is absent from `exclude`.
///
/// # Errors
///
/// Propagates the [`ListError`] statuses from the underlying listing
/// unchanged.
pub fn files_not_named(path: &Path, exclude: &HashSet<String>) -> Result<Vec<PathBuf>, ListError> {
    Ok(listing::files(path)?
        .into_iter()
        .filter(|file| !exclude.contains(&name::basename(file)))
        .collect())
}
