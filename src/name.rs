//! Basename, extension and separator derivation.
//!
//! These helpers are pure string logic over the final path segment. They
//! deliberately do not use [`Path::extension`], whose rules differ: here a
//! leading dot counts as a separator, so `.bashrc` has the extension
//! `bashrc`.

use std::path::Path;

/// The final segment of `path` (filename including extension).
///
/// Paths with no final segment (for example `/` or `..`) yield an empty
/// string.
#[must_use]
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The substring after the final `.` of the basename, or empty if the
/// basename contains no `.` at all.
///
/// The dot may be the first character: `.bashrc` yields `bashrc`.
#[must_use]
pub fn extension(path: &Path) -> String {
    let name = basename(path);
    name.rfind('.')
        .map_or_else(String::new, |index| name[index + 1..].to_string())
}

/// The basename with its final `.ext` suffix removed.
///
/// The final dot only counts as a suffix separator when it is not the first
/// character, so `.bashrc` is returned whole. This is asymmetric with
/// [`extension`], which does treat a leading dot as a separator; both
/// behaviours are pinned by tests.
#[must_use]
pub fn stem(path: &Path) -> String {
    let name = basename(path);
    match name.rfind('.') {
        Some(index) if index > 0 => name[..index].to_string(),
        _ => name,
    }
}

/// Appends a `/` to `path` unless it already ends with one.
///
/// This is the only path normalization performed anywhere in the crate: a
/// directory path handed to string concatenation carries a single trailing
/// separator.
#[must_use]
pub fn with_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use super::{basename, extension, stem, with_trailing_slash};

    #[test_case("a.b.c", "c"; "last segment wins")]
    #[test_case("noext", ""; "no separator")]
    #[test_case(".bashrc", "bashrc"; "leading dot is a separator")]
    #[test_case("photo.jpg", "jpg"; "plain extension")]
    #[test_case("trailing.", ""; "trailing dot yields empty")]
    fn extension_of(name: &str, expected: &str) {
        assert_eq!(extension(Path::new(name)), expected);
    }

    #[test_case("a.b.c", "a.b"; "only the final suffix is stripped")]
    #[test_case("noext", "noext"; "no separator leaves the name whole")]
    #[test_case(".bashrc", ".bashrc"; "leading dot is not a suffix")]
    #[test_case("photo.jpg", "photo"; "plain stem")]
    fn stem_of(name: &str, expected: &str) {
        assert_eq!(stem(Path::new(name)), expected);
    }

    #[test]
    fn basename_strips_parent_directories() {
        assert_eq!(basename(Path::new("/var/log/syslog.1")), "syslog.1");
        assert_eq!(basename(Path::new("relative/file.txt")), "file.txt");
    }

    #[test]
    fn extension_ignores_dots_in_parent_directories() {
        assert_eq!(extension(Path::new("/etc/conf.d/noext")), "");
    }

    #[test]
    fn trailing_slash_is_added_once() {
        assert_eq!(with_trailing_slash("/tmp/dir"), "/tmp/dir/");
        assert_eq!(with_trailing_slash("/tmp/dir/"), "/tmp/dir/");
    }
}
