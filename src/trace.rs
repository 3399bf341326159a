//! Call-boundary observation for the enumeration operations.
//!
//! Instrumentation stays out of the algorithm bodies. Callers that want
//! entry/exit visibility wrap the operations in [`Traced`], injecting any
//! [`Tracer`] — [`LogTracer`] forwards to `tracing`.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use regex::Regex;

use crate::{
    correlate,
    filter::{self, ExtensionGroup},
    listing::{self, ListError},
    materialize::{self, CreateFolderError},
};

/// Observer invoked at the boundary of each traced operation.
pub trait Tracer {
    /// Called before an operation runs, with the operation name and its
    /// subject path.
    fn enter(&self, operation: &'static str, subject: &str);

    /// Called after an operation returns; `outcome` is `"ok"` or the error
    /// rendering.
    fn exit(&self, operation: &'static str, outcome: &str);
}

/// A [`Tracer`] that emits `tracing` debug events.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn enter(&self, operation: &'static str, subject: &str) {
        tracing::debug!(operation, subject, "enter");
    }

    fn exit(&self, operation: &'static str, outcome: &str) {
        tracing::debug!(operation, outcome, "exit");
    }
}

/// Decorator that wraps the enumeration operations with [`Tracer`] hooks.
///
/// Delegates every call to the corresponding free function; results,
/// statuses and errors pass through unchanged.
#[derive(Debug, Default)]
pub struct Traced<T> {
    tracer: T,
}

impl<T: Tracer> Traced<T> {
    /// Wraps the operations with `tracer`.
    #[must_use]
    pub const fn new(tracer: T) -> Self {
        Self { tracer }
    }

    fn run<R, E, F>(&self, operation: &'static str, subject: &Path, call: F) -> Result<R, E>
    where
        F: FnOnce() -> Result<R, E>,
        E: std::fmt::Display,
    {
        self.tracer
            .enter(operation, &subject.display().to_string());
        let result = call();
        match &result {
            Ok(_) => self.tracer.exit(operation, "ok"),
            Err(error) => self.tracer.exit(operation, &error.to_string()),
        }
        result
    }

    /// Traced [`listing::entries`].
    ///
    /// # Errors
    ///
    /// Identical to [`listing::entries`].
    pub fn entries(&self, path: &Path) -> Result<Vec<String>, ListError> {
        self.run("entries", path, || listing::entries(path))
    }

    /// Traced [`listing::files`].
    ///
    /// # Errors
    ///
    /// Identical to [`listing::files`].
    pub fn files(&self, path: &Path) -> Result<Vec<PathBuf>, ListError> {
        self.run("files", path, || listing::files(path))
    }

    /// Traced [`listing::directories`].
    ///
    /// # Errors
    ///
    /// Identical to [`listing::directories`].
    pub fn directories(&self, path: &Path) -> Result<Vec<PathBuf>, ListError> {
        self.run("directories", path, || listing::directories(path))
    }

    /// Traced [`filter::files_with_extension`].
    ///
    /// # Errors
    ///
    /// Identical to [`filter::files_with_extension`].
    pub fn files_with_extension(
        &self,
        path: &Path,
        group: &ExtensionGroup,
    ) -> Result<Vec<PathBuf>, ListError> {
        self.run("files_with_extension", path, || {
            filter::files_with_extension(path, group)
        })
    }

    /// Traced [`filter::files_matching`].
    ///
    /// # Errors
    ///
    /// Identical to [`filter::files_matching`].
    pub fn files_matching(&self, path: &Path, pattern: &Regex) -> Result<Vec<PathBuf>, ListError> {
        self.run("files_matching", path, || {
            filter::files_matching(path, pattern)
        })
    }

    /// Traced [`filter::files_not_named`].
    ///
    /// # Errors
    ///
    /// Identical to [`filter::files_not_named`].
    pub fn files_not_named(
        &self,
        path: &Path,
        exclude: &HashSet<String>,
    ) -> Result<Vec<PathBuf>, ListError> {
        self.run("files_not_named", path, || {
            filter::files_not_named(path, exclude)
        })
    }

    /// Traced [`correlate::by_extensions`].
    ///
    /// # Errors
    ///
    /// Identical to [`correlate::by_extensions`].
    pub fn by_extensions(
        &self,
        path: &Path,
        groups: &[ExtensionGroup],
    ) -> Result<Vec<Vec<PathBuf>>, ListError> {
        self.run("by_extensions", path, || {
            correlate::by_extensions(path, groups)
        })
    }

    /// Traced [`correlate::shared_basenames`].
    ///
    /// # Errors
    ///
    /// Identical to [`correlate::shared_basenames`].
    pub fn shared_basenames(
        &self,
        path: &Path,
        groups: &[ExtensionGroup],
    ) -> Result<Vec<String>, ListError> {
        self.run("shared_basenames", path, || {
            correlate::shared_basenames(path, groups)
        })
    }

    /// Traced [`materialize::ensure_path`].
    ///
    /// # Errors
    ///
    /// Identical to [`materialize::ensure_path`].
    pub fn ensure_path(&self, path: &str) -> Result<(), CreateFolderError> {
        self.run("ensure_path", Path::new(path), || {
            materialize::ensure_path(path)
        })
    }
}
