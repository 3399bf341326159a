//! Filesystem enumeration and correlation
//!
//! Directories are listed once, sorted, and every derived view (extension
//! filters, regex filters, basename correlation) preserves that order.
//! Invalid paths surface as [`ListError`] statuses, never as empty results.

pub mod content;
pub use content::WriteMode;

pub mod correlate;
pub use correlate::shared_basenames;

pub mod filter;
pub use filter::ExtensionGroup;

pub mod listing;
pub use listing::ListError;

pub mod materialize;
pub use materialize::{CreateFolderError, ensure_path};

pub mod name;

pub mod trace;
pub use trace::{LogTracer, Traced, Tracer};
