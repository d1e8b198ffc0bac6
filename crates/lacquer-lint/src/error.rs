//! Error types for the lint crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scanning source trees.
///
/// Findings are not errors: a scan over dirty sources still completes and
/// returns its report. Only I/O failures below an existing scan root are
/// fatal.
#[derive(Debug, Error)]
pub enum LintError {
    /// A directory or file inside a scan root could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for scan operations.
pub type Result<T> = std::result::Result<T, LintError>;
