//! Error types for the token pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading token documents or generating the stylesheet.
///
/// All of these are fatal to the run: the pipeline never writes a partial
/// stylesheet after any of them.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Reading an input document or writing the stylesheet failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input document is not valid JSON.
    #[error("failed to parse {origin}: {message}")]
    Parse { origin: String, message: String },

    /// A document had an unexpected shape (non-object root, non-object
    /// palette group, and the like).
    #[error("invalid structure in {origin}: {message}")]
    Structure { origin: String, message: String },

    /// The semantic document is missing its required variant.
    #[error("semantic document has no \"{0}\" variant")]
    MissingVariant(&'static str),

    /// The semantic document declares a variant other than light/dark.
    #[error("unknown theme variant \"{0}\" (expected \"light\" or \"dark\")")]
    UnknownVariant(String),

    /// A token leaf holds a value the pipeline cannot emit.
    #[error("token '{path}' has an unsupported {kind} value (expected a string or number)")]
    InvalidValue { path: String, kind: &'static str },

    /// A semantic token references a palette entry that does not exist.
    #[error("token '{path}' references missing palette entry '{reference}'")]
    UnresolvedReference { path: String, reference: String },
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, TokenError>;
