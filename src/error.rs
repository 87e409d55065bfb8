use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Raised while assembling a [`Catalog`](crate::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("category key must not be empty")]
    EmptyKey,

    #[error("duplicate category key '{0}'")]
    DuplicateKey(String),

    #[error("category '{0}' must have a weight of at least 1")]
    ZeroWeight(String),

    #[error("invalid pattern {pattern:?} in category '{key}'")]
    InvalidPattern {
        key: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Raised while resolving the text to analyze.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("no input provided; pass text, a file path, or pipe text on stdin")]
    NoInput,

    #[error("failed to read {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read standard input")]
    Stdin(#[source] io::Error),
}
