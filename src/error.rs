//! Custom error types for the feed pipeline
//!
//! Provides structured, typed errors instead of generic Box<dyn Error>

use thiserror::Error;

/// Top-level pipeline errors
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("feed returned HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid feed url: {0}")]
    Url(#[from] url::ParseError),

    #[error("malformed feed row: {0}")]
    Row(#[from] RowError),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Row-level parse failures. These drop the row, never the whole feed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("expected at least {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

impl From<String> for SignalError {
    fn from(err: String) -> Self {
        SignalError::Config(err)
    }
}

impl From<&str> for SignalError {
    fn from(err: &str) -> Self {
        SignalError::Config(err.to_string())
    }
}
