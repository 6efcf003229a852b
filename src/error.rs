// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong in one adapter call.
///
/// Callers never see this as a hard failure: `Lookup::suggest` turns it into an
/// empty result plus a diagnostic.
#[derive(Debug, Error)]
pub enum QueryFailure {
    #[error("search term is empty")]
    EmptyTerm,

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected response shape: {0}")]
    Shape(String),
}

impl QueryFailure {
    pub fn is_timeout(&self) -> bool {
        matches!(self, QueryFailure::Transport(e) if e.is_timeout())
    }
}

/// Run-level failures. Adapter calls never end up here; only setup and export do.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("lookup setup failed: {0}")]
    Client(#[from] QueryFailure),

    #[error("could not read terms from {path}: {source}")]
    Terms {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, Error>;
