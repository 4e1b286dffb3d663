//! Pipeline errors.
//!
//! Every stage of the fetch/export pipeline returns [`Error`] instead of
//! terminating the process. The binary decides what to do with it.

use std::path::PathBuf;

use reqwest::StatusCode;

/// Errors that can occur while fetching, decoding or exporting sessions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Search request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Expected to receive 200 OK. Got {status}")]
    Status { status: StatusCode },

    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("Failed to decode search response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode search response: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write summary: {0}")]
    Summary(#[source] std::io::Error),

    #[error("Failed to write CSV {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Error::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
