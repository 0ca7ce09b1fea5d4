use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("Timeout: the server did not respond in time")]
    Timeout,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed with status {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Unknown error: {0}")]
    Unknown(String),
}

#[derive(Debug, Error)]
pub(crate) enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize launch data: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Timeout { .. } => FetchError::Timeout,
            // Socket-level read timeouts surface as plain I/O errors
            ureq::Error::Io(e) if e.kind() == ErrorKind::TimedOut => FetchError::Timeout,
            ureq::Error::Io(e) => FetchError::Connection(e.to_string()),
            e @ (ureq::Error::ConnectionFailed | ureq::Error::HostNotFound) => {
                FetchError::Connection(e.to_string())
            }
            ureq::Error::StatusCode(status) => FetchError::Remote {
                status,
                body: String::new(),
            },
            e => FetchError::Unknown(e.to_string()),
        }
    }
}
