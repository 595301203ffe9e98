// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The notification API was called through a handle whose provider is gone.
    #[error("notification API used outside of its provider")]
    ContextUnavailable,

    /// The pending notification slot held something that is not a record.
    #[error("malformed pending notification: {0}")]
    MalformedPendingRecord(String),

    /// The client storage backend failed to read or write a key.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedPendingRecord(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
