//! Error handling for the location stub harness.
//!
//! Configuration and fixture problems are surfaced to the caller as typed
//! errors instead of being logged and ignored; a stub that cannot resolve
//! its body file fails at registration time, not at serve time.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// The properties file could not be opened or read.
    #[error("failed to load config from {path}: {source}")]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A required key is absent from the properties file.
    #[error("config key missing: {0}")]
    MissingKey(String),
    /// A non-comment line in the properties file is not a `key=value` pair.
    #[error("config line {line} is not a key=value pair: {text:?}")]
    MalformedLine { line: usize, text: String },
    /// A stub referenced a body fixture that does not exist on disk.
    #[error("fixture not found: {0}")]
    FixtureNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}
