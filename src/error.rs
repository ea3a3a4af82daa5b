//! Error Types
//!
//! Failures the viewer can surface. Both fetch failures collapse to a single
//! status string when shown to the user.

use thiserror::Error;
use wasm_jsonp::JsonpError;

/// Status reported when a response arrived but did not have the expected shape
pub const PARSE_ERROR_STATUS: &str = "parsererror";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a payload (network, DNS, script load)
    #[error("{status}")]
    Transport { status: String },

    /// A payload arrived but could not be read as the expected records
    #[error("{status}: {detail}")]
    Protocol { status: String, detail: String },
}

impl FetchError {
    pub fn transport(status: impl Into<String>) -> Self {
        FetchError::Transport { status: status.into() }
    }

    pub fn protocol(detail: impl Into<String>) -> Self {
        FetchError::Protocol {
            status: PARSE_ERROR_STATUS.to_string(),
            detail: detail.into(),
        }
    }

    /// The only text the user is shown
    pub fn status(&self) -> &str {
        match self {
            FetchError::Transport { status } | FetchError::Protocol { status, .. } => status,
        }
    }
}

impl From<JsonpError> for FetchError {
    fn from(err: JsonpError) -> Self {
        match err {
            JsonpError::NoCallback => FetchError::protocol(err.to_string()),
            other => FetchError::transport(other.status()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown terminology variant: {0:?} (expected \"linkbacks\" or \"pingbacks\")")]
    UnknownTerminology(String),
}
