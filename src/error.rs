// src/error.rs
//
// Three outcomes a caller must tell apart:
// - TransportFailure: the service could not be reached or answered badly.
// - MalformedPayload: the service answered, but not in the expected shape.
// - an empty `Table`: well-formed, zero rows. Not an error.

use std::path::PathBuf;

use thiserror::Error;

use crate::query::ResourceKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportReason {
    /// Non-success HTTP status.
    Status,
    /// Connect, TLS, timeout or read failure. No status available.
    Unreachable,
    /// Success status but the body is not JSON.
    UnparseableBody,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind} fetch failed ({reason:?}, status {status:?}): {detail}")]
pub struct TransportFailure {
    pub kind: ResourceKind,
    pub reason: TransportReason,
    pub status: Option<u16>,
    pub raw_body: String,
    pub detail: String,
}

/// Where in a payload the expected structure was missing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("at `{path}`: expected {expected}")]
pub struct ShapeError {
    pub path: String,
    pub expected: String,
}

impl ShapeError {
    pub fn new(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self { path: path.into(), expected: expected.into() }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("malformed {kind} payload {source}")]
pub struct MalformedPayload {
    pub kind: ResourceKind,
    #[source]
    pub source: ShapeError,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DashError {
    #[error(transparent)]
    Transport(#[from] TransportFailure),

    #[error(transparent)]
    Malformed(#[from] MalformedPayload),
}

impl DashError {
    pub fn kind(&self) -> ResourceKind {
        match self {
            DashError::Transport(e) => e.kind,
            DashError::Malformed(e) => e.kind,
        }
    }

    /// Short user-facing message; details go to the log.
    pub fn user_message(&self) -> String {
        match self {
            DashError::Transport(e) => match e.status {
                Some(code) => format!("Service returned HTTP {code} for {}", e.kind),
                None => format!("Could not load {}: {}", e.kind, e.detail),
            },
            DashError::Malformed(e) => {
                format!("Service returned {} data we could not read ({})", e.kind, e.source)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key not configured: set CRIC_DASH_API_KEY or `api_key` in cric_dash.toml")]
    MissingKey,

    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid timeout `{0}` (whole seconds, > 0)")]
    InvalidTimeout(String),

    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}
