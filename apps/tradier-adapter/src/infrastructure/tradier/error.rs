//! Tradier error taxonomy.
//!
//! A closed set of four kinds. `Authorization` is the only specialization:
//! it is a `Login` failure raised for a rejected token (HTTP 401).

use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::error::ErrorKind;

/// Errors from the Tradier adapter.
#[derive(Debug, Error)]
pub enum TradierError {
    /// The server or transport did not produce a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportFailure),

    /// The request was malformed or rejected (HTTP 400).
    #[error("request rejected ({status}): {body}")]
    Request {
        /// HTTP status returned.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// Authentication flow failed before any request was sent.
    #[error("login failed: {0}")]
    Login(String),

    /// The bearer token was rejected (HTTP 401).
    #[error("authorization rejected ({status}): {body}")]
    Authorization {
        /// HTTP status returned.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },
}

/// Underlying cause of a transport error.
#[derive(Debug, Error)]
pub enum TransportFailure {
    /// An ephemeral session could not be created.
    #[error("failed to create HTTP session: {0}")]
    Session(#[source] reqwest::Error),

    /// The shared session stopped admitting requests.
    #[error("shared HTTP session closed")]
    Closed,

    /// DNS, TCP or TLS connection establishment failed.
    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    /// The request exceeded its time budget.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Any other failure while sending or reading the response.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Non-2xx status other than 400 or 401.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status returned.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// A 2xx response whose body is not valid JSON.
    #[error("failed to decode response body: {source}")]
    Decode {
        /// Parser error.
        #[source]
        source: serde_json::Error,
        /// Raw response body.
        body: String,
    },

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl TransportFailure {
    /// Classify a `reqwest` failure raised while sending or reading.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_connect() {
            Self::Connect(err)
        } else {
            Self::Network(err)
        }
    }
}

impl TradierError {
    /// Map a non-2xx status and its body to an error.
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::Request { status, body },
            StatusCode::UNAUTHORIZED => Self::Authorization { status, body },
            _ => Self::Transport(TransportFailure::Status { status, body }),
        }
    }

    /// The kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Request { .. } => ErrorKind::Request,
            Self::Login(_) => ErrorKind::Login,
            Self::Authorization { .. } => ErrorKind::Authorization,
        }
    }

    /// Returns true for `Login` and its `Authorization` specialization.
    #[must_use]
    pub const fn is_login_error(&self) -> bool {
        matches!(self, Self::Login(_) | Self::Authorization { .. })
    }

    /// HTTP status attached to the error, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Request { status, .. }
            | Self::Authorization { status, .. }
            | Self::Transport(TransportFailure::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Raw response body attached to the error, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Request { body, .. }
            | Self::Authorization { body, .. }
            | Self::Transport(
                TransportFailure::Status { body, .. } | TransportFailure::Decode { body, .. },
            ) => Some(body.as_str()),
            _ => None,
        }
    }
}
