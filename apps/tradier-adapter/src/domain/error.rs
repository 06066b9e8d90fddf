//! Closed set of brokerage failure kinds.
//!
//! `Authorization` is the only specialization: it is a `Login` failure
//! raised for a rejected token.

/// Kind of a brokerage failure, without the attached detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Connection failure, unusable response, or unexpected status.
    Transport,
    /// The request was rejected as invalid (HTTP 400).
    Request,
    /// Authentication flow failure.
    Login,
    /// Token rejected (HTTP 401). Specializes `Login`.
    Authorization,
}

impl ErrorKind {
    /// Label used in logs and metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Request => "request",
            Self::Login => "login",
            Self::Authorization => "authorization",
        }
    }
}
