//! Domain Layer - Tradier value types with no I/O.
//!
//! Argument enums and typed requests for the endpoint catalog, the closed
//! set of raw-response cache keys, and the failure kinds. Everything here
//! displays as the exact strings the brokerage API expects.

/// Failure kinds shared by every port.
pub mod error;

/// Market data argument types (intervals, session filters, security types).
pub mod market;

/// Raw response cache keys.
pub mod raw_data;

/// Typed query filters and order descriptions.
pub mod requests;

/// Trading and account argument types (order sides, types, durations).
pub mod trading;

/// Error returned by every port operation; classified by [`error::ErrorKind`].
pub use crate::infrastructure::tradier::TradierError;
