//! Tradier Brokerage REST Adapter
//!
//! Client for the Tradier REST API with:
//! - One authenticated request executor shared by every endpoint
//! - Borrowed or per-request transport sessions
//! - Closed error taxonomy mapped from HTTP status codes
//! - Last-response cache keyed by operation

mod adapter;
mod api_types;
mod cache;
mod config;
mod error;
mod http_client;
mod params;
mod session;

pub use adapter::TradierAdapter;
pub use cache::RawResponseCache;
pub use config::{
    API_VERSION, AccessToken, DEFAULT_MAX_CONNECTIONS, DEFAULT_TIMEOUT, TradierConfig,
    TradierEnvironment,
};
pub use error::{TradierError, TransportFailure};
pub use http_client::TradierHttpClient;
pub use params::{Inclusion, Param, encode};
pub use session::{Session, SessionFactory, SessionLease, SessionStats, SharedClient};
