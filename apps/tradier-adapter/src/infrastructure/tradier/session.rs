//! HTTP session ownership.
//!
//! A session is either borrowed from the caller, in which case every
//! request shares the caller's connection pool and the adapter never shuts
//! it down, or owned by the adapter, in which case each request gets a
//! fresh client that is released when its lease drops.
//!
//! A borrowed session admits at most `limit` requests at once. Further
//! acquisitions wait for a lease to drop.

use std::ops::Deref;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Client;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use super::config::DEFAULT_MAX_CONNECTIONS;
use super::error::{TradierError, TransportFailure};

/// Counters for ephemeral session lifecycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Ephemeral sessions created.
    pub opened: u64,
    /// Ephemeral sessions released.
    pub released: u64,
}

impl SessionStats {
    /// Sessions created but not yet released.
    #[must_use]
    pub const fn in_flight(&self) -> u64 {
        self.opened.saturating_sub(self.released)
    }
}

#[derive(Debug, Default)]
struct Counters {
    opened: AtomicU64,
    released: AtomicU64,
}

/// Builds one client per request for the owned mode.
#[derive(Debug, Clone)]
pub struct SessionFactory {
    counters: Arc<Counters>,
}

impl SessionFactory {
    fn new() -> Self {
        Self {
            counters: Arc::new(Counters::default()),
        }
    }

    fn open(&self) -> Result<SessionLease, TradierError> {
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| TradierError::Transport(TransportFailure::Session(e)))?;

        let opened = self.counters.opened.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::trace!(opened, "Opened ephemeral session");

        Ok(SessionLease {
            client,
            release: Some(Arc::clone(&self.counters)),
            _permit: None,
        })
    }
}

/// Caller-supplied client gated by a request ceiling.
#[derive(Debug, Clone)]
pub struct SharedClient {
    client: Client,
    permits: Arc<Semaphore>,
    limit: usize,
}

impl SharedClient {
    fn new(client: Client, limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            client,
            permits: Arc::new(Semaphore::new(limit)),
            limit,
        }
    }

    async fn lease(&self) -> Result<SessionLease, TradierError> {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|_| TradierError::Transport(TransportFailure::Closed))?;

        Ok(SessionLease {
            client: self.client.clone(),
            release: None,
            _permit: Some(permit),
        })
    }
}

/// Transport session used by the request executor.
#[derive(Debug, Clone)]
pub enum Session {
    /// Caller-supplied client; never closed by the adapter.
    Borrowed(SharedClient),
    /// Adapter-created client per request.
    Owned(SessionFactory),
}

impl Session {
    /// Share the caller's client with the default request ceiling.
    #[must_use]
    pub fn borrowed(client: Client) -> Self {
        Self::borrowed_with_limit(client, DEFAULT_MAX_CONNECTIONS)
    }

    /// Share the caller's client, admitting at most `limit` requests at once.
    ///
    /// A zero limit is raised to one.
    #[must_use]
    pub fn borrowed_with_limit(client: Client, limit: usize) -> Self {
        Self::Borrowed(SharedClient::new(client, limit))
    }

    /// Create a client for every request.
    #[must_use]
    pub fn owned() -> Self {
        Self::Owned(SessionFactory::new())
    }

    /// Borrowed with `limit` when a client is supplied, owned otherwise.
    #[must_use]
    pub fn from_option(client: Option<Client>, limit: usize) -> Self {
        client.map_or_else(Self::owned, |client| {
            Self::borrowed_with_limit(client, limit)
        })
    }

    /// Returns true for the borrowed mode.
    #[must_use]
    pub const fn is_borrowed(&self) -> bool {
        matches!(self, Self::Borrowed(_))
    }

    /// Concurrent request ceiling of a borrowed session.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        match self {
            Self::Borrowed(shared) => Some(shared.limit),
            Self::Owned(_) => None,
        }
    }

    /// Acquire a client for exactly one request.
    ///
    /// Waits while a borrowed session is at its ceiling.
    pub async fn acquire(&self) -> Result<SessionLease, TradierError> {
        match self {
            Self::Borrowed(shared) => shared.lease().await,
            Self::Owned(factory) => factory.open(),
        }
    }

    /// Ephemeral session counters. Always zero for borrowed sessions.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        match self {
            Self::Borrowed(_) => SessionStats::default(),
            Self::Owned(factory) => SessionStats {
                opened: factory.counters.opened.load(Ordering::Acquire),
                released: factory.counters.released.load(Ordering::Acquire),
            },
        }
    }
}

/// A client held for the duration of one request.
///
/// Owned leases drop their client and count the release exactly once.
/// Borrowed leases return their slot to the session on drop.
#[derive(Debug)]
pub struct SessionLease {
    client: Client,
    release: Option<Arc<Counters>>,
    _permit: Option<OwnedSemaphorePermit>,
}

impl SessionLease {
    /// Returns true if dropping this lease closes its client.
    #[must_use]
    pub const fn is_ephemeral(&self) -> bool {
        self.release.is_some()
    }
}

impl Deref for SessionLease {
    type Target = Client;

    fn deref(&self) -> &Client {
        &self.client
    }
}

impl Drop for SessionLease {
    fn drop(&mut self) {
        if let Some(counters) = self.release.take() {
            let released = counters.released.fetch_add(1, Ordering::AcqRel) + 1;
            tracing::trace!(released, "Released ephemeral session");
        }
    }
}
