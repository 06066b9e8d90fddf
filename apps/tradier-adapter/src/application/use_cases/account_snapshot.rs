//! Account Snapshot Use Case
//!
//! Fetches balances, positions and history for one account concurrently.

use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::AccountPort;
use crate::domain::TradierError;
use crate::domain::requests::HistoryQuery;

/// Balances, positions and history for one account.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSnapshot {
    /// Account number.
    pub account_id: String,
    /// Balances document.
    pub balances: Value,
    /// Positions document.
    pub positions: Value,
    /// History document.
    pub history: Value,
}

/// Use case for snapshotting an account.
pub struct AccountSnapshotUseCase<A>
where
    A: AccountPort + ?Sized,
{
    account: Arc<A>,
}

impl<A> AccountSnapshotUseCase<A>
where
    A: AccountPort + ?Sized,
{
    /// Create a new `AccountSnapshotUseCase`.
    pub const fn new(account: Arc<A>) -> Self {
        Self { account }
    }

    /// Fetch the user profile and resolve the account to use: `preferred`
    /// when given, otherwise the first account in the profile.
    ///
    /// The profile call doubles as a token check.
    pub async fn resolve_account(&self, preferred: Option<&str>) -> Result<String, TradierError> {
        let profile = self.account.user_profile().await?;

        if let Some(id) = preferred {
            return Ok(id.to_string());
        }

        primary_account_id(&profile).ok_or_else(|| {
            TradierError::Login("user profile lists no accounts".to_string())
        })
    }

    /// Fetch balances, positions and history concurrently.
    ///
    /// Fails with the first error; the remaining calls are dropped.
    pub async fn execute(&self, account_id: &str) -> Result<AccountSnapshot, TradierError> {
        let history_query = HistoryQuery::default();
        let (balances, positions, history) = tokio::try_join!(
            self.account.balances(account_id),
            self.account.positions(account_id),
            self.account.account_history(account_id, &history_query),
        )?;

        tracing::info!(account_id, "Fetched account snapshot");

        Ok(AccountSnapshot {
            account_id: account_id.to_string(),
            balances,
            positions,
            history,
        })
    }
}

/// First account number in a `user/profile` document.
///
/// `profile.account` is an object for single-account users and an array
/// otherwise.
#[must_use]
pub fn primary_account_id(profile: &Value) -> Option<String> {
    let account = &profile["profile"]["account"];
    let first = match account {
        Value::Array(accounts) => accounts.first()?,
        Value::Object(_) => account,
        _ => return None,
    };
    first["account_number"].as_str().map(str::to_string)
}
