//! Account Port (Driven Port)
//!
//! Read access to the user profile and account state.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::TradierError;
use crate::domain::requests::{GainLossQuery, HistoryQuery};

/// Account endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountPort: Send + Sync {
    /// User profile, including the list of accounts.
    async fn user_profile(&self) -> Result<Value, TradierError>;

    /// Account balances.
    async fn balances(&self, account_id: &str) -> Result<Value, TradierError>;

    /// Open positions.
    async fn positions(&self, account_id: &str) -> Result<Value, TradierError>;

    /// Activity history.
    async fn account_history(
        &self,
        account_id: &str,
        query: &HistoryQuery,
    ) -> Result<Value, TradierError>;

    /// Realized gain/loss.
    async fn gain_loss(&self, account_id: &str, query: &GainLossQuery)
    -> Result<Value, TradierError>;

    /// All orders.
    async fn orders(&self, account_id: &str, include_tags: bool) -> Result<Value, TradierError>;

    /// One order.
    async fn order(
        &self,
        account_id: &str,
        order_id: &str,
        include_tags: bool,
    ) -> Result<Value, TradierError>;
}
