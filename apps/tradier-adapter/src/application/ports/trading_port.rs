//! Trading Port (Driven Port)
//!
//! Order placement. Orders are sent as-is; no retries.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::TradierError;
use crate::domain::requests::{EquityOrder, OptionOrder};

/// Order placement endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TradingPort: Send + Sync {
    /// Place an equity order.
    async fn place_equity_order(
        &self,
        account_id: &str,
        order: &EquityOrder,
    ) -> Result<Value, TradierError>;

    /// Place a single-leg option order.
    async fn place_option_order(
        &self,
        account_id: &str,
        order: &OptionOrder,
    ) -> Result<Value, TradierError>;
}
