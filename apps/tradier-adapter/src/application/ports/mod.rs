//! Application Ports (Driven)
//!
//! Brokerage interfaces split by concern. Every call returns the decoded
//! response document or a classified [`TradierError`].
//!
//! [`TradierError`]: crate::domain::TradierError

mod account_port;
mod market_data_port;
mod trading_port;

pub use account_port::AccountPort;
pub use market_data_port::MarketDataPort;
pub use trading_port::TradingPort;

#[cfg(test)]
pub use account_port::MockAccountPort;
#[cfg(test)]
pub use market_data_port::MockMarketDataPort;
#[cfg(test)]
pub use trading_port::MockTradingPort;
