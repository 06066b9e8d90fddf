//! Option Survey Use Case
//!
//! Quote an underlying, pick its nearest expiration, and fetch strikes and
//! the chain for that expiration.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;

use crate::application::ports::MarketDataPort;
use crate::domain::TradierError;
use crate::domain::requests::ExpirationsQuery;

/// Market data gathered for one underlying.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSurvey {
    /// Underlying symbol.
    pub symbol: String,
    /// Quote document.
    pub quote: Value,
    /// Expirations document.
    pub expirations: Value,
    /// Nearest expiration, if the underlying has listed options.
    pub expiration: Option<NaiveDate>,
    /// Strikes for `expiration`.
    pub strikes: Option<Value>,
    /// Chain for `expiration`.
    pub chain: Option<Value>,
}

/// Use case for surveying an optionable underlying.
pub struct OptionSurveyUseCase<M>
where
    M: MarketDataPort + ?Sized,
{
    market_data: Arc<M>,
    greeks: bool,
}

impl<M> OptionSurveyUseCase<M>
where
    M: MarketDataPort + ?Sized,
{
    /// Create a new `OptionSurveyUseCase`.
    pub const fn new(market_data: Arc<M>) -> Self {
        Self {
            market_data,
            greeks: false,
        }
    }

    /// Request greeks with quotes and chains.
    #[must_use]
    pub const fn with_greeks(mut self, greeks: bool) -> Self {
        self.greeks = greeks;
        self
    }

    /// Run the survey for `symbol`.
    pub async fn execute(&self, symbol: &str) -> Result<OptionSurvey, TradierError> {
        let symbols = [symbol.to_string()];
        let expirations_query = ExpirationsQuery::default();
        let (quote, expirations) = tokio::try_join!(
            self.market_data.quotes(&symbols, self.greeks),
            self.market_data
                .option_expirations(symbol, &expirations_query),
        )?;

        let expiration = first_expiration(&expirations);
        let (strikes, chain) = match expiration {
            Some(date) => {
                let (strikes, chain) = tokio::try_join!(
                    self.market_data.option_strikes(symbol, date),
                    self.market_data.option_chains(symbol, date, self.greeks),
                )?;
                (Some(strikes), Some(chain))
            }
            None => {
                tracing::info!(symbol, "No listed expirations");
                (None, None)
            }
        };

        Ok(OptionSurvey {
            symbol: symbol.to_string(),
            quote,
            expirations,
            expiration,
            strikes,
            chain,
        })
    }
}

/// Earliest date in a `markets/options/expirations` document.
///
/// `expirations.date` is a string for a single expiration, an array
/// otherwise, and `expirations` itself is null when there are none.
#[must_use]
pub fn first_expiration(document: &Value) -> Option<NaiveDate> {
    let dates = &document["expirations"]["date"];
    let parse = |v: &Value| {
        v.as_str()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
    };
    match dates {
        Value::Array(items) => items.iter().filter_map(parse).min(),
        other => parse(other),
    }
}
