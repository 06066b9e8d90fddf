//! Use Cases
//!
//! Workflows that combine several brokerage calls.

mod account_snapshot;
mod option_survey;

pub use account_snapshot::{AccountSnapshot, AccountSnapshotUseCase, primary_account_id};
pub use option_survey::{OptionSurvey, OptionSurveyUseCase, first_expiration};
