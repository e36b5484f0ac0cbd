//! Snowball event vocabulary and its lookup from Scalable Capital transaction types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Event kinds understood by the Snowball Analytics import
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Event {
    #[serde(rename = "CASH_IN")]
    CashIn,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "FEE")]
    Fee,
    #[serde(rename = "DIVIDEND")]
    Dividend,
}

impl Event {
    pub const ALL: [Event; 4] = [Event::CashIn, Event::Buy, Event::Fee, Event::Dividend];

    /// Classify a source `type` value (`Deposit`, `Buy`, `Fee`, `Distribution`).
    /// Matching ignores case; anything else is an `UnknownEventType`.
    pub fn from_source_type(source_type: &str) -> Result<Self> {
        match source_type.to_lowercase().as_str() {
            "deposit" => Ok(Event::CashIn),
            "buy" => Ok(Event::Buy),
            "fee" => Ok(Event::Fee),
            "distribution" => Ok(Event::Dividend),
            _ => Err(Error::UnknownEventType(source_type.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Event::CashIn => "CASH_IN",
            Event::Buy => "BUY",
            Event::Fee => "FEE",
            Event::Dividend => "DIVIDEND",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
