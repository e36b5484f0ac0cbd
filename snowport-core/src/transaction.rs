//! Normalized transaction record in the Snowball Analytics CSV schema.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::event::Event;

/// Column names of the Snowball import, in output order
pub const OUTPUT_HEADER: [&str; 11] = [
    "Event",
    "Date",
    "Symbol",
    "Price",
    "Quantity",
    "Currency",
    "FeeTax",
    "Exchange",
    "FeeCurrency",
    "DoNotAdjustCash",
    "Note",
];

/// Scalable Capital only settles fees in EUR
pub const FEE_CURRENCY: &str = "EUR";

/// The export carries no venue information
pub const EXCHANGE: &str = "";

/// Quantity column: a number for cash-like events, the broker's raw share count for buys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Quantity {
    Amount(f64),
    /// Passed through exactly as exported (e.g. "10" or "1,5")
    Shares(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Amount(v) => write!(f, "{v}"),
            Quantity::Shares(s) => f.write_str(s),
        }
    }
}

/// One row of the Snowball CSV
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedTransaction {
    pub event: Event,
    /// "YYYY-MM-DD HH:MM:SS", copied from the export without validation
    pub date: String,
    /// ISIN
    pub symbol: String,
    pub price: f64,
    pub quantity: Quantity,
    pub currency: String,
    /// Signed; negative for fee debits
    pub fee_tax: f64,
    pub exchange: String,
    pub fee_currency: String,
    pub do_not_adjust_cash: bool,
    /// "{description} - {status} - {reference}"
    pub note: String,
}

impl NormalizedTransaction {
    /// Render the row in `OUTPUT_HEADER` order.
    pub fn to_record(&self) -> [String; 11] {
        [
            self.event.to_string(),
            self.date.clone(),
            self.symbol.clone(),
            self.price.to_string(),
            self.quantity.to_string(),
            self.currency.clone(),
            self.fee_tax.to_string(),
            self.exchange.clone(),
            self.fee_currency.clone(),
            format_bool(self.do_not_adjust_cash).to_string(),
            self.note.clone(),
        ]
    }
}

/// Snowball expects the capitalized spelling.
fn format_bool(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}
