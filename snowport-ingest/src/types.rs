use serde::{Deserialize, Serialize};

/// One row of a Scalable Capital transaction export, kept as raw strings.
///
/// Every column is optional: a missing column and an empty cell are the same
/// thing to the mapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTransaction {
    /// YYYY-MM-DD
    pub date: Option<String>,
    /// HH:MM:SS
    pub time: Option<String>,
    /// Executed, Pending, ...
    pub status: Option<String>,
    pub reference: Option<String>,
    /// Security name or service description
    pub description: Option<String>,
    /// Security or Cash
    #[serde(rename = "assetType")]
    pub asset_type: Option<String>,
    /// Deposit, Buy, Fee, Distribution, ...
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub isin: Option<String>,
    pub shares: Option<String>,
    /// Per-share price, locale formatted ("1.234,56")
    pub price: Option<String>,
    /// Total amount, locale formatted
    pub amount: Option<String>,
    pub fee: Option<String>,
    pub tax: Option<String>,
    pub currency: Option<String>,
    /// Line in the export where this row starts (header is line 1); 0 when not read from a file
    #[serde(skip)]
    pub line: u64,
}

impl RawTransaction {
    /// Blank or trailing padding lines in the export have no date.
    pub fn has_date(&self) -> bool {
        self.date.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Borrow a text column, treating absent as empty.
    pub fn text(field: &Option<String>) -> &str {
        field.as_deref().unwrap_or("")
    }
}
