//! Map Scalable Capital rows onto Snowball events.
//!
//! Classification comes first; price, quantity and fee/tax are then derived
//! per event:
//!
//! | event    | price          | quantity         | fee/tax          |
//! |----------|----------------|------------------|------------------|
//! | FEE      | 0              | 0                | -amount          |
//! | DIVIDEND | 0              | amount           | fee + tax        |
//! | CASH_IN  | 1              | amount           | fee + tax        |
//! | BUY      | price          | shares (raw)     | fee + tax        |

use snowport_core::{Error, Event, NormalizedTransaction, Quantity, Result, EXCHANGE, FEE_CURRENCY};
use snowport_ingest::{parse_locale_number, RawTransaction};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Map one export row. `Ok(None)` means the row is padding and produces no output.
pub fn map_transaction(row: &RawTransaction) -> Result<Option<NormalizedTransaction>> {
    if !row.has_date() {
        return Ok(None);
    }

    let event = Event::from_source_type(RawTransaction::text(&row.kind))?;

    let (price, quantity, fee_tax) = match event {
        // The amount column already is the total fee charged.
        // Subtracting from zero keeps an empty amount at 0 instead of -0.
        Event::Fee => (0.0, Quantity::Amount(0.0), 0.0 - amount(row)?),
        Event::Dividend => (0.0, Quantity::Amount(amount(row)?), fee_plus_tax(row)?),
        Event::CashIn => (1.0, Quantity::Amount(amount(row)?), fee_plus_tax(row)?),
        Event::Buy => (
            parse_locale_number("price", row.price.as_deref())?,
            Quantity::Shares(RawTransaction::text(&row.shares).to_string()),
            fee_plus_tax(row)?,
        ),
    };

    Ok(Some(NormalizedTransaction {
        event,
        date: format!(
            "{} {}",
            RawTransaction::text(&row.date),
            RawTransaction::text(&row.time)
        ),
        symbol: RawTransaction::text(&row.isin).to_string(),
        price,
        quantity,
        currency: RawTransaction::text(&row.currency).to_string(),
        fee_tax,
        exchange: EXCHANGE.to_string(),
        fee_currency: FEE_CURRENCY.to_string(),
        do_not_adjust_cash: false,
        note: format!(
            "{} - {} - {}",
            RawTransaction::text(&row.description),
            RawTransaction::text(&row.status),
            RawTransaction::text(&row.reference)
        ),
    }))
}

fn amount(row: &RawTransaction) -> Result<f64> {
    parse_locale_number("amount", row.amount.as_deref())
}

fn fee_plus_tax(row: &RawTransaction) -> Result<f64> {
    let fee = parse_locale_number("fee", row.fee.as_deref())?;
    let tax = parse_locale_number("tax", row.tax.as_deref())?;
    Ok(fee + tax)
}

/// Map a whole export in order. The first error aborts the run with no partial output
/// and is wrapped in `Error::AtLine` with the row's start line.
pub fn convert_transactions(rows: &[RawTransaction]) -> Result<Vec<NormalizedTransaction>> {
    let mut out = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for row in rows {
        let line = row.line;
        match map_transaction(row).map_err(|e| Error::at_line(line, e))? {
            Some(txn) => {
                debug!(line, event = %txn.event, symbol = %txn.symbol, "mapped row");
                out.push(txn);
            }
            None => {
                debug!(line, "skipping row without date");
                skipped += 1;
            }
        }
    }

    let summary = ConversionSummary::new(&out, skipped);
    info!(
        converted = out.len(),
        skipped,
        counts = %summary,
        "conversion finished"
    );
    Ok(out)
}

/// Per-event tally of a conversion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionSummary {
    pub counts: BTreeMap<&'static str, usize>,
    pub skipped: usize,
}

impl ConversionSummary {
    pub fn new(txns: &[NormalizedTransaction], skipped: usize) -> Self {
        let mut counts = BTreeMap::new();
        for t in txns {
            *counts.entry(t.event.as_str()).or_insert(0) += 1;
        }
        Self { counts, skipped }
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl std::fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .counts
            .iter()
            .map(|(event, n)| format!("{event}={n}"))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}
