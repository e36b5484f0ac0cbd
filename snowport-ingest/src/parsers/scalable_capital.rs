//! Scalable Capital transaction export (CSV)
//!
//! Semicolon-delimited, double-quoted, header row:
//!   date;time;status;reference;description;assetType;type;isin;shares;price;amount;fee;tax;currency

use snowport_core::Result;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::types::RawTransaction;

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(b';')
        .quote(b'"')
        .double_quote(true)
        .has_headers(true)
        // Trailing padding lines are often shorter than the header
        .flexible(true);
    builder
}

/// Read every row of an export, in file order, tagging each with its start line.
pub fn read_scalable_capital<R: Read>(rdr: R) -> Result<Vec<RawTransaction>> {
    let mut rdr = reader_builder().from_reader(rdr);
    let headers = rdr.headers()?.clone();
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let mut row: RawTransaction = record.deserialize(Some(&headers))?;
        row.line = record.position().map_or(0, |p| p.line());
        rows.push(row);
    }
    debug!(rows = rows.len(), "read Scalable Capital export");
    Ok(rows)
}

/// Open and read an export file.
pub fn read_scalable_capital_csv(path: impl AsRef<Path>) -> Result<Vec<RawTransaction>> {
    debug!(path = %path.as_ref().display(), "opening export");
    let file = std::fs::File::open(path.as_ref())?;
    read_scalable_capital(file)
}
