//! Write normalized transactions as a Snowball Analytics import CSV.

use snowport_core::{NormalizedTransaction, Result, OUTPUT_HEADER};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write the header and one line per transaction to any writer.
pub fn write_snowball<W: Write>(wtr: W, txns: &[NormalizedTransaction]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(wtr);

    wtr.write_record(OUTPUT_HEADER)?;
    for t in txns {
        wtr.write_record(t.to_record())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the Snowball CSV into it.
pub fn write_snowball_csv(path: impl AsRef<Path>, txns: &[NormalizedTransaction]) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_snowball(file, txns)?;
    info!(
        path = %path.as_ref().display(),
        rows = txns.len(),
        "wrote Snowball CSV"
    );
    Ok(())
}
