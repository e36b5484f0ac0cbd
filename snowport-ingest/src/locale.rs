//! Numbers in the export use `.` for thousands and `,` for decimals ("1.234,56").

use snowport_core::{Error, Result};

/// Parse a locale-formatted number. Empty or absent input is `0.0`.
/// Only finite values are accepted; `nan` and `inf` are malformed.
///
/// `field` names the source column and only appears in the error.
pub fn parse_locale_number(field: &'static str, raw: Option<&str>) -> Result<f64> {
    let s = raw.map(str::trim).unwrap_or("");
    if s.is_empty() {
        return Ok(0.0);
    }

    let normalized = s.replace('.', "").replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::malformed_number(field, s)),
    }
}
