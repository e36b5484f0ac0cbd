//! snowport-ingest: Scalable Capital export reading and locale-aware number parsing.

pub mod locale;
pub mod parsers;
pub mod types;

pub use locale::parse_locale_number;
pub use parsers::scalable_capital::{read_scalable_capital, read_scalable_capital_csv};
pub use types::RawTransaction;
