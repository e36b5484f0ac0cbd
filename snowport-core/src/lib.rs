//! snowport-core: domain types shared by the Scalable Capital reader and the Snowball writer

pub mod error;
pub mod event;
pub mod transaction;

pub use error::{Error, Result};
pub use event::Event;
pub use transaction::{NormalizedTransaction, Quantity, EXCHANGE, FEE_CURRENCY, OUTPUT_HEADER};
