//! snowport-convert: Scalable Capital to Snowball Analytics transaction mapping and CSV output

pub mod mapper;
pub mod writer;

pub use mapper::{convert_transactions, map_transaction, ConversionSummary};
pub use writer::{write_snowball, write_snowball_csv};
