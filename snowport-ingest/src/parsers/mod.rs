//! Broker-specific export readers.

pub mod scalable_capital;
