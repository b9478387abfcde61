//! Provider payload adapters.

pub mod yahoo;

pub use yahoo::parse_quote_summary;
