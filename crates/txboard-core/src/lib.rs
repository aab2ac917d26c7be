//! Core aggregation engine for the transaction dashboard
//!
//! Pure, synchronous reducers over an in-memory dataset snapshot. No I/O
//! happens here: the source crate fetches the records and the api crate
//! serves the computed results.

pub mod filter;
pub mod models;
pub mod month;
pub mod reports;

pub use filter::{matches_search, TransactionFilter};
pub use models::TransactionRecord;
pub use month::Month;
pub use reports::{
    category_breakdown, monthly_statistics, price_range_histogram, CategoryCount,
    PriceRangeBucket, Statistics,
};
