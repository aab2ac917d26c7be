//! Route handlers for the JSON API

pub mod reports;
pub mod transactions;
