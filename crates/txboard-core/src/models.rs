//! Core data models for the transaction dashboard

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::month::Month;

/// A single product transaction from a dataset snapshot
///
/// Records are created by deserializing the upstream response, never
/// mutated, and discarded once the response computed from them is sent.
/// The `id` is only unique within one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Unique identifier within one dataset snapshot
    pub id: u64,
    /// Product title
    pub title: String,
    /// Sale price
    pub price: f64,
    /// Product description
    pub description: String,
    /// Product category
    pub category: String,
    /// Product image URL, passed through unmodified
    pub image: String,
    /// Whether the product has been sold
    pub sold: bool,
    /// Sale timestamp as delivered by the source (RFC3339)
    pub date_of_sale: String,
}

impl TransactionRecord {
    /// Get the sale date, if the stored timestamp is parseable
    ///
    /// The upstream dataset carries full RFC3339 timestamps; a bare
    /// `YYYY-MM-DD` date is accepted as a fallback.
    pub fn sale_date(&self) -> Option<NaiveDate> {
        DateTime::parse_from_rfc3339(&self.date_of_sale)
            .map(|dt| dt.date_naive())
            .ok()
            .or_else(|| NaiveDate::parse_from_str(&self.date_of_sale, "%Y-%m-%d").ok())
    }

    /// Get the calendar month of the sale, in any year
    pub fn sale_month(&self) -> Option<Month> {
        self.sale_date().and_then(|date| Month::from_index(date.month()))
    }
}
