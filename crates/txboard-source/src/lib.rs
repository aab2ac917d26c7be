//! Upstream dataset client
//!
//! Fetches the product transaction dataset from the configured JSON
//! endpoint and normalizes it into core records. The dataset is re-fetched
//! on every request; snapshots are independent and never cached.

pub mod error;

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use txboard_core::TransactionRecord;

pub use error::SourceError;

/// Source reference type
pub type SourceRef = Arc<dyn DatasetSource>;

// ==================== Source Trait ====================

/// Trait for dataset providers
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch a fresh snapshot of the full dataset
    async fn fetch(&self) -> Result<Vec<TransactionRecord>, SourceError>;
}

// ==================== Record Normalization ====================

/// Raw product record as delivered by the upstream endpoint
///
/// Deserialization keeps only the recognized fields; anything else in the
/// payload is dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub sold: bool,
    #[serde(rename = "dateOfSale")]
    pub date_of_sale: String,
}

impl From<RawProduct> for TransactionRecord {
    fn from(raw: RawProduct) -> Self {
        TransactionRecord {
            id: raw.id,
            title: raw.title,
            price: raw.price,
            description: raw.description,
            category: raw.category,
            image: raw.image,
            sold: raw.sold,
            date_of_sale: raw.date_of_sale,
        }
    }
}

// ==================== HTTP Source ====================

/// HTTP dataset source backed by reqwest
pub struct HttpDatasetSource {
    url: String,
    client: reqwest::Client,
}

impl HttpDatasetSource {
    /// Create a client for the given endpoint with a bounded request timeout
    pub fn new(url: String, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn fetch(&self) -> Result<Vec<TransactionRecord>, SourceError> {
        log::debug!("Fetching dataset from {}", self.url);

        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let raw: Vec<RawProduct> = serde_json::from_slice(&body)?;

        log::debug!("Fetched {} records", raw.len());
        Ok(raw.into_iter().map(TransactionRecord::from).collect())
    }
}
