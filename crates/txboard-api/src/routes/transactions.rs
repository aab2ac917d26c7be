//! Transaction listing endpoints
//!
//! Endpoints:
//! - api_transactions: Full-field records selected by month or search
//! - api_transactions_search: Records matching a search string

use crate::{ApiError, AppState};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use txboard_core::{Month, TransactionFilter, TransactionRecord};

/// Query parameters for the transactions listing
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub month: Option<String>,
    pub search: Option<String>,
}

impl ListParams {
    /// Resolve the selection mode; search takes precedence over month
    fn filter(&self) -> Result<TransactionFilter, ApiError> {
        if let Some(search) = &self.search {
            return Ok(TransactionFilter::BySearch(search.clone()));
        }

        match &self.month {
            Some(month) => {
                let month: Month = month
                    .parse()
                    .map_err(|message| ApiError::BadRequest { message })?;
                Ok(TransactionFilter::ByMonth(month))
            }
            None => Ok(TransactionFilter::All),
        }
    }
}

/// Get transactions selected by month or search text (JSON API)
pub async fn api_transactions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TransactionRecord>>, ApiError> {
    let filter = params.filter()?;
    let records = state.source.fetch().await?;
    Ok(Json(filter.apply(&records)))
}

/// Query parameters for the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: String,
}

/// Get transactions matching the search text (JSON API)
pub async fn api_transactions_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<TransactionRecord>>, ApiError> {
    let records = state.source.fetch().await?;
    let filter = TransactionFilter::BySearch(params.search);
    Ok(Json(filter.apply(&records)))
}
