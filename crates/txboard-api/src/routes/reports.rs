//! Monthly report endpoints
//!
//! Endpoints:
//! - api_statistics: Sales totals for one month
//! - api_price_range: Fixed six-bucket price histogram
//! - api_pie_chart: Category occurrence counts
//! - api_combined_data: All of the above plus the month's transactions

use crate::{ApiError, AppState};
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use txboard_core::{
    category_breakdown, monthly_statistics, price_range_histogram, CategoryCount, Month,
    PriceRangeBucket, Statistics, TransactionFilter, TransactionRecord,
};

/// Combined payload for the dashboard view
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedData {
    pub transactions: Vec<TransactionRecord>,
    pub statistics: Statistics,
    pub price_range: Vec<PriceRangeBucket>,
    pub pie_chart: Vec<CategoryCount>,
}

fn parse_month(month: &str) -> Result<Month, ApiError> {
    month
        .parse()
        .map_err(|message| ApiError::BadRequest { message })
}

/// Fetch a fresh snapshot restricted to one month
async fn month_snapshot(
    state: &AppState,
    month: Month,
) -> Result<Vec<TransactionRecord>, ApiError> {
    let records = state.source.fetch().await?;
    Ok(TransactionFilter::ByMonth(month).apply(&records))
}

async fn statistics_for(state: &AppState, month: Month) -> Result<Statistics, ApiError> {
    Ok(monthly_statistics(&month_snapshot(state, month).await?))
}

async fn price_range_for(
    state: &AppState,
    month: Month,
) -> Result<Vec<PriceRangeBucket>, ApiError> {
    Ok(price_range_histogram(&month_snapshot(state, month).await?))
}

async fn pie_chart_for(state: &AppState, month: Month) -> Result<Vec<CategoryCount>, ApiError> {
    Ok(category_breakdown(&month_snapshot(state, month).await?))
}

/// Get sales statistics for one month (JSON API)
pub async fn api_statistics(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<Statistics>, ApiError> {
    let month = parse_month(&month)?;
    Ok(Json(statistics_for(&state, month).await?))
}

/// Get the price-range histogram for one month (JSON API)
pub async fn api_price_range(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<Vec<PriceRangeBucket>>, ApiError> {
    let month = parse_month(&month)?;
    Ok(Json(price_range_for(&state, month).await?))
}

/// Get category counts for one month (JSON API)
pub async fn api_pie_chart(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<Vec<CategoryCount>>, ApiError> {
    let month = parse_month(&month)?;
    Ok(Json(pie_chart_for(&state, month).await?))
}

/// Get the combined dashboard payload for one month (JSON API)
///
/// The four constituents are computed from independent snapshots fetched
/// concurrently. If any fetch fails the whole response fails.
pub async fn api_combined_data(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<CombinedData>, ApiError> {
    let month = parse_month(&month)?;

    let (transactions, statistics, price_range, pie_chart) = tokio::try_join!(
        month_snapshot(&state, month),
        statistics_for(&state, month),
        price_range_for(&state, month),
        pie_chart_for(&state, month),
    )?;

    Ok(Json(CombinedData {
        transactions,
        statistics,
        price_range,
        pie_chart,
    }))
}
