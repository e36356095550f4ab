use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use deedflow_core::portfolio::performance::PortfolioMetrics;
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct ComparisonQuery {
    ids: Option<String>,
}

/// Parses a comma-separated id list. Every entry must be an integer.
fn parse_ids(raw: Option<&str>) -> ApiResult<Vec<i64>> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ApiError::BadRequest(
            "Query parameter 'ids' is required".to_string(),
        ));
    }
    raw.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i64>()
                .map_err(|_| ApiError::BadRequest(format!("Invalid portfolio id '{}'", part)))
        })
        .collect()
}

async fn compare_portfolios(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ComparisonQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Option<PortfolioMetrics>>>> {
    let Query(query) = query?;
    let ids = parse_ids(query.ids.as_deref())?;
    let metrics = state.portfolio_service.compare_metrics(&ids)?;
    Ok(Json(metrics))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/metrics/comparison", get(compare_portfolios))
}
