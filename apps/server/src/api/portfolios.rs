use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use deedflow_core::portfolio::{valuation::ValuationPoint, Portfolio};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

async fn list_portfolios(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Portfolio>>> {
    let portfolios = state.portfolio_service.get_portfolios()?;
    Ok(Json(portfolios))
}

async fn get_portfolio_history(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Vec<ValuationPoint>>> {
    let Path(id) = id?;
    if state.portfolio_service.get_portfolio(id)?.is_none() {
        return Err(ApiError::NotFound(format!("Portfolio {} not found", id)));
    }
    let history = state.portfolio_service.get_portfolio_history(id)?;
    Ok(Json(history))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolios", get(list_portfolios))
        .route("/portfolios/{id}/history", get(get_portfolio_history))
}
