use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use deedflow_core::markets::Market;

use crate::{error::ApiResult, main_lib::AppState};

async fn list_markets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Market>>> {
    let markets = state.market_service.get_markets()?;
    Ok(Json(markets))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/markets", get(list_markets))
}
