use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use deedflow_core::{properties::Property, users::UserProfile};
use serde::Serialize;

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
struct WatchlistResponse {
    watchlist: Vec<i64>,
}

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<AuthUser>,
) -> ApiResult<Json<UserProfile>> {
    let user = state.user_service.get_user(&caller.id)?;
    Ok(Json(user.profile()))
}

async fn get_watchlist(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Property>>> {
    let properties = state.user_service.get_watchlist(&caller.id)?;
    Ok(Json(properties))
}

async fn add_to_watchlist(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<AuthUser>,
    property_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<WatchlistResponse>> {
    let Path(property_id) = property_id?;
    let watchlist = state
        .user_service
        .add_to_watchlist(&caller.id, property_id)
        .await?;
    Ok(Json(WatchlistResponse { watchlist }))
}

async fn remove_from_watchlist(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<AuthUser>,
    property_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<WatchlistResponse>> {
    let Path(property_id) = property_id?;
    let watchlist = state
        .user_service
        .remove_from_watchlist(&caller.id, property_id)
        .await?;
    Ok(Json(WatchlistResponse { watchlist }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/user/profile", get(get_profile))
        .route("/user/watchlist", get(get_watchlist))
        .route(
            "/user/watchlist/{property_id}",
            post(add_to_watchlist).delete(remove_from_watchlist),
        )
}
