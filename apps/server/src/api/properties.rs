use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use deedflow_core::properties::{NewProperty, Property, PropertyDetail};

use crate::{error::ApiResult, main_lib::AppState};

async fn list_properties(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Property>>> {
    let properties = state.property_service.get_properties()?;
    Ok(Json(properties))
}

async fn get_property(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<PropertyDetail>> {
    let Path(id) = id?;
    let detail = state.property_service.get_property_detail(id)?;
    Ok(Json(detail))
}

async fn create_property(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewProperty>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Property>)> {
    let Json(payload) = payload?;
    let created = state.property_service.create_property(payload).await?;
    tracing::info!("Created property {} ({})", created.id, created.name);
    Ok((StatusCode::CREATED, Json(created)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/properties", get(list_properties).post(create_property))
        .route("/properties/{id}", get(get_property))
}
