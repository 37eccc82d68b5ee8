use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use service::item::{Item, ItemInput, ItemStore};

use crate::errors::ApiError;

/// Body extraction with an explicit rejection so malformed or missing JSON
/// becomes a uniform 400 `{"error": ...}` instead of axum's default 415/422.
fn decode(payload: Result<Json<ItemInput>, JsonRejection>) -> Result<ItemInput, ApiError> {
    let Json(input) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    Ok(input)
}

pub async fn list(State(store): State<ItemStore>) -> Json<Vec<Item>> {
    let items = store.list().await;
    info!(count = items.len(), "list items");
    Json(items)
}

pub async fn get(
    State(store): State<ItemStore>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    match store.get(&id).await {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found("Item not found")),
    }
}

pub async fn create(
    State(store): State<ItemStore>,
    payload: Result<Json<ItemInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let input = decode(payload)?;
    let item = store.create(input).await?;
    info!(id = %item.id, name = %item.name, "created item");
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update(
    State(store): State<ItemStore>,
    Path(id): Path<String>,
    payload: Result<Json<ItemInput>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let input = decode(payload)?;
    let item = store.update(&id, input).await?;
    info!(id = %item.id, "updated item");
    Ok(Json(item))
}

pub async fn delete(
    State(store): State<ItemStore>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    store.delete(&id).await?;
    info!(%id, "deleted item");
    Ok(Json(json!({ "message": "Item deleted successfully" })))
}
