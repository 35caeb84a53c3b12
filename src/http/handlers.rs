//! Handlers for the shape REST surface.
//!
//! Each handler is a thin mapping from an HTTP operation onto the shape
//! registry. Not-found results become [`ApiError::NotFound`] with the
//! per-operation detail message.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::registry::{RegistryError, Shape};

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello world" }))
}

pub async fn list_shapes(State(state): State<AppState>) -> Json<Vec<Shape>> {
    Json(state.registry.list().await)
}

pub async fn get_shape(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Shape>, ApiError> {
    match state.registry.get(id).await {
        Ok(shape) => Ok(Json(shape)),
        Err(RegistryError::NotFound(id)) => {
            Err(ApiError::NotFound(format!("No shape with id {id} found")))
        }
    }
}

pub async fn create_shape(
    State(state): State<AppState>,
    Json(shape): Json<Shape>,
) -> Json<Shape> {
    Json(state.registry.create(shape).await)
}

pub async fn update_shape(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(shape): Json<Shape>,
) -> Result<Json<Shape>, ApiError> {
    match state.registry.update(id, shape).await {
        Ok(updated) => Ok(Json(updated)),
        Err(RegistryError::NotFound(id)) => {
            Err(ApiError::NotFound(format!("No shape with id {id} found")))
        }
    }
}

pub async fn upsert_shape(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(shape): Json<Shape>,
) -> Json<Shape> {
    Json(state.registry.upsert(id, shape).await.into_shape())
}

pub async fn delete_shape(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    match state.registry.delete(id).await {
        Ok(()) => Ok(Json(json!({ "OK": true }))),
        // Delete's wording differs from get/update.
        Err(RegistryError::NotFound(id)) => {
            Err(ApiError::NotFound(format!("No shape with id: {id} exists")))
        }
    }
}
