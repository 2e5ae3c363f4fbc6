//! HTTP handlers for the `users` resource.
//!
//! - `GET /users` - all users, in insertion order
//! - `POST /users` - create; the server assigns the id (201)
//! - `GET /users/{id}` - one user
//! - `PUT /users/{id}` - replace all three attributes
//! - `PATCH /users/{id}` - merge the attributes present in the body
//! - `DELETE /users/{id}` - remove; responds with `{}`
//!
//! Unreadable bodies are answered with the usual JSON error body.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::users::table::require_attributes;
use crate::shared::{User, UserPatch};

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    let table = state.users.read().await;
    Json(table.all().to_vec())
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, BackendError> {
    let table = state.users.read().await;
    table
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| BackendError::not_found(id))
}

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<UserPatch>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), BackendError> {
    let Json(body) = body?;
    let attributes = require_attributes(body)?;
    let user = state.users.write().await.insert(attributes)?;
    tracing::info!(id = %user.id, name = %user.name, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn replace_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UserPatch>, JsonRejection>,
) -> Result<Json<User>, BackendError> {
    let Json(body) = body?;
    let attributes = require_attributes(body)?;
    let user = state
        .users
        .write()
        .await
        .replace(&id, attributes)
        .ok_or_else(|| BackendError::not_found(&id))?;
    tracing::info!(%id, "user replaced");
    Ok(Json(user))
}

pub async fn merge_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UserPatch>, JsonRejection>,
) -> Result<Json<User>, BackendError> {
    let Json(body) = body?;
    let user = state
        .users
        .write()
        .await
        .merge(&id, &body)
        .ok_or_else(|| BackendError::not_found(&id))?;
    tracing::info!(%id, "user merged");
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, BackendError> {
    state
        .users
        .write()
        .await
        .remove(&id)
        .ok_or_else(|| BackendError::not_found(&id))?;
    tracing::info!(%id, "user deleted");
    Ok(Json(serde_json::json!({})))
}
