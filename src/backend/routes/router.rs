/**
 * Router Configuration
 *
 * Assembles the `users` resource routes into one axum router.
 *
 * # Routes
 *
 * - `GET /users`, `POST /users`
 * - `GET /users/{id}`, `PUT /users/{id}`, `PATCH /users/{id}`, `DELETE /users/{id}`
 *
 * Every response passes through a permissive CORS layer and an HTTP trace
 * layer.
 */

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::server::state::AppState;
use crate::backend::users::handlers::{
    create_user, delete_user, get_user, list_users, merge_user, replace_user,
};

pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user)
                .put(replace_user)
                .patch(merge_user)
                .delete(delete_user),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
