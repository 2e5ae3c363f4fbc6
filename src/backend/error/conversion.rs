/**
 * Error Conversion
 *
 * `IntoResponse` for backend errors, so handlers can return them directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    response::{Response, IntoResponse},
    Json,
};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(%status, %message, "request failed");
        } else {
            tracing::debug!(%status, %message, "request rejected");
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
