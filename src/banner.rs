//! The greeting shown in the banner of the transactions page.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The greeting returned to `GET` requests.
pub const BANNER_MESSAGE: &str = "Aye its backend hello!";

/// Returns the greeting as `{"message": ...}`.
pub async fn get_banner() -> Response {
    Json(json!({
        "message": BANNER_MESSAGE
    }))
    .into_response()
}

/// Rejects any method other than `GET` on the banner route.
pub async fn banner_method_not_allowed() -> Response {
    tracing::warn!("rejected non-GET request for the banner");

    let body = Json(json!({
        "Error": "invalid request method",
    }));

    (StatusCode::METHOD_NOT_ALLOWED, body).into_response()
}
