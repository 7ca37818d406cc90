//! Request handlers organized by resource.

pub mod compare;
pub mod health;
pub mod pokemon;

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// JSON error body; every error surface uses the `{"detail": …}` shape.
#[derive(Debug, Serialize)]
pub struct Detail {
    pub detail: String,
}

pub(crate) type ErrorResponse = (StatusCode, Json<Detail>);

pub(crate) fn detail(status: StatusCode, message: impl Into<String>) -> ErrorResponse {
    (
        status,
        Json(Detail {
            detail: message.into(),
        }),
    )
}

pub(crate) fn internal_error(err: rotom_core::Error) -> ErrorResponse {
    detail(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
