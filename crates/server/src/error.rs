use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use shared::MarkerSizeError;

/// Ошибки обработки запроса; все превращаются в 400 с JSON-телом
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    MarkerSize(#[from] MarkerSizeError),
    #[error("invalid query: {0}")]
    Query(String),
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Query(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected request: {}", self);
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
