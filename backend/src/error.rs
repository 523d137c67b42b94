use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Failures that surface as HTTP errors. Classification outcomes, including
/// malformed numbers, never travel through here; they are regular 200 bodies.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
