pub mod classify;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{config::CorsConfig, error::AppError, AppState};

pub fn router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/api/classify-number", get(classify::classify_number))
        .fallback(not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors.layer())
                .layer(CompressionLayer::new()),
        )
}

async fn not_found() -> AppError {
    AppError::NotFound
}
