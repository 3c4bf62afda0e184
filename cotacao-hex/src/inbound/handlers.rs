//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use cotacao_types::{AppError, QuoteSource, QuoteStore};

use crate::QuoteService;

/// Application state shared across handlers.
pub struct AppState<S: QuoteSource, P: QuoteStore> {
    pub service: QuoteService<S, P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The full failure detail stays in the log; the wire body is a
        // generic per-stage message so upstream failure reasons never
        // leak to the client.
        let body = match &self.0 {
            AppError::Fetch(_) => "failed to fetch quote",
            AppError::Store(_) => "failed to persist quote",
        };

        tracing::error!(error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Serves the current quote as `{"bid": "<value>"}`.
///
/// Success is 200 with the JSON quote; any fetch or store failure is a
/// generic 500. Axum serializes the body before the status line goes out,
/// so a 200 can never be followed by a partial body.
#[tracing::instrument(skip(state))]
pub async fn cotacao<S: QuoteSource, P: QuoteStore>(
    State(state): State<Arc<AppState<S, P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let quote = state.service.cotacao().await?;
    Ok(Json(quote))
}
