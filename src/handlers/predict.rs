//! Prediction handler

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::{AppError, AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub url: String,
    pub result: String,
}

/// Classify one URL.
///
/// The body is taken as raw JSON so each validation failure gets its own
/// message: non-JSON body, missing `url` key, non-string value, empty value.
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(body) = body
        .map_err(|_| AppError::ValidationError("No JSON data provided".to_string()))?;

    let url = body
        .get("url")
        .ok_or_else(|| AppError::ValidationError("URL parameter is required".to_string()))?;

    let url = url.as_str().ok_or_else(|| {
        AppError::ValidationError("Invalid data format: url must be a string".to_string())
    })?;

    if url.trim().is_empty() {
        return Err(AppError::ValidationError("URL cannot be empty".to_string()));
    }

    let result = state.pipeline.predict(url);
    tracing::debug!("Classified {} as {}", url, result);

    Ok(Json(PredictResponse {
        url: url.to_string(),
        result: result.to_string(),
    }))
}
