use crate::models::{HistoryResponse, SaveHistoryRequest, SaveHistoryResponse};
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use service_core::error::AppError;

pub async fn get_history(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let history = state.history.load().await.map_err(|e| {
        tracing::error!(
            path = %state.history.path().display(),
            error = %e,
            "Failed to load history"
        );
        AppError::InternalError(anyhow::anyhow!(e.to_string()))
    })?;

    Ok(Json(HistoryResponse { history }))
}

pub async fn save_history(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let request: SaveHistoryRequest = serde_json::from_slice(&body).map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Invalid history payload: {}", e))
    })?;

    state.history.save(&request.history).await.map_err(|e| {
        tracing::error!(
            path = %state.history.path().display(),
            error = %e,
            "Failed to save history"
        );
        AppError::InternalError(anyhow::anyhow!(e.to_string()))
    })?;

    Ok(Json(SaveHistoryResponse { success: true }))
}
