use crate::models::{ChatRequest, ChatResponse};
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use service_core::error::AppError;

/// Forward a prompt to the text provider.
///
/// The body is parsed by hand so that an empty body, a non-JSON body and a
/// body without a string `prompt` all get the same 400.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let request: ChatRequest = serde_json::from_slice(&body)
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("No prompt provided")))?;

    let text = state.text_provider.generate(&request.prompt).await.map_err(|e| {
        tracing::error!(
            model = %state.text_provider.model(),
            error = %e,
            "Text generation failed"
        );
        AppError::InternalError(anyhow::anyhow!(e.to_string()))
    })?;

    Ok(Json(ChatResponse { text }))
}
