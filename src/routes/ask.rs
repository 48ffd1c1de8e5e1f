// src/routes/ask.rs
use axum::{
    Json,
    body::Bytes,
    extract::State,
};
use tracing::{debug, error, info};

use crate::{
    error::AppError,
    message::{AskRequest, AskResponse},
    services::{completion::SYSTEM_PROMPT, demo::demo_reply},
    state::SharedState,
};

pub async fn ask_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<AskResponse>, AppError> {
    // Parsed regardless of content type.
    let payload: AskRequest = serde_json::from_slice(&body).map_err(|err| {
        debug!(error = %err, "rejected ask payload");
        AppError::InvalidInput
    })?;

    if payload.message.is_empty() {
        return Err(AppError::InvalidInput);
    }

    let Some(generator) = &state.generator else {
        info!("no API key configured, answering with demo reply");
        let reply = demo_reply(&payload.message).to_string();
        return Ok(Json(AskResponse { reply }));
    };

    let reply = generator
        .generate(SYSTEM_PROMPT, &payload.message)
        .await
        .map_err(|err| {
            error!(error = ?err, "completion request failed");
            AppError::UpstreamFailure
        })?;

    Ok(Json(AskResponse { reply }))
}
