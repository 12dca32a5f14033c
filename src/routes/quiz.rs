use crate::config::get_config;
use crate::error::{Error, Result};
use crate::store::DEFAULT_SESSION;
use crate::AppState;
use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

#[derive(Debug, Default, Deserialize)]
pub struct GenerateQuizRequest {
    pub session_id: Option<String>,
}

/// Builds a quiz from the session's stored documents. The store is checked
/// before any call leaves the process.
pub async fn generate_quiz(
    State(state): State<AppState>,
    body: Option<Json<GenerateQuizRequest>>,
) -> Result<Json<JsonValue>> {
    let session = body
        .and_then(|Json(req)| req.session_id)
        .unwrap_or_else(|| DEFAULT_SESSION.to_string());

    let texts = state.store.snapshot(&session);
    if texts.is_empty() {
        return Err(Error::Validation("No PDF content available".to_string()));
    }

    let combined = texts.join(" ");
    let config = get_config();
    let questions = state
        .quiz_service
        .generate_quiz(&combined, config.quiz_question_count)
        .await?;

    Ok(Json(json!({ "questions": questions })))
}
