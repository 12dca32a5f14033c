use crate::error::{Error, Result};
use crate::pdf;
use crate::store::DEFAULT_SESSION;
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::{json, Value as JsonValue};

/// Accepts a multipart batch of PDF files, extracts their text and replaces
/// the session's stored batch with the results.
///
/// Files that are not PDFs, fail extraction or yield only whitespace are
/// skipped with a warning rather than aborting the batch. The store is only
/// touched when at least one file yielded usable text.
pub async fn upload_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<JsonValue>> {
    let mut session = DEFAULT_SESSION.to_string();
    let mut texts: Vec<String> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();

        if field_name == "session" {
            let value = field.text().await.unwrap_or_default();
            if !value.is_empty() {
                session = value;
            }
            continue;
        }

        let Some(filename) = field.file_name().map(|f| f.to_string()) else {
            continue;
        };

        if !filename.to_ascii_lowercase().ends_with(".pdf") {
            tracing::warn!("Skipping non-PDF upload: {}", filename);
            continue;
        }

        let data: bytes::Bytes = field.bytes().await?;
        if data.is_empty() {
            tracing::warn!("Skipping empty upload: {}", filename);
            continue;
        }

        // pdf-extract is CPU-bound, keep it off the async workers.
        let extracted = tokio::task::spawn_blocking(move || pdf::extract_text(&data))
            .await
            .map_err(|e| Error::Internal(format!("Extraction task failed: {}", e)))?;

        match extracted {
            Ok(text) if !text.trim().is_empty() => texts.push(text),
            Ok(_) => tracing::warn!("No extractable text in {}", filename),
            Err(e) => tracing::warn!("Failed to extract text from {}: {}", filename, e),
        }
    }

    if texts.is_empty() {
        return Err(Error::Validation(
            "No valid PDF content found in uploaded files".to_string(),
        ));
    }

    let count = texts.len();
    state.store.replace(&session, texts);
    tracing::info!("Stored {} document(s) for session {}", count, session);

    Ok(Json(json!({
        "message": format!("Successfully uploaded {} files", count),
        "session_id": session,
    })))
}
