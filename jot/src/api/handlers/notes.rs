//! Note submission handlers.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::error::{JotError, Result};
use crate::store::{fresh_note_key, is_note_key, SharedNoteStore};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SubmitNoteRequest {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct NoteStoredResponse {
    pub message: String,
}

fn require_store(state: &AppState) -> Result<&SharedNoteStore> {
    state
        .store
        .as_ref()
        .ok_or_else(|| JotError::Config("AWS credentials not configured".into()))
}

/// `POST /api/submit-note`
///
/// Stores the submitted text as a single note object under a generated key.
#[utoipa::path(
    post,
    path = "/api/submit-note",
    tag = "notes",
    request_body = SubmitNoteRequest,
    responses(
        (status = 200, description = "Note stored", body = NoteStoredResponse),
        (status = 400, description = "Empty content"),
        (status = 500, description = "Store unavailable or write failed"),
    )
)]
pub async fn submit_note(
    State(state): State<AppState>,
    Json(req): Json<SubmitNoteRequest>,
) -> Result<Json<NoteStoredResponse>> {
    let store = require_store(&state)?;

    let content = req.content.trim();
    if content.is_empty() {
        return Err(JotError::Validation("No content provided".into()));
    }

    let key = fresh_note_key();
    store.put(&key, content.as_bytes()).await?;
    tracing::info!(key = %key, bytes = content.len(), "Note stored");

    Ok(Json(NoteStoredResponse {
        message: "Note submitted successfully".to_string(),
    }))
}

/// `POST /api/upload`
///
/// Multipart upload of a prepared note file. The original filename becomes
/// the storage key, so re-uploading a file overwrites the previous version.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "notes",
    request_body(content_type = "multipart/form-data", content = String, description = "Form with a single `file` field; the filename must end in .txt"),
    responses(
        (status = 200, description = "File stored", body = NoteStoredResponse),
        (status = 400, description = "Missing file or wrong extension"),
        (status = 500, description = "Store unavailable or write failed"),
    )
)]
pub async fn upload_note(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<NoteStoredResponse>> {
    let store = require_store(&state)?;

    let mut file_name: Option<String> = None;
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        if !is_note_key(&name) {
            return Err(JotError::Validation("Only .txt files are allowed".into()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| JotError::Validation(format!("Failed to read file: {e}")))?;

        file_name = Some(name);
        file_bytes = Some(bytes.to_vec());
    }

    let (key, bytes) = match (file_name, file_bytes) {
        (Some(key), Some(bytes)) => (key, bytes),
        _ => return Err(JotError::Validation("Only .txt files are allowed".into())),
    };

    store.put(&key, &bytes).await?;
    tracing::info!(key = %key, bytes = bytes.len(), "Note file uploaded");

    Ok(Json(NoteStoredResponse {
        message: "File uploaded successfully".to_string(),
    }))
}
