//! AI digest handlers: summary and topic recommendations.
//!
//! Both routes read every stored note, join them with a blank line, and ask
//! the configured model for a derived string. Store failures are hard
//! errors; inference failures are soft — the caller still gets the raw
//! notes under a `warning` key and a 200.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::error::{JotError, Result};
use crate::llm::{prompts, CompletionOptions};

/// Summary payload. Callers branch on key presence: `summary` on success,
/// `warning` + `notes` when degraded. The shape asymmetry between the two
/// digest routes is part of the public contract.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum SummaryResponse {
    Ready {
        summary: String,
    },
    Degraded {
        warning: String,
        notes: Vec<String>,
    },
}

/// Recommendation payload. The degraded shape additionally names the model
/// that failed, when one was configured at all.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum RecommendationResponse {
    Ready {
        recommendation: String,
    },
    Degraded {
        warning: String,
        notes: Vec<String>,
        #[serde(rename = "modelId", skip_serializing_if = "Option::is_none")]
        model_id: Option<String>,
    },
}

/// Read every stored note. Hard-fails on store errors, 404s when the bucket
/// holds no notes at all.
async fn collect_notes(state: &AppState) -> Result<Vec<String>> {
    let store = state
        .store
        .as_ref()
        .ok_or_else(|| JotError::Config("AWS credentials not configured for S3".into()))?;

    let keys = store.list_keys().await?;
    let mut notes = Vec::with_capacity(keys.len());
    for key in keys {
        let bytes = store.get(&key).await?;
        notes.push(String::from_utf8_lossy(&bytes).into_owned());
    }

    if notes.is_empty() {
        return Err(JotError::NotFound("No content found in S3".into()));
    }

    Ok(notes)
}

/// `GET /api/summary`
#[utoipa::path(
    get,
    path = "/api/summary",
    tag = "digest",
    responses(
        (status = 200, description = "Summary of all notes, or raw notes with a warning when inference is unavailable", body = SummaryResponse),
        (status = 404, description = "No notes stored"),
        (status = 500, description = "Store unavailable or read failed"),
    )
)]
pub async fn summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>> {
    let notes = collect_notes(&state).await?;

    let Some(inference) = state.inference.as_ref() else {
        return Ok(Json(SummaryResponse::Degraded {
            warning: "Bedrock access not configured. Returning raw notes.".to_string(),
            notes,
        }));
    };

    let prompt = prompts::summary_prompt(&notes.join("\n\n"));
    match inference
        .generate(&prompt, &CompletionOptions::default())
        .await
    {
        Ok(summary) => Ok(Json(SummaryResponse::Ready { summary })),
        Err(error) => {
            tracing::warn!(error = %error, "Summary generation failed, returning raw notes");
            Ok(Json(SummaryResponse::Degraded {
                warning: format!("Error using Bedrock model: {error}"),
                notes,
            }))
        }
    }
}

/// `GET /api/recommendations`
#[utoipa::path(
    get,
    path = "/api/recommendations",
    tag = "digest",
    responses(
        (status = 200, description = "Suggested follow-up topics, or raw notes with a warning when inference is unavailable", body = RecommendationResponse),
        (status = 404, description = "No notes stored"),
        (status = 500, description = "Store unavailable or read failed"),
    )
)]
pub async fn recommendations(
    State(state): State<AppState>,
) -> Result<Json<RecommendationResponse>> {
    let notes = collect_notes(&state).await?;

    let Some(inference) = state.inference.as_ref() else {
        return Ok(Json(RecommendationResponse::Degraded {
            warning: "Bedrock access not configured or unavailable. Returning raw notes instead."
                .to_string(),
            notes,
            model_id: None,
        }));
    };

    let prompt = prompts::recommendation_prompt(&notes.join("\n\n"));
    match inference
        .generate(&prompt, &CompletionOptions::default())
        .await
    {
        Ok(recommendation) => Ok(Json(RecommendationResponse::Ready { recommendation })),
        Err(error) => {
            tracing::warn!(error = %error, model_id = %inference.model_id(), "Recommendation generation failed, returning raw notes");
            Ok(Json(RecommendationResponse::Degraded {
                warning: format!("Error using Bedrock model: {error}"),
                notes,
                model_id: Some(inference.model_id().to_string()),
            }))
        }
    }
}
