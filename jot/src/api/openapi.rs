use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jot API",
        version = "0.1.0",
        description = "Note stash backed by S3, with AI study digests from Amazon Bedrock.",
    ),
    paths(
        handlers::notes::submit_note,
        handlers::notes::upload_note,
        handlers::digest::summary,
        handlers::digest::recommendations,
        handlers::diagnostics::check_config,
    ),
    components(schemas(
        handlers::notes::SubmitNoteRequest,
        handlers::notes::NoteStoredResponse,
        handlers::digest::SummaryResponse,
        handlers::digest::RecommendationResponse,
        handlers::diagnostics::ConfigStatus,
        handlers::diagnostics::StoreStatus,
        handlers::diagnostics::BedrockStatus,
    )),
    tags(
        (name = "notes", description = "Note submission and upload"),
        (name = "digest", description = "AI-generated digests of all stored notes"),
        (name = "diagnostics", description = "Configuration diagnostics"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
