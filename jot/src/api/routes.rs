use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use super::{frontend, handlers, openapi, AppState};

const MAX_BODY_BYTES: usize = 25 * 1024 * 1024; // 25 MB

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/submit-note", post(handlers::notes::submit_note))
        .route("/upload", post(handlers::notes::upload_note))
        .route("/summary", get(handlers::digest::summary))
        .route("/recommendations", get(handlers::digest::recommendations))
        .route("/check-config", get(handlers::diagnostics::check_config))
        .route("/openapi.json", get(openapi::openapi_json))
        .merge(openapi::redoc_router());

    Router::new()
        .nest("/api", api)
        .route("/", get(frontend::serve_root))
        .route("/{*path}", get(frontend::serve_path))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
