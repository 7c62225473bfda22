use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for JotError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            JotError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            JotError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            JotError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            JotError::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            JotError::Inference(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            JotError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, JotError>;
