//! Configuration diagnostics.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ConfigStatus {
    pub s3: StoreStatus,
    pub bedrock: BedrockStatus,
    pub region: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct StoreStatus {
    pub configured: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct BedrockStatus {
    pub configured: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_models: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_access: Option<bool>,
}

/// `GET /api/check-config`
///
/// Best-effort reachability report for both gateways. Always 200; with
/// unchanged configuration, repeated calls return the same verdicts.
#[utoipa::path(
    get,
    path = "/api/check-config",
    tag = "diagnostics",
    responses(
        (status = 200, description = "Configuration status for store and inference", body = ConfigStatus),
    )
)]
pub async fn check_config(State(state): State<AppState>) -> Json<ConfigStatus> {
    let region = state.config.aws.as_ref().map(|aws| aws.region.clone());

    let s3 = match &state.store {
        None => StoreStatus {
            configured: false,
            message: "Not initialized".to_string(),
            bucket: None,
        },
        Some(store) => match store.check_access().await {
            Ok(()) => StoreStatus {
                configured: true,
                message: "S3 access confirmed".to_string(),
                bucket: state.config.aws.as_ref().and_then(|aws| aws.bucket.clone()),
            },
            Err(error) => StoreStatus {
                configured: false,
                message: format!("S3 error: {error}"),
                bucket: None,
            },
        },
    };

    let bedrock = match &state.inference {
        None => BedrockStatus {
            configured: false,
            message: "Not initialized".to_string(),
            requested_model: None,
            available_models: None,
            model_access: None,
        },
        Some(inference) => {
            let requested_model = inference.model_id().to_string();
            match inference.catalog().await {
                Ok(models) => {
                    let model_access = models.iter().any(|id| id == &requested_model);
                    BedrockStatus {
                        configured: true,
                        message: "Bedrock access confirmed".to_string(),
                        requested_model: Some(requested_model),
                        available_models: Some(models),
                        model_access: Some(model_access),
                    }
                }
                // Some credentials may invoke models without being allowed
                // to list the catalog; fall back to a minimal invocation.
                Err(_) => match inference.probe().await {
                    Ok(()) => BedrockStatus {
                        configured: true,
                        message: "Bedrock model access confirmed".to_string(),
                        requested_model: Some(requested_model),
                        available_models: None,
                        model_access: Some(true),
                    },
                    Err(error) => BedrockStatus {
                        configured: false,
                        message: format!("Bedrock model error: {error}"),
                        requested_model: Some(requested_model),
                        available_models: None,
                        model_access: None,
                    },
                },
            }
        }
    };

    Json(ConfigStatus { s3, bedrock, region })
}
