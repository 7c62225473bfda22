//! Bedrock-backed inference gateway.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{JotError, Result};
use crate::llm::provider::{CompletionOptions, ProviderFamily};

/// Transport-level access to the model service. Implemented by the real
/// Bedrock clients and by in-memory fakes in tests.
#[async_trait]
pub trait ModelRuntime: Send + Sync {
    /// One synchronous invocation; no retry, no streaming.
    async fn invoke(&self, model_id: &str, body: &Value) -> Result<Value>;

    /// Model identifiers visible in the service catalog.
    async fn catalog(&self) -> Result<Vec<String>>;
}

/// The real thing: `bedrock-runtime` for invocations, `bedrock` for the
/// catalog listing used by diagnostics.
pub struct BedrockRuntime {
    runtime: aws_sdk_bedrockruntime::Client,
    control: aws_sdk_bedrock::Client,
}

impl BedrockRuntime {
    pub fn new(
        runtime: aws_sdk_bedrockruntime::Client,
        control: aws_sdk_bedrock::Client,
    ) -> Self {
        Self { runtime, control }
    }

    pub fn from_shared_config(shared: &aws_config::SdkConfig) -> Self {
        Self::new(
            aws_sdk_bedrockruntime::Client::new(shared),
            aws_sdk_bedrock::Client::new(shared),
        )
    }
}

#[async_trait]
impl ModelRuntime for BedrockRuntime {
    async fn invoke(&self, model_id: &str, body: &Value) -> Result<Value> {
        let payload = serde_json::to_vec(body)?;

        let response = self
            .runtime
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(aws_sdk_bedrockruntime::primitives::Blob::new(payload))
            .send()
            .await
            .map_err(|e| {
                JotError::Inference(
                    aws_sdk_bedrockruntime::error::DisplayErrorContext(&e).to_string(),
                )
            })?;

        serde_json::from_slice(response.body.as_ref())
            .map_err(|e| JotError::Inference(format!("Failed to parse model response: {e}")))
    }

    async fn catalog(&self) -> Result<Vec<String>> {
        let response = self
            .control
            .list_foundation_models()
            .send()
            .await
            .map_err(|e| {
                JotError::Inference(aws_sdk_bedrock::error::DisplayErrorContext(&e).to_string())
            })?;

        Ok(response
            .model_summaries()
            .iter()
            .map(|summary| summary.model_id().to_string())
            .collect())
    }
}

/// Façade over the model runtime for a single configured model.
///
/// Composes the payload adapter with the transport: shape the request for
/// the model's family, invoke, and pull the generated text back out of the
/// family's response envelope.
#[derive(Clone)]
pub struct InferenceGateway {
    runtime: Arc<dyn ModelRuntime>,
    model_id: String,
}

impl InferenceGateway {
    pub fn new(runtime: Arc<dyn ModelRuntime>, model_id: impl Into<String>) -> Self {
        Self {
            runtime,
            model_id: model_id.into(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn family(&self) -> ProviderFamily {
        ProviderFamily::from_model_id(&self.model_id)
    }

    /// One full round-trip: build, invoke, extract.
    pub async fn generate(&self, prompt: &str, options: &CompletionOptions) -> Result<String> {
        let family = self.family();
        let body = family.build_request(prompt, options);

        tracing::debug!(model_id = %self.model_id, family = ?family, "Invoking model");
        let response = self.runtime.invoke(&self.model_id, &body).await?;

        Ok(family.extract_output(&response))
    }

    /// Minimal invocation used by the config check when the catalog listing
    /// is not permitted for the caller's credentials.
    pub async fn probe(&self) -> Result<()> {
        let options = CompletionOptions {
            max_tokens: 10,
            ..CompletionOptions::default()
        };
        let body = self.family().build_request("Hello", &options);
        self.runtime.invoke(&self.model_id, &body).await.map(|_| ())
    }

    pub async fn catalog(&self) -> Result<Vec<String>> {
        self.runtime.catalog().await
    }
}
