//! Request/response shaping for Bedrock model families.
//!
//! Every foundation-model family behind the `InvokeModel` API speaks its own
//! JSON dialect: field names, nesting, and sampling-parameter spelling all
//! differ. The family is derived from the model identifier and dispatched
//! exhaustively; identifiers that match no known family get a generic
//! prompt/max_tokens shape on the way in and a raw JSON dump on the way out.

use serde_json::{json, Value};

/// Returned when a response envelope is missing the expected output path.
pub const MISSING_OUTPUT: &str = "No summary/recommendation provided";

/// Sampling parameters applied to an invocation.
///
/// `top_p` is only serialized for families that take a nucleus-sampling
/// parameter.
#[derive(Debug, Clone)]
pub struct CompletionOptions {
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: 1000,
            temperature: 0.5,
            top_p: 0.9,
        }
    }
}

/// Known Bedrock model families, plus a generic fallback for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderFamily {
    Anthropic,
    Amazon,
    Ai21,
    Cohere,
    Meta,
    Generic,
}

impl ProviderFamily {
    /// Derive the family from a model identifier such as
    /// `anthropic.claude-3-haiku-20240307-v1:0`.
    ///
    /// The segment before the first `.` is lower-cased and matched by
    /// containment against the known tags, in a fixed order. Anything else
    /// (including region-prefixed identifiers like `us.anthropic...`) falls
    /// back to [`ProviderFamily::Generic`]; an unknown provider is never an
    /// error.
    pub fn from_model_id(model_id: &str) -> Self {
        let tag = model_id
            .split('.')
            .next()
            .unwrap_or(model_id)
            .to_lowercase();

        if tag.contains("anthropic") {
            Self::Anthropic
        } else if tag.contains("amazon") {
            Self::Amazon
        } else if tag.contains("ai21") {
            Self::Ai21
        } else if tag.contains("cohere") {
            Self::Cohere
        } else if tag.contains("meta") {
            Self::Meta
        } else {
            Self::Generic
        }
    }

    /// Build the request body this family's models expect.
    pub fn build_request(&self, prompt: &str, options: &CompletionOptions) -> Value {
        match self {
            Self::Anthropic => json!({
                "anthropic_version": "bedrock-2023-05-31",
                "max_tokens": options.max_tokens,
                "messages": [{ "role": "user", "content": prompt }],
                "temperature": options.temperature,
            }),
            Self::Amazon => json!({
                "inputText": prompt,
                "textGenerationConfig": {
                    "maxTokenCount": options.max_tokens,
                    "temperature": options.temperature,
                    "topP": options.top_p,
                },
            }),
            Self::Ai21 => json!({
                "prompt": prompt,
                "maxTokens": options.max_tokens,
                "temperature": options.temperature,
                "topP": options.top_p,
            }),
            Self::Cohere => json!({
                "prompt": prompt,
                "max_tokens": options.max_tokens,
                "temperature": options.temperature,
            }),
            Self::Meta => json!({
                "prompt": prompt,
                "max_gen_len": options.max_tokens,
                "temperature": options.temperature,
                "top_p": options.top_p,
            }),
            Self::Generic => json!({
                "prompt": prompt,
                "max_tokens": options.max_tokens,
                "temperature": options.temperature,
            }),
        }
    }

    /// Pull the generated text out of this family's response envelope.
    ///
    /// Each family nests the output at a different path. A missing path
    /// yields [`MISSING_OUTPUT`] rather than an error; generic responses are
    /// returned as their raw JSON serialization, so callers of untyped
    /// models see the whole envelope.
    pub fn extract_output(&self, body: &Value) -> String {
        let text = match self {
            Self::Anthropic => body
                .get("content")
                .and_then(|content| content.get(0))
                .and_then(|block| block.get("text"))
                .and_then(Value::as_str),
            Self::Amazon => body
                .get("results")
                .and_then(|results| results.get(0))
                .and_then(|result| result.get("outputText"))
                .and_then(Value::as_str),
            Self::Ai21 => body
                .get("completions")
                .and_then(|completions| completions.get(0))
                .and_then(|completion| completion.get("data"))
                .and_then(|data| data.get("text"))
                .and_then(Value::as_str),
            Self::Cohere => body.get("text").and_then(Value::as_str),
            Self::Meta => body.get("generation").and_then(Value::as_str),
            Self::Generic => return body.to_string(),
        };

        text.map(str::to_owned)
            .unwrap_or_else(|| MISSING_OUTPUT.to_string())
    }
}
