//! Manual model check: invokes the configured Bedrock model with a greeting,
//! shaped for the model's family, and prints the extracted output.
//!
//! ```sh
//! cargo run --example probe_model
//! ```

use std::sync::Arc;

use jot::config::Config;
use jot::llm::{BedrockRuntime, CompletionOptions, InferenceGateway, ProviderFamily};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let Some(aws) = config.aws else {
        anyhow::bail!(
            "AWS credentials not available. Set AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, and AWS_REGION."
        );
    };
    let Some(model_id) = aws.model_id.clone() else {
        anyhow::bail!("BEDROCK_MODEL_ID is not set.");
    };

    println!("Testing Bedrock model: {model_id}");
    println!("Region:                {}", aws.region);
    println!(
        "Detected family:       {:?}",
        ProviderFamily::from_model_id(&model_id)
    );

    let credentials = aws_sdk_s3::config::Credentials::new(
        aws.access_key_id.clone(),
        aws.secret_access_key.clone(),
        aws.session_token.clone(),
        None,
        "jot-env",
    );
    let shared = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(aws.region.clone()))
        .credentials_provider(credentials)
        .load()
        .await;

    let gateway = InferenceGateway::new(
        Arc::new(BedrockRuntime::from_shared_config(&shared)),
        model_id,
    );

    let options = CompletionOptions {
        max_tokens: 100,
        ..CompletionOptions::default()
    };
    let output = gateway
        .generate("Hello, what can you help me with today?", &options)
        .await?;

    println!("\nModel response:");
    println!("{}", "-".repeat(40));
    println!("{output}");
    println!("{}", "-".repeat(40));

    Ok(())
}
