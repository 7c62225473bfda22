use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jot::api::{create_router, AppState};
use jot::config::Config;
use jot::llm::{BedrockRuntime, InferenceGateway};
use jot::store::{S3NoteStore, SharedNoteStore};

#[derive(Parser)]
#[command(name = "jot")]
#[command(about = "Note stash with AI study digests")]
struct Args {
    /// Bind address override (defaults to JOT_HOST / 0.0.0.0)
    #[arg(long)]
    host: Option<String>,

    /// Port override (defaults to JOT_PORT / 3000)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jot=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let (store, inference) = match &config.aws {
        Some(aws) => {
            tracing::info!(
                region = %aws.region,
                session_token = aws.session_token.is_some(),
                "Initializing AWS clients..."
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

            let store: Option<SharedNoteStore> = match &aws.bucket {
                Some(bucket) => {
                    tracing::info!(bucket = %bucket, "Note storage enabled");
                    Some(Arc::new(S3NoteStore::new(
                        aws_sdk_s3::Client::new(&shared),
                        bucket.clone(),
                    )))
                }
                None => {
                    tracing::warn!("S3_BUCKET_NAME is not set — note storage is disabled");
                    None
                }
            };

            let inference = match &aws.model_id {
                Some(model_id) => {
                    tracing::info!(model_id = %model_id, "Inference enabled");
                    Some(InferenceGateway::new(
                        Arc::new(BedrockRuntime::from_shared_config(&shared)),
                        model_id.clone(),
                    ))
                }
                None => {
                    tracing::warn!("BEDROCK_MODEL_ID is not set — digests will return raw notes");
                    None
                }
            };

            (store, inference)
        }
        None => {
            tracing::warn!(
                "AWS credentials not available. Set AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, and AWS_REGION."
            );
            (None, None)
        }
    };

    let state = AppState::new(config.clone(), store, inference);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Jot starting on http://{}", addr);
    tracing::info!("  Config check: http://{}/api/check-config", addr);
    tracing::info!("  API docs:     http://{}/api/docs", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
