//! Manual credential check: builds the same AWS session the server uses,
//! then lists buckets and any stored notes.
//!
//! ```sh
//! cargo run --example check_credentials
//! ```

use std::sync::Arc;

use jot::config::Config;
use jot::store::{NoteStore, S3NoteStore, SharedNoteStore};

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

    println!("Access key length:    {}", aws.access_key_id.len());
    println!("Secret key length:    {}", aws.secret_access_key.len());
    println!(
        "Session token length: {}",
        aws.session_token.as_deref().map(str::len).unwrap_or(0)
    );
    println!("Region:               {}", aws.region);

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
    let client = aws_sdk_s3::Client::new(&shared);

    println!("\nTesting S3 access...");
    let buckets = client.list_buckets().send().await?;
    println!("S3 access successful. Buckets:");
    for bucket in buckets.buckets() {
        println!("- {}", bucket.name().unwrap_or("<unnamed>"));
    }

    if let Some(bucket) = aws.bucket {
        let store: SharedNoteStore = Arc::new(S3NoteStore::new(client, bucket.clone()));
        let keys = store.list_keys().await?;
        println!("\nNotes in {bucket}: {}", keys.len());
        for key in keys {
            println!("- {key}");
        }
    } else {
        println!("\nS3_BUCKET_NAME is not set; skipping note listing.");
    }

    Ok(())
}
