use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

use crate::error::{JotError, Result};
use crate::store::{is_note_key, NoteStore};

/// S3-backed note store. One object per note in a single bucket.
#[derive(Clone)]
pub struct S3NoteStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3NoteStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl NoteStore for S3NoteStore {
    async fn put(&self, key: &str, content: &[u8]) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(content.to_vec()))
            .send()
            .await
            .map_err(|e| JotError::Store(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }

    async fn list_keys(&self) -> Result<Vec<String>> {
        // Single listing page only; continuation tokens are not followed.
        let response = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| JotError::Store(DisplayErrorContext(&e).to_string()))?;

        Ok(response
            .contents()
            .iter()
            .filter_map(|object| object.key())
            .filter(|key| is_note_key(key))
            .map(str::to_owned)
            .collect())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| JotError::Store(DisplayErrorContext(&e).to_string()))?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| JotError::Store(format!("Failed to read object body: {e}")))?;

        Ok(data.into_bytes().to_vec())
    }

    async fn check_access(&self) -> Result<()> {
        self.client
            .list_buckets()
            .send()
            .await
            .map_err(|e| JotError::Store(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }
}
