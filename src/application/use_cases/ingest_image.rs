use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::application::ports::{CodecError, ImageCodec, ImageStore, StoreError};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{ContentKey, ResizePlan};

/// Images are kept under 1200 pixels on the long axis for efficient
/// downstream processing; anything larger is squeezed down to 600.
pub const MAX_DIMENSION: u32 = 1200;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("decode error: {0}")]
    Decode(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CodecError> for IngestError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Decode(msg) => IngestError::Decode(msg),
            CodecError::Encode(msg) => IngestError::Encode(msg),
        }
    }
}

/// Use case: ingest an uploaded image.
///
/// decode -> resize plan -> plan execution -> annotated re-encode ->
/// content key -> store. The store write is the final step, so a
/// failure anywhere leaves nothing persisted.
pub struct IngestImageUseCase {
    codec: Arc<dyn ImageCodec>,
    store: Arc<dyn ImageStore>,
}

impl IngestImageUseCase {
    pub fn new(codec: Arc<dyn ImageCodec>, store: Arc<dyn ImageStore>) -> Self {
        Self { codec, store }
    }

    pub async fn execute(
        &self,
        bytes: Vec<u8>,
        annotation: String,
    ) -> Result<ContentKey, IngestError> {
        // Decode, resize and re-encode are CPU-bound; keep them off the
        // async worker threads.
        let codec = Arc::clone(&self.codec);
        let encoded = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, IngestError> {
            let mut image = codec.decode(&bytes)?;

            let plan = ResizePlan::compute(image.width(), image.height(), MAX_DIMENSION)?;
            debug!(
                width = image.width(),
                height = image.height(),
                steps = plan.steps().len(),
                "computed resize plan"
            );
            for step in plan.steps() {
                image = codec.apply(image, step);
            }

            Ok(codec.encode_annotated(&image, &annotation)?)
        })
        .await
        .map_err(|e| IngestError::Internal(e.to_string()))??;

        let key = ContentKey::of(&encoded);
        self.store.put(&key, &encoded).await?;

        debug!(%key, bytes = encoded.len(), "image ingested");
        Ok(key)
    }
}
