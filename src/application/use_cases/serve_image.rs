use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::application::ports::{CodecError, ImageCodec, ImageStore, StoreError};
use crate::domain::value_objects::ContentKey;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("storage error: {0}")]
    Store(StoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ServeError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(key) => ServeError::NotFound(key),
            other => ServeError::Store(other),
        }
    }
}

impl From<CodecError> for ServeError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Decode(msg) => ServeError::Decode(msg),
            CodecError::Encode(msg) => ServeError::Encode(msg),
        }
    }
}

/// Use case: retrieve a stored image by content key.
///
/// No resize and no annotation happen on this path; `render` only
/// normalizes the stored bytes into the canonical serving format.
pub struct ServeImageUseCase {
    codec: Arc<dyn ImageCodec>,
    store: Arc<dyn ImageStore>,
}

impl ServeImageUseCase {
    pub fn new(codec: Arc<dyn ImageCodec>, store: Arc<dyn ImageStore>) -> Self {
        Self { codec, store }
    }

    /// Raw stored bytes, exactly as the ingest pipeline wrote them.
    pub async fn fetch(&self, key: &ContentKey) -> Result<Vec<u8>, ServeError> {
        Ok(self.store.get(key).await?)
    }

    /// Stored bytes decoded and re-encoded into the canonical format.
    pub async fn render(&self, key: &ContentKey) -> Result<Vec<u8>, ServeError> {
        let stored = self.store.get(key).await?;
        debug!(%key, bytes = stored.len(), "rendering stored image");

        let codec = Arc::clone(&self.codec);
        tokio::task::spawn_blocking(move || -> Result<Vec<u8>, ServeError> {
            let image = codec.decode(&stored)?;
            Ok(codec.encode(&image)?)
        })
        .await
        .map_err(|e| ServeError::Internal(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockImageCodec, MockImageStore};
    use image::DynamicImage;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_fetch_returns_stored_bytes() {
        let mock_codec = MockImageCodec::new();
        let mut mock_store = MockImageStore::new();

        let key = ContentKey::of(b"stored");
        mock_store
            .expect_get()
            .times(1)
            .returning(|_| Ok(b"stored".to_vec()));

        let use_case = ServeImageUseCase::new(Arc::new(mock_codec), Arc::new(mock_store));

        let bytes = use_case.fetch(&key).await.unwrap();
        assert_eq!(bytes, b"stored");
    }

    #[tokio::test]
    async fn test_fetch_unknown_key_is_not_found() {
        let mock_codec = MockImageCodec::new();
        let mut mock_store = MockImageStore::new();

        let key = ContentKey::of(b"missing");
        let key_str = key.to_string();
        mock_store
            .expect_get()
            .times(1)
            .returning(move |_| Err(StoreError::NotFound(key_str.clone())));

        let use_case = ServeImageUseCase::new(Arc::new(mock_codec), Arc::new(mock_store));

        let result = use_case.fetch(&key).await;
        assert!(matches!(result, Err(ServeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_render_decodes_and_reencodes() {
        let mut mock_codec = MockImageCodec::new();
        let mut mock_store = MockImageStore::new();

        mock_store
            .expect_get()
            .times(1)
            .returning(|_| Ok(b"stored".to_vec()));
        mock_codec
            .expect_decode()
            .withf(|bytes| bytes == b"stored")
            .times(1)
            .returning(|_| Ok(DynamicImage::new_rgb8(10, 10)));
        mock_codec
            .expect_encode()
            .times(1)
            .returning(|_| Ok(b"canonical".to_vec()));

        let use_case = ServeImageUseCase::new(Arc::new(mock_codec), Arc::new(mock_store));

        let bytes = use_case.render(&ContentKey::of(b"x")).await.unwrap();
        assert_eq!(bytes, b"canonical");
    }

    #[tokio::test]
    async fn test_render_corrupt_record_is_decode_error() {
        let mut mock_codec = MockImageCodec::new();
        let mut mock_store = MockImageStore::new();

        mock_store
            .expect_get()
            .times(1)
            .returning(|_| Ok(b"corrupt".to_vec()));
        mock_codec
            .expect_decode()
            .times(1)
            .returning(|_| Err(CodecError::Decode("truncated".to_string())));

        let use_case = ServeImageUseCase::new(Arc::new(mock_codec), Arc::new(mock_store));

        let result = use_case.render(&ContentKey::of(b"x")).await;
        assert!(matches!(result, Err(ServeError::Decode(_))));
    }
}
