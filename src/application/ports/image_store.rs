use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use thiserror::Error;

use crate::domain::value_objects::ContentKey;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no image stored under key {0}")]
    NotFound(String),

    #[error("internal storage error: {0}")]
    Internal(String),
}

/// Port for the key-value persistence of encoded images.
///
/// Writes keyed by content address are idempotent: putting the same key
/// again carries the same bytes by construction.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn put(&self, key: &ContentKey, bytes: &[u8]) -> Result<(), StoreError>;

    async fn get(&self, key: &ContentKey) -> Result<Vec<u8>, StoreError>;
}
