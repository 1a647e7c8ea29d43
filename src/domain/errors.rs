use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid resize bound: {0}")]
    InvalidBound(u32),

    #[error("invalid content key: expected {expected}, got {actual}")]
    InvalidContentKey { expected: String, actual: String },
}
