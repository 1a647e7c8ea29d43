use image::DynamicImage;
#[cfg(test)]
use mockall::{automock, predicate::*};
use thiserror::Error;

use crate::domain::value_objects::ResizeStep;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unsupported or malformed image: {0}")]
    Decode(String),

    #[error("encoding failed: {0}")]
    Encode(String),
}

/// Port for image decode, resize and re-encode operations.
///
/// Resize execution lives here rather than in the plan itself so the
/// plan stays a pure value and the pixel work is swappable in tests.
#[cfg_attr(test, automock)]
pub trait ImageCodec: Send + Sync {
    /// Decode encoded bytes into a pixel grid.
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, CodecError>;

    /// Execute one resize step, consuming the current image.
    fn apply(&self, image: DynamicImage, step: &ResizeStep) -> DynamicImage;

    /// Encode into the canonical output format, without annotation.
    fn encode(&self, image: &DynamicImage) -> Result<Vec<u8>, CodecError>;

    /// Encode into the canonical output format with the annotation text
    /// embedded in the encoded representation.
    fn encode_annotated(
        &self,
        image: &DynamicImage,
        annotation: &str,
    ) -> Result<Vec<u8>, CodecError>;
}
