use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;

use crate::application::ports::{CodecError, ImageCodec};
use crate::domain::value_objects::{ResizeKind, ResizeStep};
use crate::infrastructure::codec::annotation;

const DEFAULT_QUALITY: u8 = 90;

/// Codec adapter over the `image` crate.
///
/// Decodes any enabled input format (JPEG, PNG) and always re-encodes
/// to JPEG, the canonical serving format. Downsample steps use nearest
/// neighbor; resize steps use a smoothing triangle filter.
pub struct JpegCodec {
    quality: u8,
}

impl JpegCodec {
    pub fn new() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }

    pub fn with_quality(quality: u8) -> Self {
        Self { quality }
    }
}

impl Default for JpegCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodec for JpegCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, CodecError> {
        image::load_from_memory(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }

    fn apply(&self, image: DynamicImage, step: &ResizeStep) -> DynamicImage {
        let filter = match step.kind {
            ResizeKind::Downsample => FilterType::Nearest,
            ResizeKind::Resize => FilterType::Triangle,
        };
        image.resize_exact(step.width, step.height, filter)
    }

    fn encode(&self, image: &DynamicImage) -> Result<Vec<u8>, CodecError> {
        let mut buf = Cursor::new(Vec::new());
        let mut encoder = JpegEncoder::new_with_quality(&mut buf, self.quality);
        // JPEG has no alpha channel; flatten before encoding.
        let rgb = image.to_rgb8();
        encoder
            .encode_image(&rgb)
            .map_err(|e| CodecError::Encode(e.to_string()))?;
        Ok(buf.into_inner())
    }

    fn encode_annotated(
        &self,
        image: &DynamicImage,
        annotation: &str,
    ) -> Result<Vec<u8>, CodecError> {
        let jpeg = self.encode(image)?;
        annotation::embed(&jpeg, annotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = DynamicImage::new_rgb8(width, height);
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let codec = JpegCodec::new();
        let image = codec.decode(&png_bytes(40, 30)).unwrap();
        assert_eq!((image.width(), image.height()), (40, 30));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let codec = JpegCodec::new();
        let err = codec.decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[test]
    fn test_apply_changes_dimensions() {
        let codec = JpegCodec::new();
        let image = DynamicImage::new_rgb8(100, 50);
        let step = ResizeStep {
            kind: ResizeKind::Resize,
            width: 60,
            height: 30,
        };
        let resized = codec.apply(image, &step);
        assert_eq!((resized.width(), resized.height()), (60, 30));
    }

    #[test]
    fn test_encode_produces_decodable_jpeg() {
        let codec = JpegCodec::new();
        let image = DynamicImage::new_rgb8(20, 20);
        let jpeg = codec.encode(&image).unwrap();
        let round_tripped = codec.decode(&jpeg).unwrap();
        assert_eq!((round_tripped.width(), round_tripped.height()), (20, 20));
    }

    #[test]
    fn test_encode_flattens_alpha() {
        let codec = JpegCodec::new();
        let image = DynamicImage::new_rgba8(16, 16);
        assert!(codec.encode(&image).is_ok());
    }

    #[test]
    fn test_annotated_output_still_decodes() {
        let codec = JpegCodec::new();
        let image = DynamicImage::new_rgb8(20, 20);
        let annotated = codec.encode_annotated(&image, "hidden message").unwrap();

        // Decoders must skip the COM segment.
        assert!(codec.decode(&annotated).is_ok());
        assert_eq!(
            annotation::read_annotation(&annotated),
            Some("hidden message".to_string())
        );
    }
}
