//! Annotation embedding for JPEG streams.
//!
//! The annotation rides in a COM (comment) segment spliced directly
//! after the SOI marker, so it survives storage and retrieval without
//! touching pixel data. `read_annotation` recovers it from stored
//! bytes.

use crate::application::ports::CodecError;

const SOI: [u8; 2] = [0xFF, 0xD8];
const COM: u8 = 0xFE;
const SOS: u8 = 0xDA;

/// Maximum annotation payload: a COM segment length field is two bytes
/// and counts itself.
pub const MAX_ANNOTATION_BYTES: usize = u16::MAX as usize - 2;

/// Splice `annotation` into `jpeg` as a COM segment after SOI.
pub fn embed(jpeg: &[u8], annotation: &str) -> Result<Vec<u8>, CodecError> {
    if annotation.len() > MAX_ANNOTATION_BYTES {
        return Err(CodecError::Encode(format!(
            "annotation of {} bytes exceeds the {} byte segment limit",
            annotation.len(),
            MAX_ANNOTATION_BYTES
        )));
    }
    if jpeg.len() < 2 || jpeg[..2] != SOI {
        return Err(CodecError::Encode("not a JPEG stream".to_string()));
    }

    let segment_len = (annotation.len() + 2) as u16;
    let mut out = Vec::with_capacity(jpeg.len() + annotation.len() + 4);
    out.extend_from_slice(&SOI);
    out.push(0xFF);
    out.push(COM);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(annotation.as_bytes());
    out.extend_from_slice(&jpeg[2..]);
    Ok(out)
}

/// Extract the first COM segment before the scan data, if any.
pub fn read_annotation(jpeg: &[u8]) -> Option<String> {
    if jpeg.len() < 2 || jpeg[..2] != SOI {
        return None;
    }

    let mut i = 2;
    while i + 4 <= jpeg.len() {
        if jpeg[i] != 0xFF {
            return None;
        }
        let marker = jpeg[i + 1];
        if marker == SOS {
            return None;
        }
        let len = u16::from_be_bytes([jpeg[i + 2], jpeg[i + 3]]) as usize;
        if len < 2 {
            return None;
        }
        if marker == COM {
            let payload = jpeg.get(i + 4..i + 2 + len)?;
            return std::str::from_utf8(payload).ok().map(str::to_owned);
        }
        i += 2 + len;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal marker prelude standing in for real entropy-coded data.
    fn fake_jpeg() -> Vec<u8> {
        let mut bytes = vec![0xFF, 0xD8];
        // APP0 segment with a 4-byte payload
        bytes.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x06, b'J', b'F', b'I', b'F']);
        // SOS marker followed by opaque scan bytes
        bytes.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x02, 0x12, 0x34]);
        bytes
    }

    #[test]
    fn test_embed_and_read_round_trip() {
        let annotated = embed(&fake_jpeg(), "hello").unwrap();
        assert_eq!(read_annotation(&annotated), Some("hello".to_string()));
    }

    #[test]
    fn test_embed_preserves_soi() {
        let annotated = embed(&fake_jpeg(), "x").unwrap();
        assert_eq!(&annotated[..2], &[0xFF, 0xD8]);
        assert_eq!(&annotated[2..4], &[0xFF, 0xFE]);
    }

    #[test]
    fn test_embed_empty_annotation() {
        let annotated = embed(&fake_jpeg(), "").unwrap();
        assert_eq!(read_annotation(&annotated), Some(String::new()));
    }

    #[test]
    fn test_embed_rejects_oversized_annotation() {
        let huge = "a".repeat(MAX_ANNOTATION_BYTES + 1);
        let err = embed(&fake_jpeg(), &huge).unwrap_err();
        assert!(matches!(err, CodecError::Encode(_)));
    }

    #[test]
    fn test_embed_rejects_non_jpeg() {
        let err = embed(b"\x89PNG\r\n", "hello").unwrap_err();
        assert!(matches!(err, CodecError::Encode(_)));
    }

    #[test]
    fn test_read_without_annotation() {
        assert_eq!(read_annotation(&fake_jpeg()), None);
    }

    #[test]
    fn test_read_skips_other_segments() {
        // COM placed behind APP0 rather than right after SOI.
        let mut bytes = vec![0xFF, 0xD8];
        bytes.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x06, b'J', b'F', b'I', b'F']);
        bytes.extend_from_slice(&[0xFF, 0xFE, 0x00, 0x07, b'l', b'a', b't', b'e', b'r']);
        bytes.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x02, 0x12, 0x34]);

        assert_eq!(read_annotation(&bytes), Some("later".to_string()));
    }

    #[test]
    fn test_read_on_garbage_is_none() {
        assert_eq!(read_annotation(b"not a jpeg at all"), None);
        assert_eq!(read_annotation(&[]), None);
    }

    #[test]
    fn test_unicode_annotation_round_trip() {
        let annotated = embed(&fake_jpeg(), "héllo wörld ✓").unwrap();
        assert_eq!(
            read_annotation(&annotated),
            Some("héllo wörld ✓".to_string())
        );
    }
}
