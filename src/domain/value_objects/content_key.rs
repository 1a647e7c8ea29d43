use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::errors::DomainError;

/// Number of hex characters kept from the SHA-256 digest.
///
/// A 16-char (64-bit) prefix puts the collision birthday bound around
/// 2^32 stored images, comfortably past the expected corpus size while
/// keeping URLs short. The full digest is never stored.
pub const KEY_HEX_LEN: usize = 16;

/// Content address of a stored image: a truncated SHA-256 hex prefix.
///
/// Identical byte sequences always map to the same key, so re-uploading
/// identical content is an idempotent overwrite rather than a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentKey(String);

impl ContentKey {
    /// Derive the key for a byte sequence. Total over any input,
    /// including empty.
    pub fn of(bytes: &[u8]) -> Self {
        let digest = Sha256::digest(bytes);
        Self(hex::encode(&digest[..KEY_HEX_LEN / 2]))
    }

    /// Create from a validated hex string (e.g. a key arriving in a URL).
    pub fn from_hex(hex: &str) -> Result<Self, DomainError> {
        if hex.len() != KEY_HEX_LEN {
            return Err(DomainError::InvalidContentKey {
                expected: format!("{} hex characters", KEY_HEX_LEN),
                actual: format!("{} characters", hex.len()),
            });
        }

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidContentKey {
                expected: "hex characters only".to_string(),
                actual: hex.to_string(),
            });
        }

        Ok(Self(hex.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 2 characters, used for directory fan-out in the store.
    pub fn prefix(&self) -> &str {
        &self.0[0..2]
    }
}

impl std::fmt::Display for ContentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ContentKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
