//! Fixed-length digest value and its hex form.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Output length of the SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// A finished 32-byte digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex, two characters per byte, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

/// Rejected hex digest text.
#[derive(Debug, Error)]
pub enum ParseDigestError {
    #[error("expected {expected} hex characters, got {actual}")]
    Length { expected: usize, actual: usize },
    #[error("invalid hex digest: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl FromStr for Digest {
    type Err = ParseDigestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.len() != DIGEST_LEN * 2 {
            return Err(ParseDigestError::Length {
                expected: DIGEST_LEN * 2,
                actual: trimmed.len(),
            });
        }
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(trimmed, &mut bytes)?;
        Ok(Self(bytes))
    }
}
