//! Hash algorithm seam and the SHA-256 implementation.

use sha2::Digest as _;
use thiserror::Error;

use crate::digest::{Digest, DIGEST_LEN};

/// Internal fault reported by a hash algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HashFault {
    message: String,
}

impl HashFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A digest algorithm with a fixed output size.
pub trait DigestAlgorithm {
    type State: HashState;

    /// Human-readable algorithm name, used in reports.
    const NAME: &'static str;

    /// Create a fresh state for exactly one computation.
    fn init(&self) -> Result<Self::State, HashFault>;
}

/// Mutable accumulator fed in source order.
pub trait HashState {
    fn update(&mut self, chunk: &[u8]) -> Result<(), HashFault>;

    /// Consume the state and produce the digest.
    fn finalize(self) -> Result<Digest, HashFault>;
}

/// SHA-256 backed by the `sha2` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256;

/// Running SHA-256 state.
pub struct Sha256State {
    hasher: sha2::Sha256,
}

impl DigestAlgorithm for Sha256 {
    type State = Sha256State;

    const NAME: &'static str = "sha256";

    fn init(&self) -> Result<Self::State, HashFault> {
        Ok(Sha256State {
            hasher: sha2::Sha256::new(),
        })
    }
}

impl HashState for Sha256State {
    fn update(&mut self, chunk: &[u8]) -> Result<(), HashFault> {
        self.hasher.update(chunk);
        Ok(())
    }

    fn finalize(self) -> Result<Digest, HashFault> {
        Ok(into_digest(&self.hasher.finalize()))
    }
}

/// Hash raw bytes in one call.
#[cfg(test)]
pub(crate) fn sha256_bytes(bytes: &[u8]) -> Digest {
    into_digest(&sha2::Sha256::digest(bytes))
}

fn into_digest(output: &[u8]) -> Digest {
    let mut bytes = [0u8; DIGEST_LEN];
    bytes.copy_from_slice(output);
    Digest::from_bytes(bytes)
}
