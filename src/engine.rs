//! Streaming digest engine: chunked reads folded into one hash state.

use std::io::{self, Read};

use tracing::{debug, warn};

use crate::digest::Digest;
use crate::error::DigestError;
use crate::hashing::{DigestAlgorithm, HashState, Sha256};

/// Default read size per chunk.
pub const CHUNK_SIZE: usize = 4096;

/// Consecutive `Interrupted` reads tolerated before the source counts as gone.
pub const MAX_INTERRUPTED_RETRIES: u32 = 8;

/// Result of one successful computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Computation {
    pub digest: Digest,
    /// Bytes fed into the hash state, equal to the bytes read before EOF.
    pub bytes: u64,
}

/// Runs one computation per call; holds no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct DigestEngine<A = Sha256> {
    algorithm: A,
    chunk_size: usize,
}

impl Default for DigestEngine<Sha256> {
    fn default() -> Self {
        Self::new(Sha256)
    }
}

impl<A: DigestAlgorithm> DigestEngine<A> {
    pub fn new(algorithm: A) -> Self {
        Self {
            algorithm,
            chunk_size: CHUNK_SIZE,
        }
    }

    /// Override the read size. Zero is clamped to one byte.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Digest everything `source` yields until EOF.
    ///
    /// The source is read from its current position and never seeked or
    /// closed. Any failure aborts the computation; the hash state is dropped
    /// and no digest is produced.
    pub fn run<R: Read + ?Sized>(&self, source: &mut R) -> Result<Computation, DigestError> {
        let mut state = self.algorithm.init().map_err(|fault| {
            warn!(algorithm = A::NAME, %fault, "hash init failed");
            DigestError::InitFailure(fault)
        })?;
        debug!(
            algorithm = A::NAME,
            chunk_size = self.chunk_size,
            "digest started"
        );

        let mut buffer = vec![0u8; self.chunk_size];
        let mut total: u64 = 0;
        let mut chunks: u64 = 0;
        let mut interrupted: u32 = 0;
        loop {
            let read = match source.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(err)
                    if err.kind() == io::ErrorKind::Interrupted
                        && interrupted < MAX_INTERRUPTED_RETRIES =>
                {
                    interrupted += 1;
                    continue;
                }
                Err(err) => {
                    warn!(offset = total, error = %err, "source read failed");
                    return Err(DigestError::read(err));
                }
            };
            interrupted = 0;
            if let Err(fault) = state.update(&buffer[..read]) {
                warn!(offset = total, %fault, "hash update failed");
                return Err(DigestError::UpdateFailure {
                    offset: total,
                    source: fault,
                });
            }
            total += read as u64;
            chunks += 1;
        }

        let digest = state.finalize().map_err(|fault| {
            warn!(bytes = total, %fault, "hash finalize failed");
            DigestError::FinalizeFailure(fault)
        })?;
        debug!(bytes = total, chunks, digest = %digest, "digest finished");
        Ok(Computation {
            digest,
            bytes: total,
        })
    }

    pub fn compute<R: Read + ?Sized>(&self, source: &mut R) -> Result<Digest, DigestError> {
        self.run(source).map(|computation| computation.digest)
    }
}

/// SHA-256 of a byte source using the default chunk size.
pub fn compute_digest<R: Read + ?Sized>(source: &mut R) -> Result<Digest, DigestError> {
    DigestEngine::default().compute(source)
}
