//! Streaming SHA-256 file digests.
//!
//! The engine reads a byte source in fixed-size chunks, folds each chunk
//! into one hash state and finalizes a 32-byte digest. Every failure is
//! reported as a [`DigestError`]; a partial digest is never returned.
//! [`ffi`] exposes the same computation through a C ABI.
//!
//! Progress and failures are emitted as `tracing` events. The crate never
//! installs a subscriber, so they are visible only to a host that sets one
//! up; the `calc-hash` binary reports failures on stderr instead.

pub mod check;
pub mod digest;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod file;
pub mod hashing;
pub mod report;

pub use check::{check_file, check_file_with, IntegrityReport, IntegrityStatus};
pub use digest::{Digest, ParseDigestError, DIGEST_LEN};
pub use engine::{
    compute_digest, Computation, DigestEngine, CHUNK_SIZE, MAX_INTERRUPTED_RETRIES,
};
pub use error::{DigestError, Stage};
pub use file::{digest_file, digest_file_with};
pub use hashing::{DigestAlgorithm, HashFault, HashState, Sha256};
