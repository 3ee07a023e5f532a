//! Integrity check against a previously recorded digest.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::digest::Digest;
use crate::engine::DigestEngine;
use crate::error::DigestError;
use crate::file::digest_file_with;
use crate::hashing::DigestAlgorithm;

/// Whether the file still matches its recorded digest.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityStatus {
    Unchanged,
    Modified,
}

impl IntegrityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IntegrityStatus::Unchanged => "unchanged",
            IntegrityStatus::Modified => "modified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrityReport {
    pub status: IntegrityStatus,
    pub expected: Digest,
    pub actual: Digest,
    pub bytes: u64,
}

pub fn check_file(path: &Path, expected: &Digest) -> Result<IntegrityReport, DigestError> {
    check_file_with(&DigestEngine::default(), path, expected)
}

pub fn check_file_with<A: DigestAlgorithm>(
    engine: &DigestEngine<A>,
    path: &Path,
    expected: &Digest,
) -> Result<IntegrityReport, DigestError> {
    let computed = digest_file_with(engine, path)?;
    let status = if computed.digest == *expected {
        IntegrityStatus::Unchanged
    } else {
        IntegrityStatus::Modified
    };
    info!(path = %path.display(), status = status.as_str(), "integrity checked");
    Ok(IntegrityReport {
        status,
        expected: *expected,
        actual: computed.digest,
        bytes: computed.bytes,
    })
}
