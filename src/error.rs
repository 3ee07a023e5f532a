//! Failure taxonomy for one digest computation.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::hashing::HashFault;

/// Step of the computation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Open,
    Read,
    Init,
    Update,
    Finalize,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Open => "open",
            Stage::Read => "read",
            Stage::Init => "init",
            Stage::Update => "update",
            Stage::Finalize => "finalize",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every way a computation can fail. No variant carries a partial digest.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("byte source unavailable during {stage}: {source}")]
    SourceUnavailable {
        stage: Stage,
        #[source]
        source: io::Error,
    },
    #[error("hash state init failed: {0}")]
    InitFailure(#[source] HashFault),
    #[error("hash update failed at byte offset {offset}: {source}")]
    UpdateFailure {
        offset: u64,
        #[source]
        source: HashFault,
    },
    #[error("hash finalize failed: {0}")]
    FinalizeFailure(#[source] HashFault),
}

impl DigestError {
    pub(crate) fn open(source: io::Error) -> Self {
        DigestError::SourceUnavailable {
            stage: Stage::Open,
            source,
        }
    }

    pub(crate) fn read(source: io::Error) -> Self {
        DigestError::SourceUnavailable {
            stage: Stage::Read,
            source,
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            DigestError::SourceUnavailable { stage, .. } => *stage,
            DigestError::InitFailure(_) => Stage::Init,
            DigestError::UpdateFailure { .. } => Stage::Update,
            DigestError::FinalizeFailure(_) => Stage::Finalize,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            DigestError::SourceUnavailable { .. } => "source_unavailable",
            DigestError::InitFailure(_) => "init_failure",
            DigestError::UpdateFailure { .. } => "update_failure",
            DigestError::FinalizeFailure(_) => "finalize_failure",
        }
    }
}
