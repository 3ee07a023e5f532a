//! JSON reports printed by the command-line tool.

use serde::Serialize;

use crate::check::{IntegrityReport, IntegrityStatus};
use crate::engine::Computation;
use crate::error::{DigestError, Stage};
use crate::hashing::{DigestAlgorithm, Sha256};

/// One report per hashed path.
#[derive(Serialize, Debug)]
pub struct HashReport {
    pub path: String,
    pub algorithm: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IntegrityStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

/// Error record used when hashing fails.
#[derive(Serialize, Debug)]
pub struct ErrorReport {
    pub code: String,
    pub stage: Stage,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl HashReport {
    fn empty(path: &str) -> Self {
        Self {
            path: path.to_string(),
            algorithm: Sha256::NAME,
            sha256: None,
            bytes: None,
            expected: None,
            status: None,
            error: None,
        }
    }

    pub fn computed(path: &str, computed: &Computation) -> Self {
        Self {
            sha256: Some(computed.digest.to_hex()),
            bytes: Some(computed.bytes),
            ..Self::empty(path)
        }
    }

    pub fn checked(path: &str, report: &IntegrityReport) -> Self {
        Self {
            sha256: Some(report.actual.to_hex()),
            bytes: Some(report.bytes),
            expected: Some(report.expected.to_hex()),
            status: Some(report.status),
            ..Self::empty(path)
        }
    }

    pub fn failed(path: &str, err: &DigestError) -> Self {
        Self {
            error: Some(ErrorReport::from(err)),
            ..Self::empty(path)
        }
    }
}

impl From<&DigestError> for ErrorReport {
    fn from(err: &DigestError) -> Self {
        let mut details = Vec::new();
        let mut cause = std::error::Error::source(err);
        while let Some(inner) = cause {
            details.push(inner.to_string());
            cause = inner.source();
        }
        Self {
            code: err.code().to_string(),
            stage: err.stage(),
            message: err.to_string(),
            details,
        }
    }
}
