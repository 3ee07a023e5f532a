//! Path-based entry points.

use std::fs::File;
use std::path::Path;

use tracing::warn;

use crate::engine::{Computation, DigestEngine};
use crate::error::DigestError;
use crate::hashing::DigestAlgorithm;

/// Hash a file with SHA-256 and the default chunk size.
pub fn digest_file(path: &Path) -> Result<Computation, DigestError> {
    digest_file_with(&DigestEngine::default(), path)
}

/// Hash a file with a caller-configured engine.
///
/// The path is opened as given. A failed open is reported before any hash
/// state exists.
pub fn digest_file_with<A: DigestAlgorithm>(
    engine: &DigestEngine<A>,
    path: &Path,
) -> Result<Computation, DigestError> {
    let mut file = File::open(path).map_err(|err| {
        warn!(path = %path.display(), error = %err, "open failed");
        DigestError::open(err)
    })?;
    engine.run(&mut file)
}
