//! C ABI exports for hosts that load the library dynamically.

use std::ffi::{c_char, c_int, CStr};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;

use crate::digest::DIGEST_LEN;
use crate::error::DigestError;
use crate::file::digest_file;

#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 0,
    InvalidArg = 1,
    SourceUnavailable = 2,
    InitFailure = 3,
    UpdateFailure = 4,
    FinalizeFailure = 5,
    Internal = 6,
}

impl StatusCode {
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl From<StatusCode> for i32 {
    fn from(code: StatusCode) -> Self {
        code.code()
    }
}

impl From<&DigestError> for StatusCode {
    fn from(err: &DigestError) -> Self {
        match err {
            DigestError::SourceUnavailable { .. } => StatusCode::SourceUnavailable,
            DigestError::InitFailure(_) => StatusCode::InitFailure,
            DigestError::UpdateFailure { .. } => StatusCode::UpdateFailure,
            DigestError::FinalizeFailure(_) => StatusCode::FinalizeFailure,
        }
    }
}

pub const CALC_HASH_OK: i32 = StatusCode::Ok.code();
pub const CALC_HASH_ERR_INVALID_ARG: i32 = StatusCode::InvalidArg.code();
pub const CALC_HASH_ERR_SOURCE_UNAVAILABLE: i32 = StatusCode::SourceUnavailable.code();
pub const CALC_HASH_ERR_INIT: i32 = StatusCode::InitFailure.code();
pub const CALC_HASH_ERR_UPDATE: i32 = StatusCode::UpdateFailure.code();
pub const CALC_HASH_ERR_FINALIZE: i32 = StatusCode::FinalizeFailure.code();
pub const CALC_HASH_ERR_INTERNAL: i32 = StatusCode::Internal.code();

#[cfg(unix)]
fn path_from_c(raw: &CStr) -> Option<PathBuf> {
    use std::os::unix::ffi::OsStrExt;
    Some(PathBuf::from(std::ffi::OsStr::from_bytes(raw.to_bytes())))
}

#[cfg(not(unix))]
fn path_from_c(raw: &CStr) -> Option<PathBuf> {
    raw.to_str().ok().map(PathBuf::from)
}

/// Hash the file at `filename` and copy the digest into `hash_output`.
///
/// # Safety
///
/// `filename` must be null or a valid NUL-terminated string, and
/// `hash_output` must be null or point to at least 32 writable bytes.
unsafe fn hash_into(filename: *const c_char, hash_output: *mut u8) -> StatusCode {
    if filename.is_null() || hash_output.is_null() {
        return StatusCode::InvalidArg;
    }
    let Some(path) = path_from_c(CStr::from_ptr(filename)) else {
        return StatusCode::InvalidArg;
    };
    let outcome = catch_unwind(AssertUnwindSafe(|| digest_file(&path)));
    match outcome {
        Ok(Ok(computed)) => {
            std::ptr::copy_nonoverlapping(
                computed.digest.as_bytes().as_ptr(),
                hash_output,
                DIGEST_LEN,
            );
            StatusCode::Ok
        }
        Ok(Err(err)) => StatusCode::from(&err),
        Err(_) => StatusCode::Internal,
    }
}

/// Returns 1 and writes 32 digest bytes on success, 0 on any failure.
///
/// `hash_output` is left untouched when the call fails.
///
/// # Safety
///
/// `filename` must be null or a valid NUL-terminated string, and
/// `hash_output` must be null or point to at least 32 writable bytes.
#[no_mangle]
pub unsafe extern "C" fn calculate_file_hash(
    filename: *const c_char,
    hash_output: *mut u8,
) -> c_int {
    match hash_into(filename, hash_output) {
        StatusCode::Ok => 1,
        _ => 0,
    }
}

/// Same as [`calculate_file_hash`] but reports which stage failed.
///
/// # Safety
///
/// Same contract as [`calculate_file_hash`].
#[no_mangle]
pub unsafe extern "C" fn calc_hash_file_status(
    filename: *const c_char,
    hash_output: *mut u8,
) -> i32 {
    hash_into(filename, hash_output).code()
}
