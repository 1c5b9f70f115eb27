//! Canonicalization via the platform resolution primitive.
//!
//! This module wraps the OS canonical-path primitive (`realpath(3)` under
//! the hood of `std::fs::canonicalize`) and classifies its failures into
//! the crate's error taxonomy. Symlink following and loop detection are
//! entirely the kernel's; no manual link-walking happens here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Canonicalize a path by delegating to the OS resolution primitive.
///
/// All symbolic links, `.` and `..` segments, and redundant separators are
/// resolved by the kernel in one call. The result is a newly allocated
/// absolute path; it denotes the same filesystem object as the input at the
/// time of the call only.
///
/// # Errors
///
/// Every failure is classified by raw OS error number into the taxonomy in
/// [`crate::Error`]; unrecognized failures become
/// [`Error::InvalidFunction`].
///
/// # Examples
///
/// ```no_run
/// use follow_symlink::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| classify(&e, path))
}

/// Classify an I/O error from the resolution primitive into the taxonomy.
///
/// Classification goes by raw OS error number so the mapping is exhaustive
/// over the `realpath(3)` contract. Errors synthesized without an OS error
/// number cannot occur here in practice, but fall back to
/// [`Error::GeneralFailure`] rather than panicking.
pub(crate) fn classify(err: &io::Error, path: &Path) -> Error {
    match err.raw_os_error() {
        Some(errno) => Error::from_os_error(errno, path),
        None => Error::GeneralFailure {
            path: path.to_path_buf(),
        },
    }
}
