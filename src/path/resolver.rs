//! The public resolution operation.
//!
//! This module provides [`resolve`], the single entry point of the crate:
//! validate the input, bound its length, and hand it to the OS
//! canonicalization primitive with classified errors.

use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::path::canonicalize;

/// Maximum path length accepted, matching the platform limit the OS
/// primitive itself enforces. Inputs longer than this are rejected before
/// touching the filesystem.
pub const MAX_PATH_BYTES: usize = libc::PATH_MAX as usize;

/// Resolve a path to its canonical absolute form.
///
/// All symbolic links, `.` and `..` segments, and duplicate separators are
/// resolved. The input may be relative or absolute; relative paths are
/// resolved against the current working directory, as the OS primitive
/// defines. The returned path is freshly allocated and shares no storage
/// with the input or with other results.
///
/// The guarantee is point-in-time: the result denotes the same filesystem
/// object as the input at the moment of the call, with no durability across
/// later filesystem mutation.
///
/// # Errors
///
/// - [`Error::InvalidParameter`] for an empty input.
/// - [`Error::BadPathName`] when the input exceeds [`MAX_PATH_BYTES`] or a
///   non-directory component is used as a directory.
/// - [`Error::FileNotFound`], [`Error::AccessDenied`],
///   [`Error::StoppedOnSymlink`] and the rest of the taxonomy for the
///   corresponding OS failures; see [`Error::from_os_error`].
///
/// # Examples
///
/// ```no_run
/// use follow_symlink::resolve;
///
/// let canonical = resolve("/tmp").unwrap();
/// assert!(canonical.is_absolute());
///
/// // A canonical path resolves to itself.
/// assert_eq!(resolve(&canonical).unwrap(), canonical);
/// ```
pub fn resolve<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    trace!("resolving {}", path.display());

    if path.as_os_str().is_empty() {
        debug!("rejecting empty path");
        return Err(Error::InvalidParameter);
    }

    let len = path.as_os_str().as_bytes().len();
    if len > MAX_PATH_BYTES {
        debug!("rejecting over-long path ({len} bytes)");
        return Err(Error::BadPathName {
            path: path.to_path_buf(),
        });
    }

    match canonicalize::canonicalize(path) {
        Ok(canonical) => {
            trace!("resolved {} -> {}", path.display(), canonical.display());
            Ok(canonical)
        }
        Err(e) => {
            debug!("resolution of {} failed: {e}", path.display());
            Err(e)
        }
    }
}
