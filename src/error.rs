//! Error types for the follow-symlink library.
//!
//! This module defines the closed error taxonomy used by path resolution,
//! using `thiserror` for ergonomic error handling. Every underlying OS
//! failure is classified into exactly one variant; unrecognized failures
//! map to [`Error::InvalidFunction`] rather than being dropped.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a resolution error.
///
/// # Examples
///
/// ```
/// use follow_symlink::{Error, Result};
/// use std::path::PathBuf;
///
/// fn example_operation() -> Result<PathBuf> {
///     Ok(PathBuf::from("/tmp"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The error taxonomy for path resolution.
///
/// This is a closed enumeration: every failure of [`crate::resolve`] is one
/// of these variants, and each variant carries a stable numeric code for the
/// host runtime's error namespace (see [`Error::code`]).
#[derive(Debug, Error)]
pub enum Error {
    /// The input path was null or empty.
    #[error("invalid parameter: path must be non-empty")]
    InvalidParameter,

    /// A component of the path does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// The path that could not be found.
        path: PathBuf,
    },

    /// Permission was denied on a component of the path.
    #[error("access denied: {}", path.display())]
    AccessDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// The caller supplied an invalid memory region.
    #[error("invalid address while resolving {}", path.display())]
    InvalidAddress {
        /// The path being resolved when the fault occurred.
        path: PathBuf,
    },

    /// Too many levels of symbolic links (a link loop or an over-deep chain).
    #[error("too many levels of symbolic links: {}", path.display())]
    StoppedOnSymlink {
        /// The path whose resolution hit the symlink limit.
        path: PathBuf,
    },

    /// A low-level I/O failure occurred during resolution.
    #[error("I/O failure while resolving {}", path.display())]
    GeneralFailure {
        /// The path being resolved when the failure occurred.
        path: PathBuf,
    },

    /// The path name is syntactically malformed.
    #[error("malformed path name: {}", path.display())]
    InvalidName {
        /// The malformed path.
        path: PathBuf,
    },

    /// The path exceeds the platform maximum length, or a non-directory
    /// component was used as a directory.
    #[error("bad path name: {}", path.display())]
    BadPathName {
        /// The offending path.
        path: PathBuf,
    },

    /// The kernel ran out of memory during resolution.
    #[error("out of kernel memory while resolving {}", path.display())]
    OutOfMemory {
        /// The path being resolved when memory ran out.
        path: PathBuf,
    },

    /// An unrecognized underlying failure. This is the documented fallback
    /// classification; the raw OS error number is preserved for diagnosis.
    #[error("unrecognized failure resolving {} (os error {errno})", path.display())]
    InvalidFunction {
        /// The path being resolved when the failure occurred.
        path: PathBuf,
        /// The unrecognized raw OS error number.
        errno: i32,
    },
}

impl Error {
    /// Classify a raw OS error number for `path` into the taxonomy.
    ///
    /// The mapping follows the POSIX `realpath(3)` error contract:
    /// `EACCES`, `EFAULT`, `EINVAL`, `EIO`, `ELOOP`, `ENAMETOOLONG`,
    /// `ENOENT`, `ENOMEM` and `ENOTDIR` each have a dedicated variant;
    /// anything else becomes [`Error::InvalidFunction`].
    ///
    /// # Examples
    ///
    /// ```
    /// use follow_symlink::Error;
    /// use std::path::Path;
    ///
    /// let err = Error::from_os_error(libc::ENOENT, Path::new("/missing"));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn from_os_error(errno: i32, path: &std::path::Path) -> Self {
        let path = path.to_path_buf();
        match errno {
            libc::EACCES => Self::AccessDenied { path },
            libc::EFAULT => Self::InvalidAddress { path },
            libc::EINVAL => Self::InvalidName { path },
            libc::EIO => Self::GeneralFailure { path },
            libc::ELOOP => Self::StoppedOnSymlink { path },
            libc::ENAMETOOLONG | libc::ENOTDIR => Self::BadPathName { path },
            libc::ENOENT => Self::FileNotFound { path },
            libc::ENOMEM => Self::OutOfMemory { path },
            _ => Self::InvalidFunction { path, errno },
        }
    }

    /// The stable numeric code for this error in the host runtime's
    /// error namespace.
    ///
    /// These values are fixed by the consuming runtime's contract and must
    /// not change between releases:
    ///
    /// | Variant | Code |
    /// |---|---|
    /// | `InvalidFunction` | 1 |
    /// | `FileNotFound` | 2 |
    /// | `AccessDenied` | 5 |
    /// | `OutOfMemory` | 14 |
    /// | `GeneralFailure` | 31 |
    /// | `InvalidParameter` | 87 |
    /// | `InvalidName` | 123 |
    /// | `BadPathName` | 161 |
    /// | `InvalidAddress` | 487 |
    /// | `StoppedOnSymlink` | 681 |
    ///
    /// # Examples
    ///
    /// ```
    /// use follow_symlink::Error;
    ///
    /// assert_eq!(Error::InvalidParameter.code(), 87);
    /// ```
    #[must_use]
    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidFunction { .. } => 1,
            Self::FileNotFound { .. } => 2,
            Self::AccessDenied { .. } => 5,
            Self::OutOfMemory { .. } => 14,
            Self::GeneralFailure { .. } => 31,
            Self::InvalidParameter => 87,
            Self::InvalidName { .. } => 123,
            Self::BadPathName { .. } => 161,
            Self::InvalidAddress { .. } => 487,
            Self::StoppedOnSymlink { .. } => 681,
        }
    }

    /// Check if error indicates a path component does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use follow_symlink::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::FileNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use follow_symlink::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::AccessDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }

    /// Check if error indicates a symlink loop or over-deep link chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use follow_symlink::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::StoppedOnSymlink { path: PathBuf::from("/loop") };
    /// assert!(err.is_symlink_loop());
    /// ```
    #[must_use]
    pub fn is_symlink_loop(&self) -> bool {
        matches!(self, Self::StoppedOnSymlink { .. })
    }
}
