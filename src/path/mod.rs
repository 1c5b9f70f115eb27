//! Canonical path resolution.
//!
//! This module turns a filesystem path into its canonical absolute form by
//! following every symbolic link and resolving `.`/`..` segments and
//! redundant separators in a single OS call.
//!
//! # Key Concepts
//!
//! ## Canonicalization
//!
//! Canonicalization is delegated wholesale to the platform's resolution
//! primitive. The kernel performs the link walk atomically and enforces its
//! own loop limit, so there is no manual link-following logic in this crate.
//!
//! ## Error classification
//!
//! Every underlying failure is translated into the closed taxonomy in
//! [`crate::Error`] by raw OS error number. Unrecognized error numbers are
//! never swallowed: they map to [`crate::Error::InvalidFunction`] with the
//! raw number preserved.
//!
//! # Examples
//!
//! ```no_run
//! use follow_symlink::resolve;
//!
//! let canonical = resolve("/tmp/./some//link").unwrap();
//! assert!(canonical.is_absolute());
//! ```

pub mod canonicalize;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export the operation at the module root.
pub use resolver::{resolve, MAX_PATH_BYTES};
