#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # follow-symlink
//!
//! A leaf utility that resolves a filesystem path's symbolic-link target
//! into its canonical absolute path, translating platform error codes into
//! a portable error taxonomy for a consuming runtime.
//!
//! The crate exposes one operation in two forms:
//!
//! - [`resolve`]: the Rust API, returning `Result<PathBuf, Error>`.
//! - [`ffi::followSymLink`]: the C-ABI entry point, returning a newly
//!   allocated string or null with a per-thread error code set.
//!
//! Resolution is delegated entirely to the platform's canonical-path
//! primitive; the crate's job is input validation, ownership of the result,
//! and exhaustive classification of OS failures. The design is
//! POSIX-oriented.
//!
//! ## Examples
//!
//! ```no_run
//! use follow_symlink::resolve;
//!
//! match resolve("/var/log") {
//!     Ok(canonical) => println!("{}", canonical.display()),
//!     Err(e) => eprintln!("{e} (code {})", e.code()),
//! }
//! ```

pub mod error;
pub mod ffi;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use path::{resolve, MAX_PATH_BYTES};
