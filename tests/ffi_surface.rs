//! Integration tests for the C-ABI surface.
//!
//! Exercises the entry-point contract a host runtime relies on:
//! non-null result XOR nonzero error code, slot cleared on success, and
//! one-shot ownership of the returned string.

use std::ffi::{c_char, CStr, CString};
use std::fs;
use std::path::{Path, PathBuf};
use std::ptr;

use follow_symlink::ffi::{followSymLink, followSymLinkFree, followSymLinkLastError};
use tempfile::tempdir;

fn follow(path: &Path) -> *mut c_char {
    let input = CString::new(path.as_os_str().as_encoded_bytes()).unwrap();
    unsafe { followSymLink(input.as_ptr()) }
}

fn into_path(ptr: *mut c_char) -> PathBuf {
    assert!(!ptr.is_null());
    let path = PathBuf::from(unsafe { CStr::from_ptr(ptr) }.to_str().unwrap());
    unsafe { followSymLinkFree(ptr) };
    path
}

#[test]
fn test_success_returns_canonical_utf8_string() {
    let dir = tempdir().unwrap();
    let resolved = into_path(follow(dir.path()));
    assert_eq!(resolved, fs::canonicalize(dir.path()).unwrap());
    assert_eq!(followSymLinkLastError(), 0);
}

#[test]
fn test_null_and_failure_codes() {
    let result = unsafe { followSymLink(ptr::null()) };
    assert!(result.is_null());
    assert_eq!(followSymLinkLastError(), 87);

    let result = follow(Path::new("/nonexistent/path/xyz"));
    assert!(result.is_null());
    assert_eq!(followSymLinkLastError(), 2);
}

#[test]
fn test_slot_is_reset_per_call() {
    // Fail, then succeed: the slot must read zero after the success.
    let result = follow(Path::new("/nonexistent/path/xyz"));
    assert!(result.is_null());
    assert_ne!(followSymLinkLastError(), 0);

    let dir = tempdir().unwrap();
    let resolved = follow(dir.path());
    assert!(!resolved.is_null());
    assert_eq!(followSymLinkLastError(), 0);
    unsafe { followSymLinkFree(resolved) };
}

#[test]
fn test_slot_is_per_thread() {
    // A failure on another thread must not disturb this thread's slot.
    let dir = tempdir().unwrap();
    let resolved = follow(dir.path());
    assert!(!resolved.is_null());
    unsafe { followSymLinkFree(resolved) };
    assert_eq!(followSymLinkLastError(), 0);

    std::thread::spawn(|| {
        let result = unsafe { followSymLink(ptr::null()) };
        assert!(result.is_null());
        assert_eq!(followSymLinkLastError(), 87);
    })
    .join()
    .unwrap();

    assert_eq!(followSymLinkLastError(), 0);
}

#[cfg(unix)]
#[test]
fn test_chain_through_ffi() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    let file = dir.path().join("file");
    fs::write(&file, "payload").unwrap();
    let link = dir.path().join("link");
    symlink(&file, &link).unwrap();

    let resolved = into_path(follow(&link));
    assert_eq!(resolved, fs::canonicalize(&file).unwrap());
}

#[test]
fn test_outstanding_results_are_independent() {
    let dir_a = tempdir().unwrap();
    let dir_b = tempdir().unwrap();

    let a = follow(dir_a.path());
    let b = follow(dir_b.path());
    assert!(!a.is_null());
    assert!(!b.is_null());

    // Free the first; the second must still read back correctly.
    unsafe { followSymLinkFree(a) };
    let resolved_b = into_path(b);
    assert_eq!(resolved_b, fs::canonicalize(dir_b.path()).unwrap());
}
