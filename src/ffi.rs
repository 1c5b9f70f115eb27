//! C-ABI surface for host runtimes.
//!
//! Only one error code is registered at a time, per thread. The code is
//! written by Rust on every failing call and read by the host through
//! [`followSymLinkLastError`], mirroring an errno-style side channel: the
//! slot is reset to zero ("no error") at the start of every
//! [`followSymLink`] call, so after a successful call it reads zero.
//!
//! Ownership: a non-null pointer returned by [`followSymLink`] is a freshly
//! allocated NUL-terminated UTF-8 string. The caller must release it exactly
//! once with [`followSymLinkFree`]; releasing it with any other allocator is
//! undefined behavior.

use std::cell::Cell;
use std::ffi::{c_char, c_int, CStr, CString};
use std::path::Path;
use std::ptr;

use log::debug;

use crate::error::Error;
use crate::path::resolve;

thread_local! {
    static LAST_ERROR: Cell<u32> = const { Cell::new(0) };
}

/// Register an error code in the per-thread slot.
fn update_last_error(err: &Error) {
    debug!("registering error code {}: {err}", err.code());
    LAST_ERROR.with(|slot| slot.set(err.code()));
}

/// Clear the per-thread slot to the "no error" sentinel.
fn clear_last_error() {
    LAST_ERROR.with(|slot| slot.set(0));
}

/// Read the per-thread slot from Rust. Exposed for tests and embedders.
#[must_use]
pub fn last_error_code() -> u32 {
    LAST_ERROR.with(Cell::get)
}

/// Resolve `fileName` to its canonical absolute path.
///
/// Returns a newly allocated NUL-terminated UTF-8 string on success, or a
/// null pointer on failure with the per-thread error slot set to the code of
/// the classified failure (see [`crate::Error::code`]). The slot is cleared
/// to zero before resolution begins.
///
/// # Safety
///
/// `fileName` must be either null or a valid pointer to a NUL-terminated
/// string that stays alive for the duration of the call. The input buffer is
/// only read, never retained.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn followSymLink(fileName: *const c_char) -> *mut c_char {
    clear_last_error();

    if fileName.is_null() {
        update_last_error(&Error::InvalidParameter);
        return ptr::null_mut();
    }

    // SAFETY: non-null and NUL-terminated per the caller contract.
    let bytes = unsafe { CStr::from_ptr(fileName) }.to_bytes();

    // The boundary interprets paths as UTF-8 text.
    let Ok(name) = std::str::from_utf8(bytes) else {
        update_last_error(&Error::InvalidName {
            path: String::from_utf8_lossy(bytes).into_owned().into(),
        });
        return ptr::null_mut();
    };

    match resolve(Path::new(name)) {
        Ok(canonical) => {
            // Canonical paths cannot contain interior NULs; treat the
            // impossible case as a malformed name rather than panicking.
            match CString::new(canonical.into_os_string().into_encoded_bytes()) {
                Ok(owned) => owned.into_raw(),
                Err(_) => {
                    update_last_error(&Error::InvalidName {
                        path: name.into(),
                    });
                    ptr::null_mut()
                }
            }
        }
        Err(e) => {
            update_last_error(&e);
            ptr::null_mut()
        }
    }
}

/// Release a string previously returned by [`followSymLink`].
///
/// Passing null is a no-op.
///
/// # Safety
///
/// `path` must be null or a pointer obtained from [`followSymLink`] that has
/// not been freed before. Each returned pointer may be released exactly once.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn followSymLinkFree(path: *mut c_char) {
    if path.is_null() {
        return;
    }
    // SAFETY: allocated by CString::into_raw in followSymLink.
    drop(unsafe { CString::from_raw(path) });
}

/// Read the per-thread error code of the most recent [`followSymLink`] call.
///
/// Zero means the last call on this thread succeeded (or no call has been
/// made). Reading does not clear the slot.
#[no_mangle]
#[allow(non_snake_case)]
// Codes are bounded well below i32::MAX; the cast cannot wrap.
#[allow(clippy::cast_possible_wrap)]
pub extern "C" fn followSymLinkLastError() -> c_int {
    last_error_code() as c_int
}
