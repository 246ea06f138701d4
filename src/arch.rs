//! Host architecture detection.
//!
//! Queries `uname(2)` for the machine hardware name and classifies it into
//! an [`ArchTag`]. Meant to run once during process initialization, before
//! any resolution happens; the classification itself is a pure function
//! (`ArchTag::from_machine`) so the resolver can be tested with synthetic
//! tags without touching process state.

#![allow(unsafe_code)] // uname() requires unsafe

use std::ffi::CStr;
use std::io;
use std::mem::MaybeUninit;

use log::debug;

use crate::domain::{ArchError, ArchTag};

/// Detect the kernel syscall-naming convention of the running host.
///
/// Reads the machine hardware name via `uname(2)`, trimmed at its first
/// NUL terminator. A failing `uname(2)` is an initialization fault: no tag
/// is defaulted, the error is returned for the caller to abort on.
///
/// # Errors
/// Returns [`ArchError::Uname`] if the system call fails.
pub fn detect() -> Result<ArchTag, ArchError> {
    let mut uts = MaybeUninit::<libc::utsname>::uninit();
    let rc = unsafe { libc::uname(uts.as_mut_ptr()) };
    if rc != 0 {
        return Err(ArchError::Uname(io::Error::last_os_error()));
    }

    // SAFETY: uname() returned 0, so the struct is initialized and its
    // fields are NUL-terminated.
    let uts = unsafe { uts.assume_init() };
    let machine = unsafe { CStr::from_ptr(uts.machine.as_ptr()) }.to_string_lossy();

    let tag = ArchTag::from_machine(&machine);
    debug!("machine '{machine}' -> architecture tag '{tag}'");
    Ok(tag)
}
