//! Process environment: the working directory.

extern crate alloc;

use alloc::ffi::CString;
use alloc::string::String;

use usyscall::fs as sys;

use crate::io::{Error, ErrorKind, Result};

/// The current working directory as an owned string.
pub fn current_dir() -> Result<String> {
    let mut buf = [0u8; 4096];
    let ret = sys::getcwd(&mut buf);
    if ret <= 0 {
        return Err(Error::from_errno(ret));
    }
    // Stored length includes the NUL terminator.
    let bytes = &buf[..ret as usize - 1];
    core::str::from_utf8(bytes)
        .map(String::from)
        .map_err(|_| Error::new(ErrorKind::InvalidArgument))
}

/// Change the current working directory.
pub fn set_current_dir(path: &str) -> Result<()> {
    let path = CString::new(path).map_err(|_| Error::new(ErrorKind::InvalidArgument))?;
    let ret = sys::chdir(&path);
    if ret < 0 {
        return Err(Error::from_errno(ret));
    }
    Ok(())
}
