//! Raw syscall shim for kernel test programs.
//!
//! One exported function per POSIX-like primitive. Each function forwards
//! its arguments, in a fixed order, to a single raw kernel invocation and
//! hands the signed result back untouched: a negative value is the kernel's
//! errno, negated. Nothing here validates, buffers, retries, or logs —
//! constraint checking belongs to the kernel under test.
//!
//! Operation codes and ABI records come from `linux-raw-sys`, so the shim
//! speaks the Linux syscall ABI of whatever kernel it is pointed at: the
//! kernel under test on a board or emulator, or the host kernel on a
//! development machine.
//!
//! ## Usage
//! ```rust
//! use usyscall::{fs, time};
//!
//! let fd = fs::open(c"/etc/hostname", fs::O_RDONLY);
//! # let _ = fd;
//! let now = time::get_time();
//! # let _ = now;
//! ```

#![cfg_attr(not(test), no_std)]

pub mod arch;
pub mod fs;
pub mod mm;
pub mod process;
pub mod sched;
pub mod stat;
pub mod sysno;
pub mod time;

// Re-export the everyday surface at the crate root.
pub use fs::{
    chdir, close, dup, dup2, fstat, getcwd, getdents, link, mkdir, open, openat, pipe, read,
    unlink, write, Dirent64,
};
pub use process::{exec, exit, fork, getpid, getppid, wait, waitpid};
pub use sched::sched_yield;
pub use stat::{makedev, Stat, Statx};
pub use time::{get_time, sleep, TimeVal};
