//! Process lifecycle: creation, replacement, waiting, identity.

use core::ffi::{c_void, CStr};

use crate::arch;
use crate::sysno::{
    __NR_clone, __NR_execve, __NR_exit, __NR_getpid, __NR_getppid, __NR_times, __NR_uname,
    __NR_wait4,
};

pub use linux_raw_sys::general::{CLONE_FILES, CLONE_FS, CLONE_SIGHAND, CLONE_VM, SIGCHLD};

/// Process ID of the caller.
#[inline]
pub fn getpid() -> isize {
    arch::syscall0(u64::from(__NR_getpid)) as isize
}

/// Process ID of the caller's parent.
#[inline]
pub fn getppid() -> isize {
    arch::syscall0(u64::from(__NR_getppid)) as isize
}

/// Duplicate the calling process, requesting child-exit notification
/// through the usual termination signal. Returns the child PID in the
/// parent and 0 in the child.
#[inline]
pub fn fork() -> isize {
    arch::syscall2(u64::from(__NR_clone), u64::from(SIGCHLD), 0) as isize
}

/// Where the child's stack pointer starts: the stack grows down, so the
/// usable top sits `size` bytes above the buffer base.
#[inline]
#[must_use]
pub fn child_stack_top(stack: *mut u8, size: usize) -> *mut u8 {
    if stack.is_null() {
        stack
    } else {
        stack.wrapping_add(size)
    }
}

/// Create a child running `func(arg)` on the caller-provided stack.
///
/// The thread-ID and TLS slots of the underlying primitive are all left
/// empty; the child's return value becomes its exit status.
///
/// # Safety
/// `stack..stack + stack_size` must be writable memory reserved for the
/// child, and `flags` must describe a sharing mode the caller can survive
/// (with `CLONE_VM`, `func` must not touch the parent's stack frames).
pub unsafe fn clone(
    func: extern "C" fn(*mut c_void) -> i32,
    arg: *mut c_void,
    stack: *mut u8,
    stack_size: usize,
    flags: u64,
) -> isize {
    let top = child_stack_top(stack, stack_size);
    unsafe { arch::clone_raw(func, top, flags, arg) as isize }
}

/// Terminate the calling task with `code`.
#[inline]
pub fn exit(code: i32) -> ! {
    arch::syscall_noreturn(u64::from(__NR_exit), code as u64)
}

/// Wait for a child to change state. `status` receives the raw wait
/// status when provided. The trailing rusage slot of the underlying
/// primitive is always zero.
#[inline]
pub fn waitpid(pid: i32, status: Option<&mut i32>, options: u32) -> isize {
    let status_ptr = status.map_or(core::ptr::null_mut(), core::ptr::from_mut);
    arch::syscall4(
        u64::from(__NR_wait4),
        pid as u64,
        status_ptr as u64,
        u64::from(options),
        0,
    ) as isize
}

/// Wait for any child.
#[inline]
pub fn wait(status: Option<&mut i32>) -> isize {
    waitpid(-1, status, 0)
}

/// Replace the process image; the argv and envp slots reach the kernel
/// zeroed.
#[inline]
pub fn exec(path: &CStr) -> isize {
    arch::syscall1(u64::from(__NR_execve), path.as_ptr() as u64) as isize
}

/// Replace the process image with explicit argument and environment
/// vectors.
///
/// # Safety
/// `argv` and `envp` must each be null or a NULL-terminated array of
/// pointers to NUL-terminated strings, live until the call returns.
#[inline]
pub unsafe fn execve(path: &CStr, argv: *const *const u8, envp: *const *const u8) -> isize {
    arch::syscall3(
        u64::from(__NR_execve),
        path.as_ptr() as u64,
        argv as u64,
        envp as u64,
    ) as isize
}

/// CPU time counters, in clock ticks.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Tms {
    /// User time of the caller
    pub tms_utime: i64,
    /// System time of the caller
    pub tms_stime: i64,
    /// User time of reaped children
    pub tms_cutime: i64,
    /// System time of reaped children
    pub tms_cstime: i64,
}

/// Fill `buf` with the caller's CPU time counters. Returns elapsed clock
/// ticks since an arbitrary origin, or a negative error.
#[inline]
pub fn times(buf: &mut Tms) -> isize {
    arch::syscall1(u64::from(__NR_times), core::ptr::from_mut(buf) as u64) as isize
}

/// System identification record: six NUL-terminated name fields.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Utsname {
    pub sysname: [u8; 65],
    pub nodename: [u8; 65],
    pub release: [u8; 65],
    pub version: [u8; 65],
    pub machine: [u8; 65],
    pub domainname: [u8; 65],
}

impl Utsname {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sysname: [0; 65],
            nodename: [0; 65],
            release: [0; 65],
            version: [0; 65],
            machine: [0; 65],
            domainname: [0; 65],
        }
    }

    /// Bytes of a name field up to its NUL terminator.
    #[must_use]
    pub fn name_bytes(field: &[u8; 65]) -> &[u8] {
        let len = field.iter().position(|&b| b == 0).unwrap_or(field.len());
        &field[..len]
    }
}

impl Default for Utsname {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill `buf` with the kernel's identification strings.
#[inline]
pub fn uname(buf: &mut Utsname) -> isize {
    arch::syscall1(u64::from(__NR_uname), core::ptr::from_mut(buf) as u64) as isize
}
