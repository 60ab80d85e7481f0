//! Operation codes for the target kernel.
//!
//! All numbers come from the Linux uapi tables via `linux-raw-sys`, which
//! selects the right values per target architecture. Nothing in this crate
//! hand-maintains a syscall-number table.

pub use linux_raw_sys::general::{
    __NR_brk, __NR_chdir, __NR_clone, __NR_close, __NR_dup, __NR_dup3, __NR_execve, __NR_exit,
    __NR_fstat, __NR_getcwd, __NR_getdents64, __NR_getpid, __NR_getppid, __NR_gettimeofday,
    __NR_linkat, __NR_mkdirat, __NR_mmap, __NR_mount, __NR_munmap, __NR_nanosleep, __NR_openat,
    __NR_pipe2, __NR_read, __NR_sched_yield, __NR_setpriority, __NR_statx, __NR_times,
    __NR_umount2, __NR_uname, __NR_unlinkat, __NR_wait4, __NR_write,
};
