//! Scheduling.

use crate::arch;
use crate::sysno::{__NR_sched_yield, __NR_setpriority};

/// Yield execution to another runnable task.
#[inline]
pub fn sched_yield() -> isize {
    arch::syscall0(u64::from(__NR_sched_yield)) as isize
}

/// Forward a priority value; the remaining argument slots stay zero.
#[inline]
pub fn set_priority(prio: i32) -> isize {
    arch::syscall1(u64::from(__NR_setpriority), prio as u64) as isize
}
