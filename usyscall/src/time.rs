//! Wall-clock and interval time.

use crate::arch;
use crate::sysno::{__NR_gettimeofday, __NR_nanosleep};

pub use crate::process::{times, Tms};

/// Seconds + microseconds wall-clock value.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeVal {
    pub sec: i64,
    pub usec: i64,
}

/// Seconds + nanoseconds interval for the timed wait.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeSpec {
    pub sec: i64,
    pub nsec: i64,
}

/// Read the wall clock into `tv`. The timezone slot is forwarded
/// untouched; pass 0.
#[inline]
pub fn get_time_of_day(tv: &mut TimeVal, tz: usize) -> isize {
    arch::syscall2(
        u64::from(__NR_gettimeofday),
        core::ptr::from_mut(tv) as u64,
        tz as u64,
    ) as isize
}

/// Millisecond view of a wall-clock value. Only the low 16 bits of the
/// seconds field participate, so the result wraps about every 18.2 hours;
/// callers compare short intervals only.
#[inline]
#[must_use]
pub const fn millis_of(tv: TimeVal) -> i64 {
    (tv.sec & 0xffff) * 1000 + tv.usec / 1000
}

/// Current wall-clock time in (wrapping) milliseconds, or -1 when the
/// clock read fails.
#[inline]
pub fn get_time() -> i64 {
    let mut tv = TimeVal::default();
    if get_time_of_day(&mut tv, 0) == 0 {
        millis_of(tv)
    } else {
        -1
    }
}

/// Block for `seconds` whole seconds; no sub-second granularity. Returns
/// the whole seconds left if the wait was cut short, 0 once it ran to
/// completion.
pub fn sleep(seconds: u64) -> i64 {
    let mut tv = TimeSpec {
        sec: seconds as i64,
        nsec: 0,
    };
    // The same record carries the request in and the remainder out.
    let ptr = core::ptr::from_mut(&mut tv) as u64;
    if arch::syscall2(u64::from(__NR_nanosleep), ptr, ptr) != 0 {
        return tv.sec;
    }
    0
}
