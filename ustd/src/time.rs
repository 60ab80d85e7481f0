//! Time conveniences over the raw shim.

/// Block for whole seconds; returns the seconds left if the wait was cut
/// short, 0 once it ran to completion.
pub fn sleep(seconds: u64) -> i64 {
    usyscall::time::sleep(seconds)
}

/// Wall clock in wrapping milliseconds (low 16 bits of the seconds field
/// only), or -1 when the clock read fails.
pub fn now_millis() -> i64 {
    usyscall::time::get_time()
}
