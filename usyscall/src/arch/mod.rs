//! Per-architecture kernel entry.
//!
//! Every operation in this crate funnels through `syscall0`..`syscall6`:
//! operation code in the architecture's syscall-number register, up to six
//! register-width arguments, one signed register-width result. Unsupplied
//! argument registers reach the kernel zeroed, which is what makes the
//! short-form forwards (`exec`, `set_priority`) deterministic.

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "riscv64")]
mod riscv64;
#[cfg(target_arch = "x86_64")]
mod x86_64;

#[cfg(target_arch = "aarch64")]
pub use aarch64::*;
#[cfg(target_arch = "riscv64")]
pub use riscv64::*;
#[cfg(target_arch = "x86_64")]
pub use x86_64::*;

#[cfg(not(any(
    target_arch = "aarch64",
    target_arch = "riscv64",
    target_arch = "x86_64"
)))]
compile_error!("usyscall has no kernel entry for this target architecture");
