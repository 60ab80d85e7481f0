//! Memory management.

use crate::arch;
use crate::sysno::{__NR_brk, __NR_mmap, __NR_munmap};

pub use linux_raw_sys::general::{
    MAP_ANONYMOUS, MAP_FIXED, MAP_PRIVATE, MAP_SHARED, PROT_EXEC, PROT_NONE, PROT_READ, PROT_WRITE,
};

/// Set the program break. Passing 0 queries the current break.
#[inline]
pub fn brk(addr: usize) -> isize {
    arch::syscall1(u64::from(__NR_brk), addr as u64) as isize
}

/// Map memory into the process address space.
///
/// # Arguments
/// * `addr` - Hint address (0 lets the kernel choose)
/// * `len` - Length of the mapping
/// * `prot` - Protection flags (`PROT_READ | PROT_WRITE | PROT_EXEC`)
/// * `flags` - Mapping flags (`MAP_ANONYMOUS | MAP_PRIVATE`, ...)
/// * `fd` - Backing file descriptor (-1 for anonymous)
/// * `offset` - Byte offset into the backing file
///
/// # Returns
/// The mapped address, or a negative error.
#[inline]
pub fn mmap(addr: usize, len: usize, prot: u32, flags: u32, fd: i32, offset: usize) -> isize {
    arch::syscall6(
        u64::from(__NR_mmap),
        addr as u64,
        len as u64,
        u64::from(prot),
        u64::from(flags),
        fd as u64,
        offset as u64,
    ) as isize
}

/// Unmap a memory region.
#[inline]
pub fn munmap(addr: usize, len: usize) -> isize {
    arch::syscall2(u64::from(__NR_munmap), addr as u64, len as u64) as isize
}
