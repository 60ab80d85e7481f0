//! Memory checks.

use anyhow::{ensure, Result};

use ustd::usyscall::mm;

use super::Check;

pub fn checks() -> Vec<Check> {
    vec![
        Check {
            name: "anonymous mapping",
            category: "mm",
            ensures: "an anonymous private mapping is readable and writable",
            run: anonymous_mapping,
        },
        Check {
            name: "program break",
            category: "mm",
            ensures: "the break query reports a live address",
            run: program_break,
        },
    ]
}

fn anonymous_mapping() -> Result<()> {
    let addr = mm::mmap(
        0,
        4096,
        mm::PROT_READ | mm::PROT_WRITE,
        mm::MAP_PRIVATE | mm::MAP_ANONYMOUS,
        -1,
        0,
    );
    ensure!(addr > 0, "mmap returned {addr}");
    let p = addr as *mut u8;
    unsafe {
        p.write(0x5a);
        ensure!(p.read() == 0x5a, "mapping did not hold the written byte");
    }
    ensure!(mm::munmap(addr as usize, 4096) == 0, "munmap failed");
    // The address is gone; unmapping it again must be a no-op success or
    // error, but never a crash. Linux reports success here.
    mm::munmap(addr as usize, 4096);
    Ok(())
}

fn program_break() -> Result<()> {
    let cur = mm::brk(0);
    ensure!(cur > 0, "break query returned {cur}");
    Ok(())
}
