//! Time checks.

use anyhow::{ensure, Result};

use ustd::usyscall::process::Tms;
use ustd::usyscall::time::{self, millis_of, TimeVal};

use super::Check;

pub fn checks() -> Vec<Check> {
    vec![
        Check {
            name: "sleep zero",
            category: "time",
            ensures: "a zero-length wait completes immediately",
            run: sleep_zero,
        },
        Check {
            name: "wall clock",
            category: "time",
            ensures: "the millisecond read matches the raw clock value",
            run: wall_clock,
        },
        Check {
            name: "cpu times",
            category: "time",
            ensures: "the times query fills its record",
            run: cpu_times,
        },
    ]
}

fn sleep_zero() -> Result<()> {
    let before = time::get_time();
    ensure!(time::sleep(0) == 0, "zero-length sleep reported a remainder");
    let after = time::get_time();
    ensure!(before >= 0 && after >= 0, "clock read failed around sleep");
    Ok(())
}

fn wall_clock() -> Result<()> {
    let mut tv = TimeVal::default();
    ensure!(time::get_time_of_day(&mut tv, 0) == 0, "gettimeofday failed");
    ensure!(tv.sec > 0, "seconds not populated");
    ensure!((0..1_000_000).contains(&tv.usec), "microseconds {0}", tv.usec);

    // The composed read folds seconds onto 16 bits before scaling.
    let expect = (tv.sec & 0xffff) * 1000 + tv.usec / 1000;
    ensure!(millis_of(tv) == expect, "millisecond fold mismatch");
    ensure!(time::get_time() >= 0, "composed read failed");
    Ok(())
}

fn cpu_times() -> Result<()> {
    let mut tms = Tms::default();
    let ticks = time::times(&mut tms);
    ensure!(ticks >= 0, "times returned {ticks}");
    ensure!(tms.tms_utime >= 0 && tms.tms_stime >= 0, "negative counters");
    Ok(())
}
