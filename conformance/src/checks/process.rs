//! Process checks.

use std::os::raw::c_void;

use anyhow::{ensure, Result};

use ustd::usyscall::{fs as sys, mm, process};

use super::Check;

pub fn checks() -> Vec<Check> {
    vec![
        Check {
            name: "fork wait status",
            category: "process",
            ensures: "a child's exit code reaches the parent through wait",
            run: fork_wait_status,
        },
        Check {
            name: "clone stack top",
            category: "process",
            ensures: "the child runs on the adjusted top of the given stack",
            run: clone_stack_top,
        },
        Check {
            name: "exec missing path",
            category: "process",
            ensures: "exec of a missing binary fails without replacing the image",
            run: exec_missing_path,
        },
        Check {
            name: "identity",
            category: "process",
            ensures: "pid and ppid are populated",
            run: identity,
        },
    ]
}

fn fork_wait_status() -> Result<()> {
    let pid = process::fork();
    ensure!(pid >= 0, "fork returned {pid}");
    if pid == 0 {
        // Child: raw exit only.
        process::exit(33);
    }
    let mut status = 0;
    let reaped = process::waitpid(pid as i32, Some(&mut status), 0);
    ensure!(reaped == pid, "waitpid reaped {reaped}, expected {pid}");
    ensure!(((status >> 8) & 0xff) == 33, "wait status {status:#x}");
    Ok(())
}

extern "C" fn clone_child(arg: *mut c_void) -> i32 {
    let wfd = unsafe { *arg.cast::<i32>() };
    sys::write(wfd, b"on-stack");
    0
}

fn clone_stack_top() -> Result<()> {
    const STACK_SIZE: usize = 64 * 1024;
    let stack = mm::mmap(
        0,
        STACK_SIZE,
        mm::PROT_READ | mm::PROT_WRITE,
        mm::MAP_PRIVATE | mm::MAP_ANONYMOUS,
        -1,
        0,
    );
    ensure!(stack > 0, "mmap returned {stack}");

    let mut fds = [0i32; 2];
    ensure!(sys::pipe(&mut fds) == 0, "pipe failed");
    let mut wfd = fds[1];

    let pid = unsafe {
        process::clone(
            clone_child,
            std::ptr::from_mut(&mut wfd).cast::<c_void>(),
            stack as *mut u8,
            STACK_SIZE,
            u64::from(process::SIGCHLD),
        )
    };
    ensure!(pid > 0, "clone returned {pid}");

    let mut buf = [0u8; 16];
    let n = sys::read(fds[0], &mut buf);
    let mut status = 0;
    process::waitpid(pid as i32, Some(&mut status), 0);
    sys::close(fds[0]);
    sys::close(fds[1]);
    mm::munmap(stack as usize, STACK_SIZE);

    ensure!(
        n > 0 && &buf[..n as usize] == b"on-stack",
        "child never wrote through the pipe"
    );
    Ok(())
}

fn exec_missing_path() -> Result<()> {
    let ret = process::exec(c"/no/such/binary");
    ensure!(ret < 0, "exec of a missing path returned {ret}");
    Ok(())
}

fn identity() -> Result<()> {
    ensure!(process::getpid() > 0, "getpid");
    ensure!(process::getppid() > 0, "getppid");
    let mut u = process::Utsname::new();
    ensure!(process::uname(&mut u) == 0, "uname failed");
    ensure!(
        !process::Utsname::name_bytes(&u.sysname).is_empty(),
        "empty sysname"
    );
    Ok(())
}
