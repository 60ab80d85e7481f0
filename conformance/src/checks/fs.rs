//! Filesystem checks.

use anyhow::{bail, ensure, Context, Result};
use std::ffi::CString;

use ustd::fs::{self, File};
use ustd::io::{Read, Write};
use ustd::usyscall::fs as sys;
use ustd::usyscall::stat::stat_zeroed;

use super::{tmp_path, Check};

pub fn checks() -> Vec<Check> {
    vec![
        Check {
            name: "descriptor round trip",
            category: "fs",
            ensures: "open hands out a descriptor close accepts exactly once",
            run: descriptor_round_trip,
        },
        Check {
            name: "write read back",
            category: "fs",
            ensures: "bytes written come back identical and in order",
            run: write_read_back,
        },
        Check {
            name: "hard link",
            category: "fs",
            ensures: "link/unlink anchor to the working directory",
            run: hard_link,
        },
        Check {
            name: "directory listing",
            category: "fs",
            ensures: "created entries show up via getdents",
            run: directory_listing,
        },
        Check {
            name: "working directory",
            category: "fs",
            ensures: "chdir is observable through getcwd",
            run: working_directory,
        },
        Check {
            name: "status transcription",
            category: "fs",
            ensures: "legacy and extended status queries agree",
            run: status_transcription,
        },
    ]
}

fn cstr(s: &str) -> Result<CString> {
    CString::new(s).context("path with interior NUL")
}

fn descriptor_round_trip() -> Result<()> {
    let path = cstr(&tmp_path("fd"))?;
    let fd = sys::openat(sys::AT_FDCWD, &path, sys::O_CREAT | sys::O_WRONLY);
    ensure!(fd >= 0, "openat returned {fd}");
    ensure!(sys::close(fd as i32) == 0, "close rejected a live descriptor");
    ensure!(
        sys::close(fd as i32) < 0,
        "close accepted an already-closed descriptor"
    );
    ensure!(sys::unlink(&path) == 0, "unlink failed");
    Ok(())
}

fn write_read_back() -> Result<()> {
    let path = tmp_path("rw");
    let payload = b"0123456789abcdefghij";
    File::create(&path)?.write_all(payload)?;

    let mut back = Vec::new();
    File::open(&path)?.read_to_end(&mut back)?;
    fs::remove_file(&path)?;
    ensure!(back == payload, "read back {back:?}");
    Ok(())
}

fn hard_link() -> Result<()> {
    let old = tmp_path("ln-a");
    let new = tmp_path("ln-b");
    File::create(&old)?.write_all(b"aliased")?;
    fs::hard_link(&old, &new)?;

    let mut via_link = Vec::new();
    File::open(&new)?.read_to_end(&mut via_link)?;
    fs::remove_file(&new)?;
    fs::remove_file(&old)?;
    ensure!(via_link == b"aliased", "link content {via_link:?}");

    if File::open(&new).is_ok() {
        bail!("unlinked path still opens");
    }
    Ok(())
}

fn directory_listing() -> Result<()> {
    let dir = tmp_path("ls");
    fs::create_dir(&dir)?;
    File::create(&format!("{dir}/marker"))?.write_all(b"x")?;

    let mut seen = false;
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        if entry.file_name() == "marker" {
            ensure!(entry.file_type().is_file(), "marker listed as non-file");
            seen = true;
        }
    }
    fs::remove_file(&format!("{dir}/marker"))?;
    fs::remove_dir(&dir)?;
    ensure!(seen, "created entry missing from listing");
    Ok(())
}

fn working_directory() -> Result<()> {
    let original = ustd::env::current_dir()?;
    ustd::env::set_current_dir("/tmp")?;
    let now = ustd::env::current_dir()?;
    ustd::env::set_current_dir(&original)?;
    ensure!(now == "/tmp", "getcwd reported {now:?}");
    Ok(())
}

fn status_transcription() -> Result<()> {
    let path = cstr(&tmp_path("stat"))?;
    let fd = sys::openat(sys::AT_FDCWD, &path, sys::O_CREAT | sys::O_WRONLY);
    ensure!(fd >= 0, "openat returned {fd}");
    ensure!(sys::write(fd as i32, b"12345") == 5, "short write");

    let mut direct = stat_zeroed();
    let mut transcribed = stat_zeroed();
    ensure!(sys::fstat(fd as i32, &mut direct) == 0, "fstat failed");
    ensure!(
        sys::fstat_statx(fd as i32, &mut transcribed) == 0,
        "statx route failed"
    );
    sys::close(fd as i32);
    sys::unlink(&path);

    ensure!(direct.st_ino == transcribed.st_ino, "inode mismatch");
    ensure!(direct.st_mode == transcribed.st_mode, "mode mismatch");
    ensure!(
        direct.st_size as u64 == 5 && transcribed.st_size as u64 == 5,
        "size mismatch"
    );
    Ok(())
}
