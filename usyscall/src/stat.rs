//! File status records and the extended → legacy transcription.
//!
//! The legacy `Stat` layout varies per architecture, so both records are
//! the `linux-raw-sys` definitions — bit-exact against the target kernel.
//! The extended record carries device numbers as split major/minor fields;
//! `makedev` packs them back into the combined `dev_t` encoding the legacy
//! record expects.

pub use linux_raw_sys::general::{stat as Stat, statx as Statx, statx_timestamp as StatxTimestamp};

/// Pack split device numbers into the combined `dev_t` encoding: major in
/// bits 44..64 and 8..20, minor in bits 12..32 and 0..8.
#[inline]
#[must_use]
pub const fn makedev(major: u32, minor: u32) -> u64 {
    ((major as u64 & 0xffff_f000) << 32)
        | ((major as u64 & 0x0000_0fff) << 8)
        | ((minor as u64 & 0xffff_ff00) << 12)
        | (minor as u64 & 0x0000_00ff)
}

/// An all-zero legacy record, ready for the kernel (or the transcription
/// below) to fill.
#[must_use]
pub fn stat_zeroed() -> Stat {
    // A plain C record; the all-zero bit pattern is a valid value.
    unsafe { core::mem::zeroed() }
}

/// An all-zero extended record.
#[must_use]
pub fn statx_zeroed() -> Statx {
    unsafe { core::mem::zeroed() }
}

/// Transcribe an extended status record into the legacy layout, field by
/// field, reconstructing the packed device numbers from their split
/// major/minor components.
#[must_use]
pub fn stat_from_statx(stx: &Statx) -> Stat {
    let mut st = stat_zeroed();
    st.st_dev = makedev(stx.stx_dev_major, stx.stx_dev_minor);
    st.st_ino = stx.stx_ino;
    st.st_mode = u32::from(stx.stx_mode);
    st.st_nlink = stx.stx_nlink as _;
    st.st_uid = stx.stx_uid;
    st.st_gid = stx.stx_gid;
    st.st_rdev = makedev(stx.stx_rdev_major, stx.stx_rdev_minor);
    st.st_size = stx.stx_size as _;
    st.st_blksize = stx.stx_blksize as _;
    st.st_blocks = stx.stx_blocks as _;
    st.st_atime = stx.stx_atime.tv_sec as _;
    st.st_atime_nsec = stx.stx_atime.tv_nsec as _;
    st.st_mtime = stx.stx_mtime.tv_sec as _;
    st.st_mtime_nsec = stx.stx_mtime.tv_nsec as _;
    st.st_ctime = stx.stx_ctime.tv_sec as _;
    st.st_ctime_nsec = stx.stx_ctime.tv_nsec as _;
    st
}
