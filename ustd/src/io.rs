//! Error types, I/O traits, and the console writers.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Classified kernel error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No such file or directory (ENOENT)
    NotFound,
    /// Operation not permitted / access denied (EPERM, EACCES)
    PermissionDenied,
    /// File exists (EEXIST)
    AlreadyExists,
    /// Bad file descriptor (EBADF)
    BadDescriptor,
    /// Bad address (EFAULT)
    BadAddress,
    /// Invalid argument (EINVAL)
    InvalidArgument,
    /// Not a directory (ENOTDIR)
    NotADirectory,
    /// Is a directory (EISDIR)
    IsADirectory,
    /// Directory not empty (ENOTEMPTY)
    DirectoryNotEmpty,
    /// Interrupted by a signal (EINTR)
    Interrupted,
    /// Operation would block (EAGAIN)
    WouldBlock,
    /// Out of memory (ENOMEM)
    OutOfMemory,
    /// Operation not implemented by the kernel under test (ENOSYS)
    NotImplemented,
    /// Too many open files (EMFILE, ENFILE)
    TooManyFiles,
    /// Unexpected end of file (internal, not from the kernel)
    UnexpectedEof,
    /// Write returned zero bytes (internal, not from the kernel)
    WriteZero,
    /// Anything else
    Unknown,
}

impl ErrorKind {
    /// Classify a negative shim result (`-errno`).
    #[must_use]
    pub fn from_errno(raw: isize) -> Self {
        use linux_raw_sys::errno;
        const ENOENT: u32 = errno::ENOENT as u32;
        const EPERM: u32 = errno::EPERM as u32;
        const EACCES: u32 = errno::EACCES as u32;
        const EEXIST: u32 = errno::EEXIST as u32;
        const EBADF: u32 = errno::EBADF as u32;
        const EFAULT: u32 = errno::EFAULT as u32;
        const EINVAL: u32 = errno::EINVAL as u32;
        const ENOTDIR: u32 = errno::ENOTDIR as u32;
        const EISDIR: u32 = errno::EISDIR as u32;
        const ENOTEMPTY: u32 = errno::ENOTEMPTY as u32;
        const EINTR: u32 = errno::EINTR as u32;
        const EAGAIN: u32 = errno::EAGAIN as u32;
        const ENOMEM: u32 = errno::ENOMEM as u32;
        const ENOSYS: u32 = errno::ENOSYS as u32;
        const EMFILE: u32 = errno::EMFILE as u32;
        const ENFILE: u32 = errno::ENFILE as u32;

        match raw.unsigned_abs() as u32 {
            ENOENT => Self::NotFound,
            EPERM | EACCES => Self::PermissionDenied,
            EEXIST => Self::AlreadyExists,
            EBADF => Self::BadDescriptor,
            EFAULT => Self::BadAddress,
            EINVAL => Self::InvalidArgument,
            ENOTDIR => Self::NotADirectory,
            EISDIR => Self::IsADirectory,
            ENOTEMPTY => Self::DirectoryNotEmpty,
            EINTR => Self::Interrupted,
            EAGAIN => Self::WouldBlock,
            ENOMEM => Self::OutOfMemory,
            ENOSYS => Self::NotImplemented,
            EMFILE | ENFILE => Self::TooManyFiles,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NotFound => "no such file or directory",
            Self::PermissionDenied => "permission denied",
            Self::AlreadyExists => "file exists",
            Self::BadDescriptor => "bad file descriptor",
            Self::BadAddress => "bad address",
            Self::InvalidArgument => "invalid argument",
            Self::NotADirectory => "not a directory",
            Self::IsADirectory => "is a directory",
            Self::DirectoryNotEmpty => "directory not empty",
            Self::Interrupted => "interrupted",
            Self::WouldBlock => "operation would block",
            Self::OutOfMemory => "out of memory",
            Self::NotImplemented => "operation not implemented",
            Self::TooManyFiles => "too many open files",
            Self::UnexpectedEof => "unexpected end of file",
            Self::WriteZero => "write returned zero bytes",
            Self::Unknown => "unknown error",
        };
        f.write_str(msg)
    }
}

/// I/O error: a classified kind plus the raw errno it came from (0 for
/// errors this layer synthesizes itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    errno: i32,
}

impl Error {
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, errno: 0 }
    }

    /// Build an error from a negative shim result.
    #[must_use]
    pub fn from_errno(raw: isize) -> Self {
        Self {
            kind: ErrorKind::from_errno(raw),
            errno: raw.unsigned_abs() as i32,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The errno behind this error, if it came from the kernel.
    #[must_use]
    pub fn raw_errno(&self) -> i32 {
        self.errno
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errno != 0 {
            write!(f, "{} (errno {})", self.kind, self.errno)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl core::error::Error for Error {}

/// Result type for I/O operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Types bytes can be read from.
pub trait Read {
    /// Read bytes into a buffer, returning the count read.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Read exactly `buf.len()` bytes or fail with `UnexpectedEof`.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut offset = 0;
        while offset < buf.len() {
            let n = self.read(&mut buf[offset..])?;
            if n == 0 {
                return Err(Error::new(ErrorKind::UnexpectedEof));
            }
            offset += n;
        }
        Ok(())
    }

    /// Read until end of stream, appending to `out`. Returns the byte
    /// count appended.
    fn read_to_end(&mut self, out: &mut Vec<u8>) -> Result<usize> {
        let mut chunk = [0u8; 512];
        let mut total = 0;
        loop {
            let n = self.read(&mut chunk)?;
            if n == 0 {
                return Ok(total);
            }
            out.extend_from_slice(&chunk[..n]);
            total += n;
        }
    }
}

/// Types bytes can be written to.
pub trait Write {
    /// Write bytes from a buffer, returning the count written.
    fn write(&mut self, buf: &[u8]) -> Result<usize>;

    /// Write the whole buffer or fail with `WriteZero`.
    fn write_all(&mut self, mut buf: &[u8]) -> Result<()> {
        while !buf.is_empty() {
            let n = self.write(buf)?;
            if n == 0 {
                return Err(Error::new(ErrorKind::WriteZero));
            }
            buf = &buf[n..];
        }
        Ok(())
    }
}

// ============================================================================
// Console writers
// ============================================================================

const STDOUT_FD: i32 = 1;
const STDERR_FD: i32 = 2;

// One lock per stream keeps whole formatted writes line-atomic when test
// threads print concurrently.
static STDOUT_LOCK: spin::Mutex<()> = spin::Mutex::new(());
static STDERR_LOCK: spin::Mutex<()> = spin::Mutex::new(());

/// Unbuffered stdout writer.
pub struct Stdout;

/// Unbuffered stderr writer.
pub struct Stderr;

fn write_fd(fd: i32, s: &str) -> fmt::Result {
    let mut bytes = s.as_bytes();
    while !bytes.is_empty() {
        let n = usyscall::fs::write(fd, bytes);
        if n <= 0 {
            return Err(fmt::Error);
        }
        bytes = &bytes[n as usize..];
    }
    Ok(())
}

impl fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        write_fd(STDOUT_FD, s)
    }
}

impl fmt::Write for Stderr {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        write_fd(STDERR_FD, s)
    }
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments<'_>) {
    use core::fmt::Write as _;
    let _guard = STDOUT_LOCK.lock();
    let _ = Stdout.write_fmt(args);
}

#[doc(hidden)]
pub fn _eprint(args: fmt::Arguments<'_>) {
    use core::fmt::Write as _;
    let _guard = STDERR_LOCK.lock();
    let _ = Stderr.write_fmt(args);
}
