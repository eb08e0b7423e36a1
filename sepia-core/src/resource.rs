//! Process resource measurement.
//!
//! Reports the peak resident set size of the current process via
//! `getrusage(RUSAGE_SELF)`. The report writer samples this before and after
//! the generate-and-align phase and emits the delta as a diagnostic line.

use crate::{Result, SepiaError};

/// Peak resident set size of the current process, in kilobytes.
///
/// # Errors
///
/// Returns an error if the underlying `getrusage` call fails, or on
/// platforms without rusage support.
#[cfg(unix)]
pub fn peak_rss_kb() -> Result<i64> {
    let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if rc != 0 {
        return Err(SepiaError::Io(std::io::Error::last_os_error()));
    }
    let usage = unsafe { usage.assume_init() };

    // ru_maxrss is kilobytes on Linux but bytes on macOS.
    let max_rss = usage.ru_maxrss as i64;
    if cfg!(target_os = "macos") {
        Ok(max_rss / 1024)
    } else {
        Ok(max_rss)
    }
}

#[cfg(not(unix))]
pub fn peak_rss_kb() -> Result<i64> {
    Err(SepiaError::Other(
        "peak RSS measurement is only supported on unix platforms".into(),
    ))
}
