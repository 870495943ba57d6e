//! Best-effort process priority elevation.

use std::io;

use tracing::{debug, warn};

use crate::error::{BenchError, Result};

/// Niceness requested for the benchmark process.
pub const TARGET_NICENESS: i32 = -19;

#[cfg(any(target_os = "linux", target_os = "emscripten"))]
unsafe fn errno_location() -> *mut libc::c_int {
    libc::__errno_location()
}

#[cfg(target_os = "android")]
unsafe fn errno_location() -> *mut libc::c_int {
    libc::__errno()
}

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
unsafe fn errno_location() -> *mut libc::c_int {
    libc::__error()
}

#[cfg(any(
    target_os = "linux",
    target_os = "emscripten",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd"
))]
pub fn raise_priority() -> Result<()> {
    // nice(2) may legitimately return -1, so errno is the only reliable
    // failure signal.
    // SAFETY: errno is thread local; nice only adjusts this process.
    let (ret, errno) = unsafe {
        *errno_location() = 0;
        let ret = libc::nice(TARGET_NICENESS);
        (ret, *errno_location())
    };
    check_nice(ret, errno)?;
    debug!(niceness = ret, "raised process priority");
    Ok(())
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "emscripten",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd"
)))]
pub fn raise_priority() -> Result<()> {
    Err(BenchError::Priority {
        reason: "not supported on this platform".to_owned(),
    })
}

/// Interprets the return value of `nice` together with the errno observed
/// right after the call.
fn check_nice(ret: i32, errno: i32) -> Result<()> {
    if ret == -1 && errno != 0 {
        return Err(BenchError::Priority {
            reason: format!(
                "{}, you might need to use sudo",
                io::Error::from_raw_os_error(errno)
            ),
        });
    }
    Ok(())
}

/// Raises the process priority, emitting a single warning when denied.
pub fn raise_priority_or_warn() -> bool {
    match raise_priority() {
        Ok(()) => true,
        Err(e) => {
            warn!("{e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minus_one_without_errno_is_success() {
        check_nice(-1, 0).unwrap();
        check_nice(-19, 0).unwrap();
        check_nice(0, 0).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn minus_one_with_errno_is_denied() {
        match check_nice(-1, libc::EPERM) {
            Err(BenchError::Priority { reason }) => assert!(reason.contains("sudo")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
