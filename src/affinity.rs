//! Binding worker threads to logical processors.

use tracing::warn;

use crate::acqlog::CoreId;
use crate::error::{BenchError, Result};

/// Restricts the calling thread to `core` for the rest of its life.
#[cfg(target_os = "linux")]
pub fn pin_current_thread(core: CoreId) -> Result<()> {
    if core >= libc::CPU_SETSIZE as usize {
        return Err(BenchError::Pin {
            core,
            reason: format!("core id exceeds CPU_SETSIZE ({})", libc::CPU_SETSIZE),
        });
    }

    // SAFETY: `set` is a plain bitmask owned by this frame; pid 0 targets the
    // calling thread.
    let rc = unsafe {
        let mut set: libc::cpu_set_t = std::mem::zeroed();
        libc::CPU_ZERO(&mut set);
        libc::CPU_SET(core, &mut set);
        libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set)
    };
    if rc != 0 {
        return Err(BenchError::Pin {
            core,
            reason: std::io::Error::last_os_error().to_string(),
        });
    }
    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn pin_current_thread(core: CoreId) -> Result<()> {
    Err(BenchError::Pin {
        core,
        reason: "thread affinity is not supported on this platform".to_owned(),
    })
}

/// Pins the calling thread, downgrading failure to a warning.
///
/// Returns whether the thread ended up pinned. An unpinned worker still runs;
/// the numbers are just noisier.
pub fn pin_current_thread_or_warn(core: CoreId) -> bool {
    match pin_current_thread(core) {
        Ok(()) => true,
        Err(e) => {
            let thread = std::thread::current();
            warn!(thread = ?thread.name(), core, "{e}");
            false
        }
    }
}
