use std::sync::atomic::{AtomicBool, Ordering};

use crate::lock::RawLock;

/// Test-and-test-and-set spin lock.
///
/// Waiters spin on a plain load, which keeps the line shared in their caches,
/// and only try the CAS once they see the lock free. A lost CAS sends the
/// waiter back to the load loop.
#[derive(Debug, Default)]
pub struct TtasLock {
    locked: AtomicBool, // true while held
}

impl TtasLock {
    pub const fn new() -> Self {
        TtasLock {
            locked: AtomicBool::new(false),
        }
    }
}

impl RawLock for TtasLock {
    fn lock(&self) {
        loop {
            while self.locked.load(Ordering::Relaxed) {}

            if self
                .locked
                .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
                .is_ok()
            {
                break;
            }
        }
    }

    fn try_lock(&self) -> bool {
        !self.locked.load(Ordering::Relaxed)
            && self
                .locked
                .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
                .is_ok()
    }

    fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
    }
}
