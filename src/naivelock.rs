use std::sync::atomic::{AtomicBool, Ordering};

use crate::lock::RawLock;

/// Spin lock that hammers the flag with CAS attempts until one succeeds.
///
/// Every waiter issues a write to the same cache line even while the lock is
/// held, so the line bounces between cores for the whole wait.
#[derive(Debug, Default)]
pub struct NaiveCasLock {
    locked: AtomicBool, // true while held
}

impl NaiveCasLock {
    pub const fn new() -> Self {
        NaiveCasLock {
            locked: AtomicBool::new(false),
        }
    }
}

impl RawLock for NaiveCasLock {
    fn lock(&self) {
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {}
    }

    fn try_lock(&self) -> bool {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_then_unlock() {
        let l = NaiveCasLock::new();
        l.lock();
        assert!(!l.try_lock());
        l.unlock();
        assert!(l.try_lock());
        l.unlock();
    }
}
