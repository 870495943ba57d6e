use std::cell::UnsafeCell;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use crate::naivelock::NaiveCasLock;
use crate::ttaslock::TtasLock;

/// The bare mutual exclusion capability driven by the harness.
///
/// `unlock` must only be called by the thread that currently holds the lock.
/// Nothing about the hand-off is fair: whoever wins the next CAS owns it.
pub trait RawLock: Default + Send + Sync {
    /// Spins until the calling thread owns the lock.
    fn lock(&self);

    /// Single acquisition attempt.
    fn try_lock(&self) -> bool;

    /// Releases the lock.
    fn unlock(&self);
}

/// Lock variants that can be selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LockKind {
    /// Retries the CAS back to back.
    NaiveCas,
    /// Spins on a load and only issues the CAS once the lock looks free.
    TestAndTestAndSet,
}

impl LockKind {
    pub const ALL: [LockKind; 2] = [LockKind::NaiveCas, LockKind::TestAndTestAndSet];

    /// Stable identifier used in reports and output file names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NaiveCas => "naive_cas",
            Self::TestAndTestAndSet => "ttas",
        }
    }

    /// Runs `visitor` with the raw lock type matching `self`.
    pub(crate) fn dispatch<V: LockVisitor>(self, visitor: V) -> V::Output {
        match self {
            Self::NaiveCas => visitor.visit::<NaiveCasLock>(),
            Self::TestAndTestAndSet => visitor.visit::<TtasLock>(),
        }
    }
}

impl fmt::Display for LockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Monomorphizes a piece of code over the raw lock picked by a [`LockKind`].
pub(crate) trait LockVisitor {
    type Output;
    fn visit<R: RawLock + 'static>(self) -> Self::Output;
}

/// A value protected by a raw spin lock.
pub struct SpinLock<T, R: RawLock> {
    raw: R,              // lock under test
    data: UnsafeCell<T>, // protected data
}

/// Access to the protected data. Releases the lock on drop.
pub struct SpinLockGuard<'a, T, R: RawLock> {
    spin_lock: &'a SpinLock<T, R>,
    _not_send: PhantomData<*const ()>, // must be released by the acquiring thread
}

// Access to `data` is serialized by `raw`.
unsafe impl<T: Send, R: RawLock> Sync for SpinLock<T, R> {}
unsafe impl<T: Send, R: RawLock> Send for SpinLock<T, R> {}

impl<T, R: RawLock> SpinLock<T, R> {
    pub fn new(v: T) -> Self {
        SpinLock {
            raw: R::default(),
            data: UnsafeCell::new(v),
        }
    }

    pub fn lock(&self) -> SpinLockGuard<'_, T, R> {
        self.raw.lock();
        SpinLockGuard {
            spin_lock: self,
            _not_send: PhantomData,
        }
    }

    pub fn try_lock(&self) -> Option<SpinLockGuard<'_, T, R>> {
        self.raw.try_lock().then(|| SpinLockGuard {
            spin_lock: self,
            _not_send: PhantomData,
        })
    }

    pub fn into_inner(self) -> T {
        self.data.into_inner()
    }
}

impl<'a, T, R: RawLock> Drop for SpinLockGuard<'a, T, R> {
    fn drop(&mut self) {
        self.spin_lock.raw.unlock();
    }
}

impl<'a, T, R: RawLock> Deref for SpinLockGuard<'a, T, R> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { &*self.spin_lock.data.get() }
    }
}

impl<'a, T, R: RawLock> DerefMut for SpinLockGuard<'a, T, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *self.spin_lock.data.get() }
    }
}
