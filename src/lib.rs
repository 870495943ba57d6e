//! Spin lock contention benchmark.
//!
//! Pins one worker per core, makes them fight over a single spin lock and
//! records which core won every acquisition. The resulting log is reduced to
//! a table of (previous owner, next owner) transitions.

pub mod acqlog;
pub mod affinity;
pub mod cluster;
pub mod config;
pub mod error;
pub mod gate;
pub mod harness;
pub mod lock;
pub mod naivelock;
pub mod persist;
pub mod priority;
pub mod report;
pub mod ttaslock;

pub use acqlog::{AcquisitionLog, CoreId};
pub use cluster::ClusterTable;
pub use config::RunConfig;
pub use error::{BenchError, Result};
pub use gate::StartGate;
pub use harness::BenchResult;
pub use lock::{LockKind, RawLock, SpinLock, SpinLockGuard};
