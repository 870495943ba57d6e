//! The contention benchmark itself.

use std::hint::black_box;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::acqlog::AcquisitionLog;
use crate::affinity;
use crate::config::RunConfig;
use crate::error::{BenchError, Result};
use crate::gate::StartGate;
use crate::lock::{LockKind, LockVisitor, RawLock, SpinLock};

/// Outcome of one run.
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub elapsed: Duration,   // spawn to last join
    pub log: AcquisitionLog, // acquisition order
}

impl BenchResult {
    pub fn elapsed_micros(&self) -> u128 {
        self.elapsed.as_micros()
    }
}

/// Busy work performed while holding the lock.
#[inline(never)]
pub fn spin(n: u64) {
    for i in 0..n {
        black_box(i);
    }
}

/// Runs the benchmark with the lock variant selected by `kind`.
pub fn run(kind: LockKind, config: &RunConfig) -> Result<BenchResult> {
    debug!(lock = %kind, ?config, "starting run");
    kind.dispatch(Run { config })
}

struct Run<'a> {
    config: &'a RunConfig,
}

impl<'a> LockVisitor for Run<'a> {
    type Output = Result<BenchResult>;

    fn visit<R: RawLock + 'static>(self) -> Self::Output {
        run_with::<R>(self.config)
    }
}

/// Runs the benchmark with an arbitrary raw lock.
///
/// One worker per configured core: pin, check in at the barrier, spin until
/// everyone has checked in, then `iterations` rounds of lock / log / hold /
/// unlock.
///
/// # Panics
///
/// If the log does not hold exactly `workers * iterations` entries once every
/// worker has been joined. That can only be a synchronization bug, and the
/// statistics would be meaningless.
pub fn run_with<R: RawLock + 'static>(config: &RunConfig) -> Result<BenchResult> {
    config.validate()?;

    let workers = config.workers();
    let expected = config.expected_acquisitions();
    let iterations = config.iterations;
    let hold = config.hold;

    // The log is only reachable through the lock under test.
    let log = SpinLock::<AcquisitionLog, R>::new(AcquisitionLog::with_capacity(expected));
    let gate = StartGate::new(workers);

    let start = Instant::now();
    let outcome = thread::scope(|s| {
        let mut handles = Vec::with_capacity(workers);

        for &core in &config.core_ids {
            let log = &log;
            let gate = &gate;
            let spawned = thread::Builder::new()
                .name(format!("worker-{core}"))
                .spawn_scoped(s, move || {
                    affinity::pin_current_thread_or_warn(core);

                    gate.arrive_and_wait();

                    for _ in 0..iterations {
                        let mut guard = log.lock();
                        guard.record(core);
                        spin(hold);
                    }
                });

            match spawned {
                Ok(h) => handles.push((core, h)),
                Err(source) => {
                    // Open the barrier for the workers already waiting on it.
                    gate.force_open();
                    for (_, h) in handles {
                        let _ = h.join();
                    }
                    return Err(BenchError::Spawn { core, source });
                }
            }
        }

        let mut panicked = None;
        for (core, h) in handles {
            if h.join().is_err() && panicked.is_none() {
                panicked = Some(core);
            }
        }
        match panicked {
            Some(core) => Err(BenchError::WorkerPanicked { core }),
            None => Ok(()),
        }
    });
    let elapsed = start.elapsed();
    outcome?;

    let log = log.into_inner();
    assert_eq!(
        log.len(),
        expected,
        "acquisition log holds {} entries, expected {workers} workers x {iterations} iterations",
        log.len()
    );
    debug!(
        elapsed_us = elapsed.as_micros(),
        acquisitions = log.len(),
        "run finished"
    );

    Ok(BenchResult { elapsed, log })
}
