//! Run configuration and the fixed benchmark plan.

use std::collections::BTreeSet;

use crate::acqlog::CoreId;
use crate::error::{BenchError, Result};
use crate::lock::LockKind;

/// Cores used by the default plan. Set this to the CPUs you have available.
pub const DEFAULT_CORE_IDS: [CoreId; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

/// Acquisitions performed by each worker.
pub const DEFAULT_ITERATIONS: usize = 50_000;

/// Synthetic hold durations, in spin iterations.
pub const HOLD_DURATIONS: [u64; 3] = [0, 100, 10_000];

/// Directory persisted logs are written to.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Parameters of a single benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub core_ids: Vec<CoreId>,
    pub iterations: usize,
    pub hold: u64,
}

impl RunConfig {
    pub fn new(core_ids: impl Into<Vec<CoreId>>, iterations: usize, hold: u64) -> Self {
        RunConfig {
            core_ids: core_ids.into(),
            iterations,
            hold,
        }
    }

    pub fn workers(&self) -> usize {
        self.core_ids.len()
    }

    /// Number of acquisitions a correct run must log.
    pub fn expected_acquisitions(&self) -> usize {
        self.workers() * self.iterations
    }

    pub fn validate(&self) -> Result<()> {
        if self.core_ids.is_empty() {
            return Err(BenchError::Config {
                detail: "no core ids configured".to_owned(),
            });
        }
        if self.iterations == 0 {
            return Err(BenchError::Config {
                detail: "iterations per worker must be positive".to_owned(),
            });
        }
        let mut seen = BTreeSet::new();
        for &core in &self.core_ids {
            if !seen.insert(core) {
                return Err(BenchError::Config {
                    detail: format!("core {core} listed more than once"),
                });
            }
        }
        Ok(())
    }
}

/// The sequence of runs executed by the benchmark binary, one lock variant
/// after the other for each hold duration.
pub fn default_plan() -> Vec<(LockKind, RunConfig)> {
    let mut plan = Vec::with_capacity(HOLD_DURATIONS.len() * LockKind::ALL.len());
    for hold in HOLD_DURATIONS {
        for kind in LockKind::ALL {
            let config = RunConfig::new(DEFAULT_CORE_IDS, DEFAULT_ITERATIONS, hold);
            plan.push((kind, config));
        }
    }
    plan
}
