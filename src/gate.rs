use std::hint::spin_loop;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Spin barrier holding every worker back until all of them have arrived.
///
/// Waiting never sleeps or yields, so the release latency is roughly one
/// cache line transfer.
#[derive(Debug)]
pub struct StartGate {
    arrived: AtomicUsize, // workers checked in
    parties: usize,       // workers expected
}

impl StartGate {
    pub const fn new(parties: usize) -> Self {
        StartGate {
            arrived: AtomicUsize::new(0),
            parties,
        }
    }

    /// Checks in without waiting.
    pub fn arrive(&self) {
        self.arrived.fetch_add(1, Ordering::AcqRel);
    }

    pub fn is_open(&self) -> bool {
        self.arrived.load(Ordering::Acquire) >= self.parties
    }

    /// Spins until every party has arrived.
    pub fn wait(&self) {
        while !self.is_open() {
            spin_loop();
        }
    }

    pub fn arrive_and_wait(&self) {
        self.arrive();
        self.wait();
    }

    /// Lets everyone through, whether or not they all arrived.
    pub fn force_open(&self) {
        self.arrived.fetch_add(self.parties, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;
    use std::thread;
    use std::time::Duration;

    use super::*;

    const PARTIES: usize = 4;

    #[test]
    fn nobody_passes_before_the_last_arrival() {
        let gate = StartGate::new(PARTIES);
        let passed: Vec<AtomicBool> = (0..PARTIES - 1).map(|_| AtomicBool::new(false)).collect();

        thread::scope(|s| {
            for flag in &passed {
                let gate = &gate;
                s.spawn(move || {
                    gate.arrive_and_wait();
                    flag.store(true, Ordering::Release);
                });
            }

            while gate.arrived.load(Ordering::Acquire) < PARTIES - 1 {
                spin_loop();
            }
            thread::sleep(Duration::from_millis(50));
            assert!(!gate.is_open());
            assert!(passed.iter().all(|f| !f.load(Ordering::Acquire)));

            gate.arrive();
        });

        assert!(gate.is_open());
        assert!(passed.iter().all(|f| f.load(Ordering::Acquire)));
    }

    #[test]
    fn force_open_releases_waiters() {
        let gate = StartGate::new(PARTIES);
        thread::scope(|s| {
            s.spawn(|| gate.arrive_and_wait());
            gate.force_open();
        });
        assert!(gate.is_open());
    }
}
