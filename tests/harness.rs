use spin_cluster::harness::run;
use spin_cluster::{ClusterTable, LockKind, RunConfig};

const CORES: [usize; 4] = [0, 1, 2, 3];

#[test]
fn log_length_matches_workers_times_iterations() {
    for kind in LockKind::ALL {
        let config = RunConfig::new(CORES, 2_000, 0);
        let res = run(kind, &config).unwrap();
        assert_eq!(res.log.len(), CORES.len() * 2_000, "{kind}");
    }
}

#[test]
fn clusters_account_for_every_transition() {
    let config = RunConfig::new(CORES, 1_000, 10);
    let res = run(LockKind::TestAndTestAndSet, &config).unwrap();
    let clusters = ClusterTable::analyze(res.log.as_slice());

    let sum: usize = clusters.iter().map(|(_, c)| c).sum();
    assert_eq!(sum, res.log.len() - 1);
    assert_eq!(clusters.total(), res.log.len() - 1);

    let pct: u64 = clusters
        .iter()
        .map(|(_, c)| clusters.percent_hundredths(c))
        .sum();
    assert!(pct.abs_diff(10_000) <= clusters.distinct_pairs() as u64);

    for ((a, b), _) in &clusters {
        assert!(CORES.contains(&a) && CORES.contains(&b));
    }
}

#[test]
fn analysis_is_deterministic() {
    let config = RunConfig::new(CORES, 500, 0);
    let res = run(LockKind::NaiveCas, &config).unwrap();
    let first = ClusterTable::analyze(res.log.as_slice());
    let second = ClusterTable::analyze(res.log.as_slice());
    assert_eq!(first, second);
    assert_eq!(
        first.iter().collect::<Vec<_>>(),
        second.iter().collect::<Vec<_>>()
    );
}

#[test]
fn hold_duration_does_not_change_log_length() {
    for hold in [0, 100, 5_000] {
        let config = RunConfig::new([0, 1], 300, hold);
        for kind in LockKind::ALL {
            assert_eq!(run(kind, &config).unwrap().log.len(), 600);
        }
    }
}

#[test]
fn single_worker_only_hands_off_to_itself() {
    let config = RunConfig::new([0], 50, 0);
    let res = run(LockKind::NaiveCas, &config).unwrap();
    let clusters = ClusterTable::analyze(res.log.as_slice());
    assert_eq!(clusters.count(0, 0), 49);
    assert_eq!(clusters.self_handoff_ratio(), 1.0);
}
