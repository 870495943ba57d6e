use tracing::info;
use tracing_subscriber::EnvFilter;

use spin_cluster::config::{self, DEFAULT_OUTPUT_DIR};
use spin_cluster::{harness, persist, priority, report, ClusterTable};

fn main() -> spin_cluster::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    priority::raise_priority_or_warn();

    for (kind, config) in config::default_plan() {
        let result = harness::run(kind, &config)?;
        let clusters = ClusterTable::analyze(result.log.as_slice());
        report::print_summary(kind.name(), &config, &result, &clusters);

        let path = persist::write_log(DEFAULT_OUTPUT_DIR, kind.name(), &result.log)?;
        info!(
            lock = %kind,
            hold = config.hold,
            self_handoff = clusters.self_handoff_ratio(),
            path = %path.display(),
            "run complete"
        );
    }

    Ok(())
}
