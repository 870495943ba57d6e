//! Re-analyzes persisted acquisition logs.
//!
//! Usage: `cluster_log <file>...`

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use spin_cluster::report::format_percent;
use spin_cluster::{persist, ClusterTable};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: cluster_log <file>...");
        return ExitCode::FAILURE;
    }

    let mut status = ExitCode::SUCCESS;
    for path in &paths {
        let log = match persist::read_log(path) {
            Ok(log) => log,
            Err(e) => {
                error!(path, "{e}");
                status = ExitCode::FAILURE;
                continue;
            }
        };

        let clusters = ClusterTable::analyze(log.as_slice());
        println!(
            "{path}: {} acquisitions, {} transitions",
            log.len(),
            clusters.total()
        );
        for ((a, b), count) in &clusters {
            println!(
                "\t({a},{b}): {}, {count}",
                format_percent(clusters.percent_hundredths(count))
            );
        }
    }
    status
}
