//! Console summary of a run.

use std::fmt::Write as _;

use crate::cluster::ClusterTable;
use crate::config::RunConfig;
use crate::harness::BenchResult;

const CELL_WIDTH: usize = 40;
const CELLS_PER_ROW: usize = 4;

/// Renders hundredths of a percent as `12.34`.
pub fn format_percent(hundredths: u64) -> String {
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Fixed-format summary: configuration, elapsed time, then the cluster table
/// four cells to a row.
pub fn format_summary(
    name: &str,
    config: &RunConfig,
    result: &BenchResult,
    clusters: &ClusterTable,
) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "{name}\n\titers      : {}\n\thold_iters : {}\n\ttime       : {}us\n\tclusters   : ",
        config.iterations,
        config.hold,
        result.elapsed_micros()
    );

    for (i, ((a, b), count)) in clusters.iter().enumerate() {
        if i % CELLS_PER_ROW == 0 {
            out.push_str("\n\t\t");
        }
        let cell = format!(
            "({a},{b}): {}, {count}",
            format_percent(clusters.percent_hundredths(count))
        );
        let _ = write!(out, "{cell:<CELL_WIDTH$}");
    }
    out.push('\n');
    out
}

pub fn print_summary(
    name: &str,
    config: &RunConfig,
    result: &BenchResult,
    clusters: &ClusterTable,
) {
    print!("{}", format_summary(name, config, result, clusters));
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::acqlog::AcquisitionLog;

    #[test]
    fn percent_always_has_two_decimals() {
        assert_eq!(format_percent(2000), "20.00");
        assert_eq!(format_percent(5), "0.05");
        assert_eq!(format_percent(10_000), "100.00");
    }

    #[test]
    fn summary_layout() {
        let log = AcquisitionLog::from(vec![0, 0, 1, 0, 1, 1]);
        let clusters = ClusterTable::analyze(log.as_slice());
        let result = BenchResult {
            elapsed: Duration::from_micros(1_234),
            log,
        };
        let config = RunConfig::new([0, 1], 3, 0);

        let s = format_summary("ttas", &config, &result, &clusters);
        let lines: Vec<_> = s.lines().collect();
        assert_eq!(lines[0], "ttas");
        assert_eq!(lines[1], "\titers      : 3");
        assert_eq!(lines[2], "\thold_iters : 0");
        assert_eq!(lines[3], "\ttime       : 1234us");
        assert_eq!(lines[4], "\tclusters   : ");
        let row = lines[5].strip_prefix("\t\t").unwrap();
        assert_eq!(row.len(), 4 * CELL_WIDTH);
        let cells: Vec<_> = row
            .as_bytes()
            .chunks(CELL_WIDTH)
            .map(|c| std::str::from_utf8(c).unwrap().trim_end())
            .collect();
        assert_eq!(
            cells,
            [
                "(0,0): 20.00, 1",
                "(0,1): 40.00, 2",
                "(1,0): 20.00, 1",
                "(1,1): 20.00, 1",
            ]
        );
        assert_eq!(lines.len(), 6);
    }
}
