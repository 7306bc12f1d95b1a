//! Report presenters: console text and JSON.

use std::time::Duration;

use serde::Serialize;

use fibdev_session::DeviceStats;

use crate::client::{ReadRecord, TimingSample};
use crate::output::{
    format_duration, format_read_line, format_summary_row, format_timing_row, format_write_line,
    to_json,
};
use crate::stats::TimingSummary;
use crate::ui::{dim, print_error, print_header};

/// Destination for the reports of a client run.
pub trait ReportPresenter {
    /// Results of a plain write probe.
    fn present_writes(&self, codes: &[u64]);

    /// Results of a read sweep.
    fn present_reads(&self, records: &[ReadRecord]);

    /// Raw timing samples.
    fn present_timings(&self, samples: &[TimingSample]);

    /// Filtered per-index timing means.
    fn present_summary(&self, rows: &[TimingSummary]);

    /// Device counters and total run time.
    fn present_stats(&self, stats: &DeviceStats, elapsed: Duration);

    /// A failure that ended the run.
    fn present_error(&self, error: &str);
}

/// Line-oriented console output.
pub struct ConsolePresenter {
    verbose: bool,
    quiet: bool,
}

impl ConsolePresenter {
    /// `verbose` prints full values and device counters; `quiet` drops headers.
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ReportPresenter for ConsolePresenter {
    fn present_writes(&self, codes: &[u64]) {
        for &code in codes {
            println!("{}", format_write_line(code));
        }
    }

    fn present_reads(&self, records: &[ReadRecord]) {
        for record in records {
            println!("{}", format_read_line(record, self.verbose));
        }
    }

    fn present_timings(&self, samples: &[TimingSample]) {
        for sample in samples {
            println!("{}", format_timing_row(sample));
        }
    }

    fn present_summary(&self, rows: &[TimingSummary]) {
        if !self.quiet {
            print_header("Filtered timings (index device client overhead)");
        }
        for row in rows {
            println!("{}", format_summary_row(row));
        }
    }

    fn present_stats(&self, stats: &DeviceStats, elapsed: Duration) {
        if self.quiet || !self.verbose {
            return;
        }
        print_header("Device");
        println!(
            "{}",
            dim(&format!(
                "opens {} busy {} seeks {} reads {} writes {} in {}",
                stats.opens,
                stats.busy_rejections,
                stats.seeks,
                stats.reads,
                stats.writes,
                format_duration(elapsed)
            ))
        );
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// One JSON document per report on stdout.
pub struct JsonPresenter;

impl JsonPresenter {
    fn emit<T: Serialize + ?Sized>(value: &T) {
        match to_json(value) {
            Ok(json) => println!("{json}"),
            Err(e) => print_error(&e.to_string()),
        }
    }
}

#[derive(Serialize)]
struct StatsReport<'a> {
    #[serde(flatten)]
    stats: &'a DeviceStats,
    elapsed_ns: u128,
}

impl ReportPresenter for JsonPresenter {
    fn present_writes(&self, codes: &[u64]) {
        Self::emit(codes);
    }

    fn present_reads(&self, records: &[ReadRecord]) {
        Self::emit(records);
    }

    fn present_timings(&self, samples: &[TimingSample]) {
        Self::emit(samples);
    }

    fn present_summary(&self, rows: &[TimingSummary]) {
        Self::emit(rows);
    }

    fn present_stats(&self, stats: &DeviceStats, elapsed: Duration) {
        Self::emit(&StatsReport {
            stats,
            elapsed_ns: elapsed.as_nanos(),
        });
    }

    fn present_error(&self, error: &str) {
        Self::emit(&serde_json::json!({ "error": error }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ReadRecord> {
        vec![ReadRecord {
            index: 10,
            value: "55".into(),
        }]
    }

    #[test]
    fn console_modes() {
        let presenter = ConsolePresenter::new(true, false);
        assert!(presenter.verbose);
        assert!(!presenter.quiet);
    }

    #[test]
    fn console_reports_do_not_panic() {
        for (verbose, quiet) in [(false, false), (true, false), (false, true)] {
            let presenter = ConsolePresenter::new(verbose, quiet);
            presenter.present_writes(&[1, 1]);
            presenter.present_reads(&records());
            presenter.present_timings(&[]);
            presenter.present_summary(&[]);
            presenter.present_stats(&DeviceStats::default(), Duration::from_millis(3));
            presenter.present_error("device busy");
        }
    }

    #[test]
    fn json_reports_do_not_panic() {
        let presenter = JsonPresenter;
        presenter.present_writes(&[1]);
        presenter.present_reads(&records());
        presenter.present_stats(&DeviceStats::default(), Duration::ZERO);
        presenter.present_error("cancelled");
    }

    #[test]
    fn stats_report_flattens_counters() {
        let stats = DeviceStats::default();
        let report = StatsReport {
            stats: &stats,
            elapsed_ns: 5,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["elapsed_ns"], 5);
        assert_eq!(value["reads"], 0);
    }
}
