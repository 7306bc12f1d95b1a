//! Report line formats, JSON and file output.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use crate::client::{ReadRecord, TimingSample};
use crate::stats::TimingSummary;

/// Name the device is reported under.
pub const DEVICE_LABEL: &str = "/dev/fibonacci";

/// Values longer than this are elided unless verbose.
const TRUNCATE_AFTER: usize = 100;

/// Format a decimal value for display, potentially truncating.
#[must_use]
pub fn format_result(value: &str, verbose: bool) -> String {
    if !verbose && value.len() > TRUNCATE_AFTER {
        format!(
            "{}...{} ({} digits)",
            &value[..50],
            &value[value.len() - 50..],
            value.len()
        )
    } else {
        value.to_string()
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.000_001 {
        format!("{}ns", d.as_nanos())
    } else if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// `Reading from /dev/fibonacci at offset 10, returned the sequence 55.`
#[must_use]
pub fn format_read_line(record: &ReadRecord, verbose: bool) -> String {
    format!(
        "Reading from {DEVICE_LABEL} at offset {}, returned the sequence {}.",
        record.index,
        format_result(&record.value, verbose)
    )
}

/// `Writing to /dev/fibonacci, returned the sequence 1`
#[must_use]
pub fn format_write_line(code: u64) -> String {
    format!("Writing to {DEVICE_LABEL}, returned the sequence {code}")
}

/// Whitespace-separated raw row: `index device client overhead`.
#[must_use]
pub fn format_timing_row(sample: &TimingSample) -> String {
    format!(
        "{} {} {} {}",
        sample.index, sample.device_ns, sample.client_ns, sample.overhead_ns
    )
}

/// Filtered row with means truncated to whole nanoseconds.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_summary_row(row: &TimingSummary) -> String {
    format!(
        "{} {} {} {}",
        row.index, row.device_ns as i64, row.client_ns as i64, row.overhead_ns as i64
    )
}

/// Pretty-printed JSON for any report.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Write report lines to a file, one per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    for line in lines {
        writeln!(file, "{line}")?;
    }
    file.flush()
}
