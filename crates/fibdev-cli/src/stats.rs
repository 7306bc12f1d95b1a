//! Timing statistics: z-score outlier rejection and per-index means.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::client::TimingSample;

/// Default z-score above which a sample is discarded.
pub const DEFAULT_OUTLIER_THRESHOLD: f64 = 2.0;

/// Filtered means of the three timing series at one index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingSummary {
    /// Cursor the samples ran against.
    pub index: i64,
    /// Filtered mean of the device-reported time.
    pub device_ns: f64,
    /// Filtered mean of the client round trip.
    pub client_ns: f64,
    /// Filtered mean of the dispatch overhead.
    pub overhead_ns: f64,
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
#[allow(clippy::cast_precision_loss)]
fn std_dev(values: &[f64], mean: f64) -> f64 {
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Keep the samples whose absolute z-score is below `threshold`.
///
/// A series with zero spread has no outliers and is returned whole.
#[must_use]
pub fn filter_outliers(values: &[f64], threshold: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mean = mean(values);
    let std = std_dev(values, mean);
    if std == 0.0 {
        return values.to_vec();
    }
    values
        .iter()
        .copied()
        .filter(|v| ((v - mean) / std).abs() < threshold)
        .collect()
}

/// Mean of the samples surviving [`filter_outliers`], or `None` if none do.
#[must_use]
pub fn filtered_mean(values: &[f64], threshold: f64) -> Option<f64> {
    let kept = filter_outliers(values, threshold);
    (!kept.is_empty()).then(|| mean(&kept))
}

/// Collapse raw samples into one filtered row per index, ascending.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(samples: &[TimingSample], threshold: f64) -> Vec<TimingSummary> {
    let mut by_index: BTreeMap<i64, [Vec<f64>; 3]> = BTreeMap::new();
    for s in samples {
        let series = by_index.entry(s.index).or_default();
        series[0].push(s.device_ns as f64);
        series[1].push(s.client_ns as f64);
        series[2].push(s.overhead_ns as f64);
    }

    by_index
        .into_iter()
        .filter_map(|(index, [device, client, overhead])| {
            Some(TimingSummary {
                index,
                device_ns: filtered_mean(&device, threshold)?,
                client_ns: filtered_mean(&client, threshold)?,
                overhead_ns: filtered_mean(&overhead, threshold)?,
            })
        })
        .collect()
}
