//! # fibdev-cli
//!
//! Query client for the Fibonacci device: read and write sweeps, timing
//! statistics, report output, and shell completion.

pub mod client;
pub mod completion;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod stats;
pub mod ui;

pub use client::{ClientError, ReadRecord, SweepOrder, TimingSample};
pub use presenter::{ConsolePresenter, JsonPresenter, ReportPresenter};
pub use progress::{CancellationToken, SweepProgress};
pub use stats::{TimingSummary, DEFAULT_OUTLIER_THRESHOLD};
