//! Cancellation and sweep progress display.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};

use crate::client::ClientError;

/// Cooperative cancellation token shared with the Ctrl+C handler.
///
/// # Example
/// ```
/// use fibdev_cli::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(token.check_cancelled().is_ok());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Checkpoint for sweep loops.
    pub fn check_cancelled(&self) -> Result<(), ClientError> {
        if self.is_cancelled() {
            Err(ClientError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Progress bar over the indices of a sweep.
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Visible bar on stderr for `total` indices.
    #[must_use]
    pub fn new(total: u64, label: &str) -> Self {
        let bar = ProgressBar::new(total);
        if let Ok(style) =
            ProgressStyle::with_template("{prefix} [{bar:40}] {pos}/{len} ({elapsed_precise})")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Bar that draws nothing (quiet mode, tests).
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Mark one index as done.
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Number of indices marked done.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_clones_share_state() {
        let token = CancellationToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
        assert!(matches!(token.check_cancelled(), Err(ClientError::Cancelled)));
    }

    #[test]
    fn hidden_progress_counts() {
        let progress = SweepProgress::hidden();
        progress.advance();
        progress.advance();
        assert_eq!(progress.position(), 2);
        progress.finish();
    }
}
