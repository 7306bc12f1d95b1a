//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use fibdev_cli::client::{read_sweep, timing_sweep, write_probe};
use fibdev_cli::output::{
    format_read_line, format_summary_row, format_timing_row, format_write_line, write_to_file,
};
use fibdev_cli::stats::summarize;
use fibdev_cli::{
    CancellationToken, ConsolePresenter, JsonPresenter, ReportPresenter, SweepProgress,
};
use fibdev_core::Variant;
use fibdev_session::FibDevice;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibdev_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone());
    execute(config, &cancel)
}

/// Run against a fresh device until done or `cancel` fires.
pub fn execute(config: &AppConfig, cancel: &CancellationToken) -> Result<()> {
    let device = FibDevice::new(config.device_config())?;
    let presenter: Box<dyn ReportPresenter> = if config.json {
        Box::new(JsonPresenter)
    } else {
        Box::new(ConsolePresenter::new(config.verbose, config.quiet))
    };

    let start = Instant::now();
    let lines = match config.bench {
        Some(variant) => run_timing(config, &device, variant, cancel, presenter.as_ref())?,
        None => run_reads(config, &device, cancel, presenter.as_ref())?,
    };
    presenter.present_stats(&device.stats(), start.elapsed());

    if let Some(path) = &config.output {
        write_to_file(path, &lines)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!(path = %path.display(), lines = lines.len(), "report written");
    }
    Ok(())
}

fn run_reads(
    config: &AppConfig,
    device: &FibDevice,
    cancel: &CancellationToken,
    presenter: &dyn ReportPresenter,
) -> Result<Vec<String>> {
    let codes = write_probe(device, config.write_count(), cancel)?;
    presenter.present_writes(&codes);

    let records = read_sweep(device, config.offset, config.order, cancel)?;
    presenter.present_reads(&records);

    Ok(codes
        .iter()
        .map(|&code| format_write_line(code))
        .chain(records.iter().map(|r| format_read_line(r, true)))
        .collect())
}

fn run_timing(
    config: &AppConfig,
    device: &FibDevice,
    variant: Variant,
    cancel: &CancellationToken,
    presenter: &dyn ReportPresenter,
) -> Result<Vec<String>> {
    let progress = if config.quiet || config.json {
        SweepProgress::hidden()
    } else {
        let total = u64::try_from(config.offset.saturating_add(1)).unwrap_or(0);
        SweepProgress::new(total, variant.name())
    };

    let samples = timing_sweep(device, variant, config.offset, config.samples, cancel, &progress)?;

    if config.summary {
        let rows = summarize(&samples, config.threshold);
        presenter.present_summary(&rows);
        Ok(rows.iter().map(format_summary_row).collect())
    } else {
        presenter.present_timings(&samples);
        Ok(samples.iter().map(format_timing_row).collect())
    }
}

fn ctrlc_handler(cancel: CancellationToken) {
    if let Err(e) = ctrlc::set_handler(move || cancel.cancel()) {
        warn!(error = %e, "could not install Ctrl+C handler");
    }
}
