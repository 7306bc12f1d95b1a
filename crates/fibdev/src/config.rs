//! Application configuration from CLI flags and environment.

use clap::Parser;

use fibdev_cli::{SweepOrder, DEFAULT_OUTLIER_THRESHOLD};
use fibdev_core::Variant;
use fibdev_session::DeviceConfig;

/// Fibonacci device client: write probes, read sweeps and timing runs.
#[derive(Parser, Debug)]
#[command(name = "fibdev", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Highest index to visit.
    #[arg(long, default_value_t = 100, env = "FIBDEV_OFFSET")]
    pub offset: i64,

    /// Time writes of this variant (name or selector code) instead of reading.
    #[arg(short, long, value_name = "VARIANT")]
    pub bench: Option<Variant>,

    /// Timed writes per index.
    #[arg(long, default_value_t = 100)]
    pub samples: usize,

    /// Print filtered per-index means instead of raw timing rows.
    #[arg(long)]
    pub summary: bool,

    /// Z-score above which a timing sample is dropped.
    #[arg(long, default_value_t = DEFAULT_OUTLIER_THRESHOLD)]
    pub threshold: f64,

    /// Generator serving reads.
    #[arg(long, default_value = "string-swap", env = "FIBDEV_READ_VARIANT")]
    pub read_variant: Variant,

    /// Order of the read sweep.
    #[arg(long, value_enum, default_value_t = SweepOrder::Both)]
    pub order: SweepOrder,

    /// Plain writes issued before reading; defaults to one per index.
    #[arg(long)]
    pub writes: Option<usize>,

    /// Emit reports as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the report lines to this file.
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,

    /// Quiet mode (no headers or progress).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (full values, device counters).
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Device settings implied by the flags.
    #[must_use]
    pub fn device_config(&self) -> DeviceConfig {
        DeviceConfig {
            read_variant: self.read_variant,
        }
    }

    /// Number of plain writes in a read run.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
            .unwrap_or_else(|| usize::try_from(self.offset.saturating_add(1)).unwrap_or(0))
    }
}
