//! Query client: request sequences issued against an open device.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use fibdev_core::Variant;
use fibdev_session::{FibDevice, SessionError, Whence};

use crate::progress::{CancellationToken, SweepProgress};

/// Payload of a plain write. Its 15 bytes name no variant.
pub const WRITE_PAYLOAD: &[u8] = b"testing writing";

/// Error type for client runs.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The device rejected or failed a request.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The run was interrupted.
    #[error("sweep cancelled")]
    Cancelled,
}

/// Order in which a read sweep visits indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SweepOrder {
    /// `0..=max`.
    Ascending,
    /// `max..=0`.
    Descending,
    /// Ascending, then descending.
    Both,
}

impl SweepOrder {
    /// Indices visited, produced lazily: `max_offset` may be far past the
    /// device maximum.
    fn indices(self, max_offset: i64) -> impl Iterator<Item = i64> {
        let empty = 1..=0;
        let up = match self {
            Self::Ascending | Self::Both => 0..=max_offset,
            Self::Descending => empty.clone(),
        };
        let down = match self {
            Self::Descending | Self::Both => 0..=max_offset,
            Self::Ascending => empty,
        };
        up.chain(down.rev())
    }
}

/// One read: the cursor the device settled on and the value it returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadRecord {
    /// Cursor after the seek.
    pub index: i64,
    /// Decimal value read.
    pub value: String,
}

/// One timed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimingSample {
    /// Cursor the write ran against.
    pub index: i64,
    /// Time reported by the device.
    pub device_ns: u64,
    /// Round trip measured by the client.
    pub client_ns: u64,
    /// `client_ns - device_ns`: dispatch overhead.
    pub overhead_ns: i64,
}

/// Write request whose length selects `variant`.
#[must_use]
pub fn request_for(variant: Variant) -> &'static [u8] {
    &WRITE_PAYLOAD[..variant.code()]
}

fn signed_diff(a: u64, b: u64) -> i64 {
    let a = i64::try_from(a).unwrap_or(i64::MAX);
    let b = i64::try_from(b).unwrap_or(i64::MAX);
    a.saturating_sub(b)
}

/// Seek to and read every index up to `max_offset`.
pub fn read_sweep(
    device: &FibDevice,
    max_offset: i64,
    order: SweepOrder,
    cancel: &CancellationToken,
) -> Result<Vec<ReadRecord>, ClientError> {
    let mut session = device.open()?;
    let mut records = Vec::new();

    for i in order.indices(max_offset) {
        cancel.check_cancelled()?;
        let index = session.seek(i, Whence::Set);
        let value = session.read(1)?;
        records.push(ReadRecord { index, value });
    }

    session.close();
    debug!(count = records.len(), "read sweep complete");
    Ok(records)
}

/// Issue `count` plain writes and collect what the device returned.
pub fn write_probe(
    device: &FibDevice,
    count: usize,
    cancel: &CancellationToken,
) -> Result<Vec<u64>, ClientError> {
    let session = device.open()?;
    let mut codes = Vec::new();
    for _ in 0..count {
        cancel.check_cancelled()?;
        codes.push(session.write(WRITE_PAYLOAD)?);
    }
    session.close();
    Ok(codes)
}

/// Time `samples` writes of `variant` at every index up to `max_offset`.
pub fn timing_sweep(
    device: &FibDevice,
    variant: Variant,
    max_offset: i64,
    samples: usize,
    cancel: &CancellationToken,
    progress: &SweepProgress,
) -> Result<Vec<TimingSample>, ClientError> {
    let mut session = device.open()?;
    let request = request_for(variant);
    let mut results = Vec::new();

    info!(%variant, max_offset, samples, "timing sweep");
    for i in 0..=max_offset {
        cancel.check_cancelled()?;
        for _ in 0..samples {
            let index = session.seek(i, Whence::Set);
            let start = Instant::now();
            let device_ns = session.write(request)?;
            let client_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
            results.push(TimingSample {
                index,
                device_ns,
                client_ns,
                overhead_ns: signed_diff(client_ns, device_ns),
            });
        }
        progress.advance();
    }

    progress.finish();
    session.close();
    Ok(results)
}
