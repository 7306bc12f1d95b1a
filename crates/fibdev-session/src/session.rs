//! An open session: cursor state, seek, read and timed writes.

use std::hint::black_box;
use std::time::{Duration, Instant};

use parking_lot::MutexGuard;
use tracing::{debug, trace, warn};

use fibdev_core::{FibError, FibonacciAlgorithm, Variant, INVALID_VARIANT_RESULT, MAX_INDEX};

use crate::device::FibDevice;
use crate::error::SessionError;

/// Reference point of a seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// Absolute index.
    Set,
    /// Relative to the current cursor.
    Cursor,
    /// Counted back from [`MAX_INDEX`]: the target is `MAX_INDEX - offset`.
    End,
}

impl Whence {
    /// Map `SEEK_SET`/`SEEK_CUR`/`SEEK_END` (0, 1, 2).
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Set),
            1 => Some(Self::Cursor),
            2 => Some(Self::End),
            _ => None,
        }
    }
}

/// Exclusive handle on a [`FibDevice`].
///
/// Exclusivity is released when the session is closed or dropped, whichever
/// comes first. The handle stays on the thread that opened it.
pub struct Session<'dev> {
    device: &'dev FibDevice,
    cursor: i64,
    _lease: MutexGuard<'dev, ()>,
}

impl<'dev> Session<'dev> {
    pub(crate) fn new(device: &'dev FibDevice, lease: MutexGuard<'dev, ()>) -> Self {
        Self {
            device,
            cursor: 0,
            _lease: lease,
        }
    }

    /// Current Fibonacci index.
    #[must_use]
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    fn index(&self) -> u64 {
        // Clamped to [0, MAX_INDEX] by every seek.
        self.cursor.unsigned_abs()
    }

    /// Move the cursor, clamping the target to `[0, MAX_INDEX]`.
    ///
    /// Never fails; returns the new cursor.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> i64 {
        let target = match whence {
            Whence::Set => offset,
            Whence::Cursor => self.cursor.saturating_add(offset),
            Whence::End => MAX_INDEX.saturating_sub(offset),
        };
        self.cursor = target.clamp(0, MAX_INDEX);
        self.device.counters().record_seek();
        debug!(offset, ?whence, cursor = self.cursor, "seek");
        self.cursor
    }

    /// Decimal rendering of `F(cursor)` from the configured read variant.
    ///
    /// `max_len` is advisory: the full rendering is always returned.
    pub fn read(&self, max_len: usize) -> Result<String, SessionError> {
        self.device.counters().record_read();
        let variant = self.device.config().read_variant;
        let k = self.index();
        trace!(k, max_len, %variant, "read");
        let value = self.device.registry().get(variant).compute(k)?;
        Ok(value.to_decimal())
    }

    /// Time one run of `variant` against the cursor, discarding its result.
    pub fn benchmark(&self, variant: Variant) -> Result<Duration, SessionError> {
        self.time(self.device.registry().get(variant).as_ref())
    }

    fn time(&self, algo: &dyn FibonacciAlgorithm) -> Result<Duration, SessionError> {
        let k = self.index();

        let start = Instant::now();
        let outcome = black_box(algo.compute(black_box(k)));
        let elapsed = start.elapsed();

        outcome?;
        debug!(k, variant = %algo.variant(), ?elapsed, "benchmark");
        Ok(elapsed)
    }

    /// Device write: the request length selects the variant to time.
    ///
    /// Returns the elapsed nanoseconds. A length naming no variant runs
    /// nothing and returns [`INVALID_VARIANT_RESULT`].
    pub fn write(&self, request: &[u8]) -> Result<u64, SessionError> {
        self.device.counters().record_write();
        let algo = match self.device.registry().by_code(request.len()) {
            Ok(algo) => algo,
            Err(FibError::InvalidVariant(selector)) => {
                warn!(selector, "write selector names no variant");
                return Ok(INVALID_VARIANT_RESULT);
            }
            Err(e) => return Err(e.into()),
        };
        let elapsed = self.time(algo.as_ref())?;
        Ok(u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX))
    }

    /// Close the session, releasing the device.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        debug!(cursor = self.cursor, "session closed");
    }
}
