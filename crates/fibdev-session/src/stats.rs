//! Atomic device counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Snapshot of device usage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceStats {
    /// Sessions successfully opened.
    pub opens: u64,
    /// Open attempts rejected because the device was busy.
    pub busy_rejections: u64,
    /// Seek requests.
    pub seeks: u64,
    /// Read requests.
    pub reads: u64,
    /// Write requests, including rejected selectors.
    pub writes: u64,
}

/// Lock-free counters behind [`DeviceStats`].
#[derive(Default)]
pub(crate) struct AtomicDeviceStats {
    opens: AtomicU64,
    busy_rejections: AtomicU64,
    seeks: AtomicU64,
    reads: AtomicU64,
    writes: AtomicU64,
}

impl AtomicDeviceStats {
    pub(crate) fn snapshot(&self) -> DeviceStats {
        DeviceStats {
            opens: self.opens.load(Ordering::Relaxed),
            busy_rejections: self.busy_rejections.load(Ordering::Relaxed),
            seeks: self.seeks.load(Ordering::Relaxed),
            reads: self.reads.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn record_open(&self) {
        self.opens.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_busy(&self) {
        self.busy_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_seek(&self) {
        self.seeks.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }
}
