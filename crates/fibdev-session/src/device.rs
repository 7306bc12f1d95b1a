//! The Fibonacci device: a session manager allowing one open session.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use fibdev_core::registry::{AlgorithmRegistry, DefaultRegistry};

use crate::config::DeviceConfig;
use crate::error::SessionError;
use crate::session::Session;
use crate::stats::{AtomicDeviceStats, DeviceStats};

/// Session manager for the Fibonacci device.
///
/// Construct one per process and share it by reference. At most one
/// [`Session`] is open at any time; a second [`open`](Self::open) fails
/// immediately with [`SessionError::Busy`] instead of waiting.
///
/// # Example
/// ```
/// use fibdev_session::{DeviceConfig, FibDevice, Whence};
///
/// let device = FibDevice::new(DeviceConfig::default()).unwrap();
/// let mut session = device.open().unwrap();
/// session.seek(10, Whence::Set);
/// assert_eq!(session.read(1).unwrap(), "55");
/// session.close();
/// ```
pub struct FibDevice {
    lease: Mutex<()>,
    config: DeviceConfig,
    registry: Arc<dyn AlgorithmRegistry>,
    stats: AtomicDeviceStats,
}

impl FibDevice {
    /// Create a device backed by the default registry.
    pub fn new(config: DeviceConfig) -> Result<Self, SessionError> {
        Self::with_registry(config, Arc::new(DefaultRegistry::new()))
    }

    /// Create a device backed by the given registry.
    pub fn with_registry(
        config: DeviceConfig,
        registry: Arc<dyn AlgorithmRegistry>,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            lease: Mutex::new(()),
            config,
            registry,
            stats: AtomicDeviceStats::default(),
        })
    }

    /// Open the device, taking exclusive use of it.
    pub fn open(&self) -> Result<Session<'_>, SessionError> {
        let Some(lease) = self.lease.try_lock() else {
            self.stats.record_busy();
            warn!("device is in use");
            return Err(SessionError::Busy);
        };
        self.stats.record_open();
        debug!("session opened");
        Ok(Session::new(self, lease))
    }

    /// Whether a session is currently open.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.lease.is_locked()
    }

    /// Configuration the device was built with.
    #[must_use]
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Snapshot of the usage counters.
    #[must_use]
    pub fn stats(&self) -> DeviceStats {
        self.stats.snapshot()
    }

    pub(crate) fn registry(&self) -> &dyn AlgorithmRegistry {
        self.registry.as_ref()
    }

    pub(crate) fn counters(&self) -> &AtomicDeviceStats {
        &self.stats
    }
}
