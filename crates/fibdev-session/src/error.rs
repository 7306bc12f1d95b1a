//! Session error type.

use fibdev_core::FibError;

/// Error type for device sessions.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Another session holds the device.
    #[error("device is busy")]
    Busy,

    /// The generator behind a read or write failed.
    #[error(transparent)]
    Compute(#[from] FibError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
