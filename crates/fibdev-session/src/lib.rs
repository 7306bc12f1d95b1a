//! # fibdev-session
//!
//! The Fibonacci device as a seekable, exclusive-session interface: seek
//! selects the index, read renders the value, write times a chosen variant.

pub mod config;
pub mod device;
pub mod error;
pub mod session;
pub mod stats;

pub use config::DeviceConfig;
pub use device::FibDevice;
pub use error::SessionError;
pub use session::{Session, Whence};
pub use stats::DeviceStats;
