//! Device configuration.

use serde::{Deserialize, Serialize};

use fibdev_core::Variant;

use crate::error::SessionError;

/// Configuration of a [`FibDevice`](crate::device::FibDevice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Generator rendering `F(cursor)` on read. Must be a big-integer variant.
    pub read_variant: Variant,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            read_variant: Variant::DigitStringSwapping,
        }
    }
}

impl DeviceConfig {
    /// Check that the configuration can serve reads exactly.
    pub fn validate(&self) -> Result<(), SessionError> {
        if !self.read_variant.is_big_integer() {
            return Err(SessionError::Config(format!(
                "read variant '{}' is not a big-integer generator",
                self.read_variant
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reads_through_swapping_buffers() {
        let config = DeviceConfig::default();
        assert_eq!(config.read_variant, Variant::DigitStringSwapping);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn native_read_variant_rejected() {
        let config = DeviceConfig {
            read_variant: Variant::FastDoubling,
        };
        assert!(matches!(config.validate(), Err(SessionError::Config(_))));
    }

    #[test]
    fn deserialize_from_json() {
        let config: DeviceConfig = serde_json::from_str(r#"{"read_variant":"list"}"#).unwrap();
        assert_eq!(config.read_variant, Variant::SegmentedLinear);

        let config: DeviceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DeviceConfig::default());
    }
}
