//! The `FibonacciAlgorithm` capability and its result type.
//!
//! Every generator is stateless: each `compute` call builds its own pair
//! state and drops it before returning.

use std::fmt;

use crate::constants::MAX_FIB_U64;
use crate::error::FibError;
use crate::variant::Variant;

/// Result of one generator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FibValue {
    /// Native value, `F(k) mod 2^64`.
    Native(u64),
    /// Exact decimal rendering.
    Decimal(String),
}

impl FibValue {
    /// Decimal rendering of the value.
    #[must_use]
    pub fn to_decimal(&self) -> String {
        self.to_string()
    }

    /// The native value, if this result carries one.
    #[must_use]
    pub fn as_native(&self) -> Option<u64> {
        match self {
            Self::Native(v) => Some(*v),
            Self::Decimal(_) => None,
        }
    }
}

impl fmt::Display for FibValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(v) => write!(f, "{v}"),
            Self::Decimal(s) => f.write_str(s),
        }
    }
}

/// A Fibonacci generator selectable by [`Variant`].
pub trait FibonacciAlgorithm: Send + Sync {
    /// Compute `F(k)`.
    fn compute(&self, k: u64) -> Result<FibValue, FibError>;

    /// Variant tag of this generator.
    fn variant(&self) -> Variant;

    /// Human-readable algorithm name.
    fn name(&self) -> &'static str;

    /// Whether a successful `compute(k)` is the exact value of `F(k)`.
    ///
    /// Native generators wrap modulo 2^64 past [`MAX_FIB_U64`].
    fn is_exact(&self, k: u64) -> bool {
        self.variant().is_big_integer() || k <= MAX_FIB_U64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_rendering() {
        assert_eq!(FibValue::Native(55).to_decimal(), "55");
        assert_eq!(FibValue::Decimal("6765".into()).to_decimal(), "6765");
        assert_eq!(FibValue::Native(8).as_native(), Some(8));
        assert_eq!(FibValue::Decimal("8".into()).as_native(), None);
    }
}
