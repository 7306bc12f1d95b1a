//! Error type for big-integer arithmetic and generator dispatch.

/// Error type for Fibonacci generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// Storage for a segment, digit buffer or rendered string could not be obtained.
    #[error("allocation of {requested} bytes failed")]
    Allocation {
        /// Number of bytes that were requested.
        requested: usize,
    },

    /// A fixed-capacity digit buffer cannot hold the result.
    #[error("result needs more than {capacity} digits")]
    CapacityExceeded {
        /// Capacity of the buffer, in digits.
        capacity: usize,
    },

    /// A variant selector that names no algorithm.
    #[error("unknown variant selector: {0}")]
    InvalidVariant(usize),

    /// A malformed decimal literal.
    #[error("invalid decimal literal: {0:?}")]
    InvalidInput(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
