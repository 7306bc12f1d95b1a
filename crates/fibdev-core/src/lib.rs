//! # fibdev-core
//!
//! Core library for the Fibonacci device: two big-integer backings with
//! carry-propagating addition, and six interchangeable generators.

pub mod algorithm;
pub mod bignum;
pub mod constants;
pub mod digits;
pub mod error;
pub mod fastdoubling;
pub mod iterative;
pub mod registry;
pub mod segmented;
pub mod variant;

// Re-exports
pub use algorithm::{FibValue, FibonacciAlgorithm};
pub use bignum::BigNumber;
pub use constants::{
    exit_codes, DIGIT_BUFFER_CAPACITY, FIB_TABLE, INVALID_VARIANT_RESULT, MAX_FIB_U64, MAX_INDEX,
    SEGMENT_RADIX,
};
pub use digits::DigitString;
pub use error::FibError;
pub use registry::{AlgorithmRegistry, DefaultRegistry};
pub use segmented::SegmentList;
pub use variant::Variant;

/// Compute F(k) exactly as a decimal string.
///
/// Uses the segmented backing, which has no fixed capacity. For a specific
/// generator, go through [`AlgorithmRegistry`].
///
/// # Example
/// ```
/// assert_eq!(fibdev_core::fibonacci(10).unwrap(), "55");
/// assert_eq!(fibdev_core::fibonacci(0).unwrap(), "0");
/// ```
pub fn fibonacci(k: u64) -> Result<String, FibError> {
    iterative::iterate_in_place::<SegmentList>(k)
}
