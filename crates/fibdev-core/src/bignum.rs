//! The big-integer contract shared by every backing store.
//!
//! Two backings implement it:
//! - [`SegmentList`](crate::segmented::SegmentList): growable radix-10^18 segments.
//! - [`DigitString`](crate::digits::DigitString): fixed-capacity ASCII digits,
//!   least significant first.
//!
//! Only addition is provided. Generators built on this trait never multiply.

use crate::error::FibError;

/// Non-negative integer of unbounded magnitude supporting in-place addition.
pub trait BigNumber: Sized {
    /// Create a number holding a single decimal digit.
    fn from_small(digit: u8) -> Result<Self, FibError>;

    /// Parse a decimal literal (most significant digit first).
    fn from_decimal(literal: &str) -> Result<Self, FibError>;

    /// Add `self` into `target`, leaving `self` untouched.
    ///
    /// On error `target` is either unchanged or must be discarded by the caller.
    fn add_into(&self, target: &mut Self) -> Result<(), FibError>;

    /// Render the value in normal reading order without leading zeros.
    fn to_decimal_string(&self) -> Result<String, FibError>;

    /// Whether the value is zero.
    fn is_zero(&self) -> bool;
}

/// Validate a decimal literal and strip redundant leading zeros.
pub(crate) fn normalize_literal(literal: &str) -> Result<&str, FibError> {
    if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FibError::InvalidInput(literal.to_string()));
    }
    let trimmed = literal.trim_start_matches('0');
    Ok(if trimmed.is_empty() { "0" } else { trimmed })
}
