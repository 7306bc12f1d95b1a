//! Linear-time generators: one addition per index step.
//!
//! Four variants share the plain recurrence `F(i) = F(i-1) + F(i-2)` and
//! differ only in how the pair state is stored and advanced.

use std::mem;

use tracing::trace;

use crate::algorithm::{FibValue, FibonacciAlgorithm};
use crate::bignum::BigNumber;
use crate::digits::DigitString;
use crate::error::FibError;
use crate::segmented::SegmentList;
use crate::variant::Variant;

/// `F(k) mod 2^64` by straight iteration.
#[must_use]
pub fn linear_u64(k: u64) -> u64 {
    if k < 2 {
        return k;
    }
    let (mut prev, mut cur) = (0u64, 1u64);
    for _ in 2..=k {
        let next = prev.wrapping_add(cur);
        prev = cur;
        cur = next;
    }
    cur
}

/// Run the recurrence over any backing, adding in place and swapping roles.
///
/// After each step `fk` holds `F(i)` and `fk_prev` holds `F(i-1)`; no digits
/// are copied, only the two owned values trade places.
pub fn iterate_in_place<B: BigNumber>(k: u64) -> Result<String, FibError> {
    if k < 2 {
        return Ok(k.to_string());
    }
    let mut fk = B::from_small(1)?;
    let mut fk_prev = B::from_small(0)?;
    for _ in 2..=k {
        fk.add_into(&mut fk_prev)?;
        mem::swap(&mut fk, &mut fk_prev);
    }
    fk.to_decimal_string()
}

/// Run the recurrence over digit buffers through a scratch buffer.
///
/// Each step sums into the scratch buffer and copies the pair forward.
pub fn iterate_copying(k: u64) -> Result<String, FibError> {
    if k < 2 {
        return Ok(k.to_string());
    }
    // F(2), F(1)
    let mut fk = DigitString::from_small(1)?;
    let mut fk_prev = DigitString::from_small(1)?;
    let mut scratch = DigitString::new()?;
    for _ in 3..=k {
        DigitString::sum_into(&fk, &fk_prev, &mut scratch)?;
        fk_prev.copy_from(&fk)?;
        fk.copy_from(&scratch)?;
    }
    fk.to_decimal_string()
}

/// Native u64 recurrence.
pub struct Linear;

impl FibonacciAlgorithm for Linear {
    fn compute(&self, k: u64) -> Result<FibValue, FibError> {
        Ok(FibValue::Native(linear_u64(k)))
    }

    fn variant(&self) -> Variant {
        Variant::Linear
    }

    fn name(&self) -> &'static str {
        "Linear"
    }
}

/// Recurrence over a [`SegmentList`].
pub struct SegmentedLinear;

impl FibonacciAlgorithm for SegmentedLinear {
    fn compute(&self, k: u64) -> Result<FibValue, FibError> {
        trace!(k, "segmented recurrence");
        iterate_in_place::<SegmentList>(k).map(FibValue::Decimal)
    }

    fn variant(&self) -> Variant {
        Variant::SegmentedLinear
    }

    fn name(&self) -> &'static str {
        "SegmentedLinear"
    }
}

/// Recurrence over [`DigitString`] buffers with copy-back.
pub struct DigitStringCopying;

impl FibonacciAlgorithm for DigitStringCopying {
    fn compute(&self, k: u64) -> Result<FibValue, FibError> {
        trace!(k, "digit-string recurrence (copying)");
        iterate_copying(k).map(FibValue::Decimal)
    }

    fn variant(&self) -> Variant {
        Variant::DigitStringCopying
    }

    fn name(&self) -> &'static str {
        "DigitStringCopying"
    }
}

/// Recurrence over [`DigitString`] buffers with buffer swapping.
pub struct DigitStringSwapping;

impl FibonacciAlgorithm for DigitStringSwapping {
    fn compute(&self, k: u64) -> Result<FibValue, FibError> {
        trace!(k, "digit-string recurrence (swapping)");
        iterate_in_place::<DigitString>(k).map(FibValue::Decimal)
    }

    fn variant(&self) -> Variant {
        Variant::DigitStringSwapping
    }

    fn name(&self) -> &'static str {
        "DigitStringSwapping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DIGIT_BUFFER_CAPACITY, FIB_TABLE, MAX_INDEX};

    const F100: &str = "354224848179261915075";
    const F300: &str =
        "222232244629420445529739893461909967206666939096499764990979600";

    #[test]
    fn linear_matches_table() {
        for (k, &expected) in FIB_TABLE.iter().enumerate() {
            assert_eq!(linear_u64(k as u64), expected, "F({k})");
        }
    }

    #[test]
    fn linear_wraps_past_u64() {
        // F(94) mod 2^64
        assert_eq!(linear_u64(94), 1_293_530_146_158_671_551);
    }

    #[test]
    fn base_cases_render_single_digit() {
        for k in 0..=2u64 {
            let expected = if k == 0 { "0" } else { "1" };
            assert_eq!(iterate_in_place::<SegmentList>(k).unwrap(), expected);
            assert_eq!(iterate_in_place::<DigitString>(k).unwrap(), expected);
            assert_eq!(iterate_copying(k).unwrap(), expected);
        }
    }

    #[test]
    fn big_variants_known_values() {
        assert_eq!(iterate_in_place::<SegmentList>(100).unwrap(), F100);
        assert_eq!(iterate_in_place::<DigitString>(100).unwrap(), F100);
        assert_eq!(iterate_copying(100).unwrap(), F100);
        assert_eq!(iterate_in_place::<SegmentList>(300).unwrap(), F300);
        assert_eq!(iterate_copying(300).unwrap(), F300);
    }

    #[test]
    fn digit_buffers_hold_max_index() {
        let k = MAX_INDEX.unsigned_abs();
        let swapped = iterate_in_place::<DigitString>(k).unwrap();
        let copied = iterate_copying(k).unwrap();
        let segmented = iterate_in_place::<SegmentList>(k).unwrap();
        assert_eq!(swapped.len(), 1023);
        assert!(swapped.starts_with("7144990599364758750680262841451911738641"));
        assert_eq!(swapped, copied);
        assert_eq!(swapped, segmented);
    }

    #[test]
    fn digit_buffers_report_overflow() {
        // F(4902) is the first value with more than 1024 digits.
        let err = iterate_in_place::<DigitString>(4902).unwrap_err();
        assert_eq!(
            err,
            FibError::CapacityExceeded {
                capacity: DIGIT_BUFFER_CAPACITY
            }
        );
        assert!(iterate_copying(4902).is_err());
        assert!(iterate_in_place::<SegmentList>(4902).is_ok());
    }

    #[test]
    fn trait_objects_report_metadata() {
        assert_eq!(Linear.variant(), Variant::Linear);
        assert_eq!(SegmentedLinear.name(), "SegmentedLinear");
        assert!(DigitStringSwapping.is_exact(4000));
        assert!(Linear.is_exact(93));
        assert!(!Linear.is_exact(94));
    }
}
