//! Fast Doubling over native u64 words.
//!
//! Uses the doubling identities:
//!   F(2n)   = F(n) * (2*F(n+1) - F(n))
//!   F(2n+1) = F(n+1)^2 + F(n)^2
//!
//! Iterates from the bit below the MSB down to bit 0, starting from the
//! implicit state n = 1. All arithmetic wraps, so the result is
//! `F(k) mod 2^64`: exact up to k = 93, silently wrapped beyond. There is no
//! big-integer multiply behind these generators.

use crate::algorithm::{FibValue, FibonacciAlgorithm};
use crate::error::FibError;
use crate::variant::Variant;

/// Index of the bit just below the MSB of `k`; the MSB itself is the
/// implicit starting state n = 1. Requires `k >= 2`.
#[inline]
fn top_bit_below_msb(k: u64) -> u32 {
    debug_assert!(k >= 2);
    62 - k.leading_zeros()
}

/// One doubling step: `(F(n), F(n+1)) -> (F(2n), F(2n+1))`.
#[inline]
fn double(f0: u64, f1: u64) -> (u64, u64) {
    let f2n = f0.wrapping_mul(f1.wrapping_mul(2).wrapping_sub(f0));
    let f2n1 = f1.wrapping_mul(f1).wrapping_add(f0.wrapping_mul(f0));
    (f2n, f2n1)
}

/// Fast doubling with the step-one advance applied as a separate addition.
#[must_use]
pub fn fast_doubling_u64(k: u64) -> u64 {
    if k < 2 {
        return k;
    }
    // n = 1
    let (mut f0, mut f1) = (1u64, 1u64);
    for bit in (0..=top_bit_below_msb(k)).rev() {
        (f0, f1) = double(f0, f1);
        if (k >> bit) & 1 == 1 {
            let next = f0.wrapping_add(f1);
            f0 = f1;
            f1 = next;
        }
    }
    f0
}

/// Fast doubling with the advance folded into the doubling result.
#[must_use]
pub fn fast_doubling_fused_u64(k: u64) -> u64 {
    if k < 2 {
        return k;
    }
    let (mut f0, mut f1) = (1u64, 1u64);
    for bit in (0..=top_bit_below_msb(k)).rev() {
        let (f2n, f2n1) = double(f0, f1);
        if (k >> bit) & 1 == 1 {
            f0 = f2n1;
            f1 = f2n.wrapping_add(f2n1);
        } else {
            f0 = f2n;
            f1 = f2n1;
        }
    }
    f0
}

/// Native fast doubling, separate advance step.
pub struct FastDoubling;

impl FibonacciAlgorithm for FastDoubling {
    fn compute(&self, k: u64) -> Result<FibValue, FibError> {
        Ok(FibValue::Native(fast_doubling_u64(k)))
    }

    fn variant(&self) -> Variant {
        Variant::FastDoubling
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}

/// Native fast doubling, fused advance step.
pub struct FastDoublingFused;

impl FibonacciAlgorithm for FastDoublingFused {
    fn compute(&self, k: u64) -> Result<FibValue, FibError> {
        Ok(FibValue::Native(fast_doubling_fused_u64(k)))
    }

    fn variant(&self) -> Variant {
        Variant::FastDoublingFused
    }

    fn name(&self) -> &'static str {
        "FastDoublingFused"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FIB_TABLE, MAX_INDEX};
    use crate::iterative::linear_u64;

    #[test]
    fn small_values() {
        assert_eq!(fast_doubling_u64(0), 0);
        assert_eq!(fast_doubling_u64(1), 1);
        assert_eq!(fast_doubling_u64(2), 1);
        assert_eq!(fast_doubling_u64(3), 2);
        assert_eq!(fast_doubling_u64(4), 3);
        assert_eq!(fast_doubling_u64(10), 55);
        assert_eq!(fast_doubling_u64(50), 12_586_269_025);
    }

    #[test]
    fn exact_through_table() {
        for (k, &expected) in FIB_TABLE.iter().enumerate() {
            let k = k as u64;
            assert_eq!(fast_doubling_u64(k), expected, "v1 F({k})");
            assert_eq!(fast_doubling_fused_u64(k), expected, "v2 F({k})");
        }
    }

    #[test]
    fn variants_agree_modulo_word_past_ceiling() {
        for k in 94..=MAX_INDEX.unsigned_abs() {
            let v1 = fast_doubling_u64(k);
            assert_eq!(v1, fast_doubling_fused_u64(k), "k={k}");
            assert_eq!(v1, linear_u64(k), "k={k}");
        }
    }

    #[test]
    fn ceiling_wraps_silently() {
        // F(94) does not fit; the result is F(94) mod 2^64.
        assert_eq!(fast_doubling_u64(94), 1_293_530_146_158_671_551);
        assert!(FastDoubling.is_exact(93));
        assert!(!FastDoublingFused.is_exact(94));
    }

    #[test]
    fn top_bit_skips_msb() {
        assert_eq!(top_bit_below_msb(2), 0);
        assert_eq!(top_bit_below_msb(3), 0);
        assert_eq!(top_bit_below_msb(4), 1);
        assert_eq!(top_bit_below_msb(u64::MAX), 62);
    }
}
