//! Segmented big integer: radix-10^18 segments, least significant first.
//!
//! Each segment holds a value in `[0, 10^18)`. Adding two segments plus a
//! carry stays below `2 * 10^18`, well inside a u64 accumulator.

use std::fmt::Write as _;
use std::mem::size_of;

use crate::bignum::{normalize_literal, BigNumber};
use crate::constants::{SEGMENT_DIGITS, SEGMENT_RADIX};
use crate::error::FibError;

/// Growable big integer stored as radix-10^18 segments.
///
/// A trailing zero segment may exist after an addition that grew the target
/// before the carry settled; rendering collapses it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentList {
    segments: Vec<u64>,
}

/// Bytes needed to render `segment_count` segments, terminator included.
///
/// Every segment may contribute a full [`SEGMENT_DIGITS`] digits, so this is
/// an upper bound for any value of that length.
#[must_use]
pub const fn rendered_capacity(segment_count: usize) -> usize {
    segment_count * SEGMENT_DIGITS + 1
}

/// Add one segment of `addend` into `slot`, returning the carry out.
#[inline]
fn add_segment(addend: u64, slot: &mut u64, carry: u64) -> u64 {
    let sum = addend + *slot + carry;
    if sum >= SEGMENT_RADIX {
        *slot = sum - SEGMENT_RADIX;
        1
    } else {
        *slot = sum;
        0
    }
}

impl SegmentList {
    /// Create an empty list (numerically zero).
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Build a list from raw segments, least significant first.
    pub fn from_segments(segments: Vec<u64>) -> Result<Self, FibError> {
        if let Some(bad) = segments.iter().find(|&&s| s >= SEGMENT_RADIX) {
            return Err(FibError::InvalidInput(format!("segment {bad} exceeds radix")));
        }
        Ok(Self { segments })
    }

    /// Raw segments, least significant first.
    #[must_use]
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// Number of stored segments, including any trailing zero segment.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Append a segment holding `value` as the new most significant segment.
    pub fn append_segment(&mut self, value: u64) -> Result<(), FibError> {
        debug_assert!(value < SEGMENT_RADIX);
        self.reserve(1)?;
        self.segments.push(value);
        Ok(())
    }

    fn reserve(&mut self, additional: usize) -> Result<(), FibError> {
        self.segments
            .try_reserve(additional)
            .map_err(|_| FibError::Allocation {
                requested: additional * size_of::<u64>(),
            })
    }

    /// Segments up to and including the most significant non-zero one.
    fn significant(&self) -> &[u64] {
        let len = self
            .segments
            .iter()
            .rposition(|&s| s != 0)
            .map_or(0, |i| i + 1);
        &self.segments[..len]
    }
}

impl BigNumber for SegmentList {
    fn from_small(digit: u8) -> Result<Self, FibError> {
        let mut list = Self::new();
        list.append_segment(u64::from(digit))?;
        Ok(list)
    }

    fn from_decimal(literal: &str) -> Result<Self, FibError> {
        let digits = normalize_literal(literal)?.as_bytes();
        let mut list = Self::new();
        list.reserve(digits.len().div_ceil(SEGMENT_DIGITS))?;

        let mut end = digits.len();
        while end > 0 {
            let start = end.saturating_sub(SEGMENT_DIGITS);
            let value = digits[start..end]
                .iter()
                .fold(0u64, |acc, &b| acc * 10 + u64::from(b - b'0'));
            list.append_segment(value)?;
            end = start;
        }
        Ok(list)
    }

    fn add_into(&self, target: &mut Self) -> Result<(), FibError> {
        // Reserve the worst case up front so a failed allocation leaves
        // `target` untouched.
        let width = self.segments.len().max(target.segments.len());
        let growth = width + 1 - target.segments.len();
        target.reserve(growth)?;

        let mut carry = 0;
        for (i, &segment) in self.segments.iter().enumerate() {
            if i == target.segments.len() {
                target.append_segment(0)?;
            }
            carry = add_segment(segment, &mut target.segments[i], carry);
        }

        let mut i = self.segments.len();
        while carry != 0 && i < target.segments.len() {
            carry = add_segment(0, &mut target.segments[i], carry);
            i += 1;
        }

        if carry != 0 {
            target.append_segment(carry)?;
        }
        Ok(())
    }

    fn to_decimal_string(&self) -> Result<String, FibError> {
        let significant = self.significant();
        let Some((lead, rest)) = significant.split_last() else {
            return Ok("0".to_string());
        };

        let capacity = rendered_capacity(significant.len());
        let mut out = String::new();
        out.try_reserve_exact(capacity)
            .map_err(|_| FibError::Allocation {
                requested: capacity,
            })?;

        let overflow = |_: std::fmt::Error| FibError::Allocation {
            requested: capacity,
        };
        write!(out, "{lead}").map_err(overflow)?;
        for segment in rest.iter().rev() {
            write!(out, "{segment:0width$}", width = SEGMENT_DIGITS).map_err(overflow)?;
        }
        Ok(out)
    }

    fn is_zero(&self) -> bool {
        self.segments.iter().all(|&s| s == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(segments: &[u64]) -> SegmentList {
        SegmentList::from_segments(segments.to_vec()).unwrap()
    }

    #[test]
    fn add_without_carry() {
        let a = list(&[5]);
        let mut b = list(&[7]);
        a.add_into(&mut b).unwrap();
        assert_eq!(b.segments(), &[12]);
        assert_eq!(a.segments(), &[5]);
    }

    #[test]
    fn carry_propagates_through_every_segment() {
        let a = list(&[SEGMENT_RADIX - 1, SEGMENT_RADIX - 1, SEGMENT_RADIX - 1]);
        let mut b = list(&[1]);
        a.add_into(&mut b).unwrap();
        assert_eq!(b.segments(), &[0, 0, 0, 1]);
        assert_eq!(
            b.to_decimal_string().unwrap(),
            format!("1{}", "0".repeat(3 * SEGMENT_DIGITS))
        );
    }

    #[test]
    fn carry_continues_into_longer_target() {
        let a = list(&[1]);
        let mut b = list(&[SEGMENT_RADIX - 1, SEGMENT_RADIX - 1, 4]);
        a.add_into(&mut b).unwrap();
        assert_eq!(b.segments(), &[0, 0, 5]);
    }

    #[test]
    fn shorter_target_grows() {
        let a = list(&[3, 9, 2]);
        let mut b = list(&[SEGMENT_RADIX - 1]);
        a.add_into(&mut b).unwrap();
        assert_eq!(b.segments(), &[2, 10, 2]);
    }

    #[test]
    fn add_into_empty_target() {
        let a = list(&[42, 1]);
        let mut b = SegmentList::new();
        a.add_into(&mut b).unwrap();
        assert_eq!(b.segments(), &[42, 1]);
    }

    #[test]
    fn render_pads_inner_segments() {
        let n = list(&[5, 1]);
        assert_eq!(n.to_decimal_string().unwrap(), "1000000000000000005");
    }

    #[test]
    fn render_collapses_trailing_zero_segment() {
        let n = list(&[7, 0]);
        assert_eq!(n.to_decimal_string().unwrap(), "7");
        assert_eq!(SegmentList::new().to_decimal_string().unwrap(), "0");
        assert_eq!(list(&[0, 0]).to_decimal_string().unwrap(), "0");
    }

    #[test]
    fn render_capacity_covers_odd_segment_counts() {
        // Halving the segment count undersizes the buffer for odd counts.
        let legacy = |count: usize| ((count & 1) + (count >> 1)) * SEGMENT_DIGITS + 1;
        let n = list(&[SEGMENT_RADIX - 1; 3]);
        let rendered = n.to_decimal_string().unwrap();
        assert_eq!(rendered.len(), 3 * SEGMENT_DIGITS);
        assert!(rendered.len() + 1 > legacy(n.segment_count()));
        assert!(rendered.len() < rendered_capacity(n.segment_count()));
    }

    #[test]
    fn render_keeps_zero_inner_segments() {
        let n = list(&[0, 0, 3]);
        let rendered = n.to_decimal_string().unwrap();
        assert_eq!(rendered, format!("3{}", "0".repeat(2 * SEGMENT_DIGITS)));
        assert_eq!(rendered.len(), 2 * SEGMENT_DIGITS + 1);
    }

    #[test]
    fn parse_splits_into_segments() {
        let n = SegmentList::from_decimal("1000000000000000005").unwrap();
        assert_eq!(n.segments(), &[5, 1]);
        let n = SegmentList::from_decimal("0000123").unwrap();
        assert_eq!(n.segments(), &[123]);
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert!(SegmentList::from_decimal("12x").is_err());
        assert!(SegmentList::from_segments(vec![SEGMENT_RADIX]).is_err());
    }

    #[test]
    fn is_zero_ignores_zero_segments() {
        assert!(SegmentList::new().is_zero());
        assert!(list(&[0, 0]).is_zero());
        assert!(!list(&[0, 1]).is_zero());
    }
}
