//! Fixed-capacity decimal digit buffer.
//!
//! Digits are ASCII and stored least significant first, so addition is a
//! single forward scan. Rendering reverses them into reading order.

use crate::bignum::{normalize_literal, BigNumber};
use crate::constants::DIGIT_BUFFER_CAPACITY;
use crate::error::FibError;

/// Big integer stored as reversed ASCII digits in a fixed-capacity buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitString {
    digits: Box<[u8]>,
    len: usize,
}

impl DigitString {
    /// Allocate an empty buffer of [`DIGIT_BUFFER_CAPACITY`] digits.
    pub fn new() -> Result<Self, FibError> {
        Self::with_capacity(DIGIT_BUFFER_CAPACITY)
    }

    /// Allocate an empty buffer holding at most `capacity` digits.
    pub fn with_capacity(capacity: usize) -> Result<Self, FibError> {
        let mut digits = Vec::new();
        digits
            .try_reserve_exact(capacity)
            .map_err(|_| FibError::Allocation {
                requested: capacity,
            })?;
        digits.resize(capacity, b'0');
        Ok(Self {
            digits: digits.into_boxed_slice(),
            len: 0,
        })
    }

    /// Maximum number of digits this buffer holds.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.digits.len()
    }

    /// Number of digits currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no digit is stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stored digits, least significant first.
    #[must_use]
    pub fn reversed_digits(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    #[inline]
    fn digit_or_zero(&self, i: usize) -> u8 {
        if i < self.len {
            self.digits[i] - b'0'
        } else {
            0
        }
    }

    fn ensure_fits(&self, needed: usize) -> Result<(), FibError> {
        if needed > self.capacity() {
            return Err(FibError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    fn push_digit(&mut self, digit: u8) -> Result<(), FibError> {
        self.ensure_fits(self.len + 1)?;
        self.digits[self.len] = b'0' + digit;
        self.len += 1;
        Ok(())
    }

    /// Overwrite this buffer with the digits of `other`.
    pub fn copy_from(&mut self, other: &Self) -> Result<(), FibError> {
        self.ensure_fits(other.len)?;
        self.digits[..other.len].copy_from_slice(&other.digits[..other.len]);
        self.len = other.len;
        Ok(())
    }

    /// Write `a + b` into `out`, leaving both operands untouched.
    pub fn sum_into(a: &Self, b: &Self, out: &mut Self) -> Result<(), FibError> {
        let width = a.len.max(b.len);
        out.ensure_fits(width)?;

        let mut carry = 0;
        for i in 0..width {
            let sum = a.digit_or_zero(i) + b.digit_or_zero(i) + carry;
            out.digits[i] = b'0' + sum % 10;
            carry = sum / 10;
        }
        out.len = width;

        if carry != 0 {
            out.push_digit(carry)?;
        }
        Ok(())
    }
}

impl BigNumber for DigitString {
    fn from_small(digit: u8) -> Result<Self, FibError> {
        debug_assert!(digit < 10);
        let mut buf = Self::new()?;
        buf.push_digit(digit)?;
        Ok(buf)
    }

    fn from_decimal(literal: &str) -> Result<Self, FibError> {
        let digits = normalize_literal(literal)?;
        let mut buf = Self::with_capacity(DIGIT_BUFFER_CAPACITY.max(digits.len()))?;
        for (slot, byte) in buf.digits.iter_mut().zip(digits.bytes().rev()) {
            *slot = byte;
        }
        buf.len = digits.len();
        Ok(buf)
    }

    fn add_into(&self, target: &mut Self) -> Result<(), FibError> {
        let width = self.len.max(target.len);
        target.ensure_fits(width)?;

        let mut carry = 0;
        for i in 0..width {
            let sum = self.digit_or_zero(i) + target.digit_or_zero(i) + carry;
            target.digits[i] = b'0' + sum % 10;
            carry = sum / 10;
        }
        target.len = width;

        if carry != 0 {
            target.push_digit(carry)?;
        }
        Ok(())
    }

    fn to_decimal_string(&self) -> Result<String, FibError> {
        let significant = self
            .reversed_digits()
            .iter()
            .rposition(|&d| d != b'0')
            .map_or(0, |i| i + 1);
        if significant == 0 {
            return Ok("0".to_string());
        }

        let mut out = String::new();
        out.try_reserve_exact(significant)
            .map_err(|_| FibError::Allocation {
                requested: significant,
            })?;
        out.extend(self.digits[..significant].iter().rev().map(|&d| char::from(d)));
        Ok(out)
    }

    fn is_zero(&self) -> bool {
        self.reversed_digits().iter().all(|&d| d == b'0')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(literal: &str) -> DigitString {
        DigitString::from_decimal(literal).unwrap()
    }

    #[test]
    fn stores_least_significant_first() {
        let n = digits("1234");
        assert_eq!(n.reversed_digits(), b"4321");
        assert_eq!(n.to_decimal_string().unwrap(), "1234");
    }

    #[test]
    fn add_in_place_with_carry_out() {
        let a = digits("999");
        let mut b = digits("1");
        a.add_into(&mut b).unwrap();
        assert_eq!(b.to_decimal_string().unwrap(), "1000");
        assert_eq!(b.len(), 4);
        assert_eq!(a.to_decimal_string().unwrap(), "999");
    }

    #[test]
    fn add_in_place_longer_target() {
        let a = digits("5");
        let mut b = digits("12345");
        a.add_into(&mut b).unwrap();
        assert_eq!(b.to_decimal_string().unwrap(), "12350");
    }

    #[test]
    fn sum_into_third_buffer() {
        let a = digits("89");
        let b = digits("144");
        let mut out = DigitString::new().unwrap();
        DigitString::sum_into(&a, &b, &mut out).unwrap();
        assert_eq!(out.to_decimal_string().unwrap(), "233");
    }

    #[test]
    fn copy_replaces_previous_contents() {
        let mut dst = digits("98765");
        dst.copy_from(&digits("12")).unwrap();
        assert_eq!(dst.to_decimal_string().unwrap(), "12");
    }

    #[test]
    fn capacity_exceeded_is_reported() {
        let mut small = DigitString::with_capacity(3).unwrap();
        small.copy_from(&digits("999")).unwrap();
        let one = digits("1");
        assert_eq!(
            one.add_into(&mut small),
            Err(FibError::CapacityExceeded { capacity: 3 })
        );
        assert!(small.copy_from(&digits("1000")).is_err());
    }

    #[test]
    fn zero_renders_as_single_digit() {
        let empty = DigitString::new().unwrap();
        assert!(empty.is_empty());
        assert!(empty.is_zero());
        assert_eq!(empty.to_decimal_string().unwrap(), "0");
        assert_eq!(DigitString::from_small(0).unwrap().to_decimal_string().unwrap(), "0");
    }

    #[test]
    fn default_capacity() {
        assert_eq!(DigitString::new().unwrap().capacity(), DIGIT_BUFFER_CAPACITY);
    }
}
