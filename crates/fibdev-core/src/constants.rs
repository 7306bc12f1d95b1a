//! Constants shared by the bignum backings, the generators and the device.

/// Largest Fibonacci index a session cursor can hold.
///
/// F(4896) has 1023 decimal digits, the most that fits a
/// [`DIGIT_BUFFER_CAPACITY`] buffer with room to spare for a terminator.
pub const MAX_INDEX: i64 = 4896;

/// Radix of one [`SegmentList`](crate::segmented::SegmentList) segment (10^18).
pub const SEGMENT_RADIX: u64 = 1_000_000_000_000_000_000;

/// Decimal digits carried by a full segment.
pub const SEGMENT_DIGITS: usize = 18;

/// Capacity, in digits, of a [`DigitString`](crate::digits::DigitString) buffer.
pub const DIGIT_BUFFER_CAPACITY: usize = 1024;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Value returned by a write whose selector names no variant.
pub const INVALID_VARIANT_RESULT: u64 = 1;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// F(94) = 19,740,274,219,868,223,167 overflows `u64::MAX`, so the native
/// generators stop being exact past the end of this table.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes used by the `fibdev` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The device was already open in another session.
    pub const ERROR_BUSY: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Run cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_table_first_values() {
        assert_eq!(FIB_TABLE[0], 0);
        assert_eq!(FIB_TABLE[1], 1);
        assert_eq!(FIB_TABLE[2], 1);
        assert_eq!(FIB_TABLE[10], 55);
        assert_eq!(FIB_TABLE[50], 12_586_269_025);
    }

    #[test]
    fn fib_table_last_value() {
        assert_eq!(FIB_TABLE[93], 12_200_160_415_121_876_738);
        assert!(FIB_TABLE[93].checked_add(FIB_TABLE[92]).is_none());
    }

    #[test]
    fn segment_radix_matches_digit_count() {
        assert_eq!(SEGMENT_RADIX.to_string().len(), SEGMENT_DIGITS + 1);
        // Two full segments plus a carry never overflow the accumulator.
        assert!((SEGMENT_RADIX - 1).checked_mul(2).and_then(|s| s.checked_add(1)).is_some());
    }
}
