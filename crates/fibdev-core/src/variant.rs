//! Algorithm variants and their write-request selector codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FibError;

/// One of the interchangeable Fibonacci generators.
///
/// The discriminant order matches the selector codes accepted by a
/// device write: the code is the byte count of the write request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variant {
    /// Native u64 recurrence.
    #[serde(rename = "linear")]
    Linear,
    /// Recurrence over radix-10^18 segments.
    #[serde(rename = "list")]
    SegmentedLinear,
    /// Native u64 fast doubling, step-one advance applied separately.
    #[serde(rename = "fdouble")]
    FastDoubling,
    /// Native u64 fast doubling, advance folded into the doubling step.
    #[serde(rename = "fdouble2")]
    FastDoublingFused,
    /// Decimal digit buffers, summing into scratch then copying back.
    #[serde(rename = "string")]
    DigitStringCopying,
    /// Decimal digit buffers, adding in place and swapping buffers.
    #[serde(rename = "string-swap")]
    DigitStringSwapping,
}

impl Variant {
    /// All variants, ordered by selector code.
    pub const ALL: [Variant; 6] = [
        Variant::Linear,
        Variant::SegmentedLinear,
        Variant::FastDoubling,
        Variant::FastDoublingFused,
        Variant::DigitStringCopying,
        Variant::DigitStringSwapping,
    ];

    /// Variant selected by a write-request byte count.
    #[must_use]
    pub fn from_code(code: usize) -> Option<Self> {
        Self::ALL.get(code).copied()
    }

    /// Selector code of this variant.
    #[must_use]
    pub fn code(self) -> usize {
        self as usize
    }

    /// Stable short name used on the command line and in reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::SegmentedLinear => "list",
            Self::FastDoubling => "fdouble",
            Self::FastDoublingFused => "fdouble2",
            Self::DigitStringCopying => "string",
            Self::DigitStringSwapping => "string-swap",
        }
    }

    /// Whether the variant produces a big-integer decimal string.
    #[must_use]
    pub fn is_big_integer(self) -> bool {
        matches!(
            self,
            Self::SegmentedLinear | Self::DigitStringCopying | Self::DigitStringSwapping
        )
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = FibError;

    /// Accepts either a short name or a numeric selector code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<usize>() {
            return Self::from_code(code).ok_or(FibError::InvalidVariant(code));
        }
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FibError::Config(format!("unknown variant: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_codes_follow_table() {
        assert_eq!(Variant::from_code(0), Some(Variant::Linear));
        assert_eq!(Variant::from_code(1), Some(Variant::SegmentedLinear));
        assert_eq!(Variant::from_code(2), Some(Variant::FastDoubling));
        assert_eq!(Variant::from_code(3), Some(Variant::FastDoublingFused));
        assert_eq!(Variant::from_code(4), Some(Variant::DigitStringCopying));
        assert_eq!(Variant::from_code(5), Some(Variant::DigitStringSwapping));
        assert_eq!(Variant::from_code(6), None);
        assert_eq!(Variant::from_code(15), None);
    }

    #[test]
    fn code_inverts_from_code() {
        for v in Variant::ALL {
            assert_eq!(Variant::from_code(v.code()), Some(v));
        }
    }

    #[test]
    fn parse_names_and_codes() {
        assert_eq!("fdouble2".parse::<Variant>().unwrap(), Variant::FastDoublingFused);
        assert_eq!("String-Swap".parse::<Variant>().unwrap(), Variant::DigitStringSwapping);
        assert_eq!("1".parse::<Variant>().unwrap(), Variant::SegmentedLinear);
        assert_eq!("7".parse::<Variant>(), Err(FibError::InvalidVariant(7)));
        assert!(matches!("matrix".parse::<Variant>(), Err(FibError::Config(_))));
    }

    #[test]
    fn big_integer_variants() {
        let big: Vec<_> = Variant::ALL.into_iter().filter(|v| v.is_big_integer()).collect();
        assert_eq!(
            big,
            vec![
                Variant::SegmentedLinear,
                Variant::DigitStringCopying,
                Variant::DigitStringSwapping
            ]
        );
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Variant::FastDoubling.to_string(), "fdouble");
    }
}
