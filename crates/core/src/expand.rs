use serde::Serialize;

use crate::radix::{digit_symbol, Radix};
use crate::step::Step;

/// Digit string of a value in the target base and the divisions that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expansion {
    pub digits: String,
    pub steps: Vec<Step>,
}

/// Expand a value into `radix` by successive division.
///
/// - zero yields `"0"` with a single explanatory step
/// - base 10 is the plain decimal rendering, without steps
/// - otherwise one step per division, then the read-back of the remainders
pub fn expand(value: u64, radix: Radix) -> Expansion {
    if value == 0 {
        return Expansion {
            digits: "0".to_string(),
            steps: vec![Step::Zero { radix }],
        };
    }

    if radix == Radix::DECIMAL {
        return Expansion {
            digits: value.to_string(),
            steps: Vec::new(),
        };
    }

    let base = u64::from(radix.get());
    let mut remaining = value;
    let mut reversed = Vec::new();
    let mut steps = Vec::new();

    while remaining > 0 {
        let quotient = remaining / base;
        // remainder < base <= 36
        let remainder = digit_symbol((remaining % base) as u32);

        steps.push(Step::Division {
            dividend: remaining,
            radix,
            quotient,
            remainder,
        });

        reversed.push(remainder);
        remaining = quotient;
    }

    let digits: String = reversed.into_iter().rev().collect();
    steps.push(Step::ReadBack {
        digits: digits.clone(),
    });

    Expansion { digits, steps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeral::NumeralString;
    use crate::reduce::reduce;

    fn radix(base: u32) -> Radix {
        Radix::new(base).unwrap()
    }

    // ============================================================================
    // Digits
    // ============================================================================

    #[test]
    fn test_expand_binary() {
        assert_eq!(expand(255, Radix::BINARY).digits, "11111111");
        assert_eq!(expand(10, Radix::BINARY).digits, "1010");
    }

    #[test]
    fn test_expand_octal_hex_and_base_36() {
        assert_eq!(expand(10, Radix::OCTAL).digits, "12");
        assert_eq!(expand(10, Radix::HEXADECIMAL).digits, "A");
        assert_eq!(expand(3_735_928_559, Radix::HEXADECIMAL).digits, "DEADBEEF");
        assert_eq!(expand(35, radix(36)).digits, "Z");
    }

    #[test]
    fn test_expand_max_value() {
        let max = i64::MAX.unsigned_abs();
        assert_eq!(expand(max, Radix::HEXADECIMAL).digits, "7FFFFFFFFFFFFFFF");
        assert_eq!(expand(max, Radix::BINARY).digits, "1".repeat(63));
    }

    #[test]
    fn test_expand_past_signed_range_keeps_dividends_positive() {
        let expansion = expand(1 << 63, Radix::BINARY);

        assert_eq!(expansion.digits, format!("1{}", "0".repeat(63)));
        assert_eq!(
            expansion.steps[0].to_string(),
            "9223372036854775808 ÷ 2 = 4611686018427387904 remainder 0"
        );
        assert_eq!(
            expand(u64::MAX, Radix::HEXADECIMAL).digits,
            "FFFFFFFFFFFFFFFF"
        );
    }

    #[test]
    fn test_expand_decimal_has_no_steps() {
        let expansion = expand(1234, Radix::DECIMAL);
        assert_eq!(expansion.digits, "1234");
        assert!(expansion.steps.is_empty());
    }

    // ============================================================================
    // Zero
    // ============================================================================

    #[test]
    fn test_expand_zero_has_single_step_in_every_base() {
        for base in 2..=36 {
            let expansion = expand(0, radix(base));
            assert_eq!(expansion.digits, "0");
            assert_eq!(expansion.steps, vec![Step::Zero { radix: radix(base) }]);
        }
    }

    // ============================================================================
    // Steps
    // ============================================================================

    #[test]
    fn test_expand_steps() {
        let expansion = expand(255, Radix::HEXADECIMAL);
        let rendered = crate::step::render(&expansion.steps);
        assert_eq!(
            rendered,
            vec![
                "255 ÷ 16 = 15 remainder F",
                "15 ÷ 16 = 0 remainder F",
                "Reading remainders from bottom to top: FF",
            ]
        );
    }

    #[test]
    fn test_expand_one_division_per_digit() {
        let expansion = expand(255, Radix::BINARY);
        let divisions = expansion
            .steps
            .iter()
            .filter(|s| matches!(s, Step::Division { .. }))
            .count();
        assert_eq!(divisions, expansion.digits.len());
    }

    // ============================================================================
    // Round trip with reduce
    // ============================================================================

    #[test]
    fn test_round_trip_strips_leading_zeros() {
        let numeral = NumeralString::parse("00ff", Radix::HEXADECIMAL).unwrap();
        let value = reduce(&numeral).unwrap().value;
        assert_eq!(expand(value.unsigned_abs(), Radix::HEXADECIMAL).digits, "FF");
    }

    #[test]
    fn test_round_trip_every_base() {
        for base in 2..=36 {
            for value in [1_i64, 35, 36, 1295, 46_655, 1 << 40, i64::MAX] {
                let digits = expand(value.unsigned_abs(), radix(base)).digits;
                let numeral = NumeralString::parse(&digits, radix(base)).unwrap();
                assert_eq!(
                    reduce(&numeral).unwrap().value,
                    value,
                    "{value} in base {base}"
                );
            }
        }
    }
}
