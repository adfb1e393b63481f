use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// Digit symbols in value order. Shared by validation and expansion so both
/// agree on the supported range.
pub const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A positional numeral base in `2..=36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Radix(u32);

impl Radix {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = ALPHABET.len() as u32;

    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEXADECIMAL: Radix = Radix(16);

    /// The four systems the calculator names and fans out to.
    pub const NAMED: [Radix; 4] = [Self::BINARY, Self::OCTAL, Self::DECIMAL, Self::HEXADECIMAL];

    pub fn new(base: u32) -> Result<Self, ConversionError> {
        if (Self::MIN..=Self::MAX).contains(&base) {
            Ok(Radix(base))
        } else {
            Err(ConversionError::InvalidBase {
                base: i64::from(base),
            })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Human-readable name: the system name for 2, 8, 10 and 16, `Base N` otherwise.
    pub fn name(self) -> String {
        match self.0 {
            2 => "Binary".to_string(),
            8 => "Octal".to_string(),
            10 => "Decimal".to_string(),
            16 => "Hexadecimal".to_string(),
            n => format!("Base {n}"),
        }
    }

    /// The digit symbols valid in this base.
    pub fn digits(self) -> &'static str {
        // ALPHABET is ASCII, so any prefix is valid UTF-8.
        std::str::from_utf8(&ALPHABET[..self.0 as usize]).unwrap_or_default()
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Radix {
    type Error = ConversionError;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        Radix::new(base)
    }
}

/// Bases arrive as plain integers from JSON clients; negatives are `InvalidBase`, not a decode failure.
impl TryFrom<i64> for Radix {
    type Error = ConversionError;

    fn try_from(base: i64) -> Result<Self, Self::Error> {
        u32::try_from(base)
            .map_err(|_| ConversionError::InvalidBase { base })
            .and_then(Radix::new)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

/// Parses `"16"`, `"hex"`, `"Hexadecimal"` and friends.
impl FromStr for Radix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "binary" | "bin" => return Ok(Self::BINARY),
            "octal" | "oct" => return Ok(Self::OCTAL),
            "decimal" | "dec" => return Ok(Self::DECIMAL),
            "hexadecimal" | "hex" => return Ok(Self::HEXADECIMAL),
            _ => {}
        }

        let base: u32 = s.parse().map_err(|_| {
            format!("Invalid base: {s}. Use a number from 2 to 36 or one of: binary, octal, decimal, hexadecimal")
        })?;

        Radix::new(base).map_err(|e| e.to_string())
    }
}

/// Maps `0-9` to 0..=9 and `A-Z` (either case) to 10..=35.
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        _ => None,
    }
}

/// Inverse of [`digit_value`]. Values past the alphabet map to `'?'`, which
/// cannot happen for remainders of a valid [`Radix`].
pub fn digit_symbol(value: u32) -> char {
    ALPHABET
        .get(value as usize)
        .map(|&b| b as char)
        .unwrap_or('?')
}

pub fn is_valid_digit(c: char, radix: Radix) -> bool {
    digit_value(c).is_some_and(|v| v < radix.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Radix construction
    // ============================================================================

    #[test]
    fn test_radix_new_accepts_full_range() {
        for base in 2..=36 {
            assert_eq!(Radix::new(base).unwrap().get(), base);
        }
    }

    #[test]
    fn test_radix_new_rejects_out_of_range() {
        assert_eq!(
            Radix::new(1),
            Err(ConversionError::InvalidBase { base: 1 })
        );
        assert_eq!(
            Radix::new(37),
            Err(ConversionError::InvalidBase { base: 37 })
        );
        assert!(Radix::new(0).is_err());
    }

    #[test]
    fn test_radix_try_from_i64() {
        assert_eq!(Radix::try_from(16_i64).unwrap(), Radix::HEXADECIMAL);
        assert_eq!(
            Radix::try_from(-2_i64),
            Err(ConversionError::InvalidBase { base: -2 })
        );
        assert_eq!(
            Radix::try_from(i64::from(u32::MAX) + 1),
            Err(ConversionError::InvalidBase {
                base: i64::from(u32::MAX) + 1
            })
        );
        assert_eq!(
            Radix::try_from(37_i64),
            Err(ConversionError::InvalidBase { base: 37 })
        );
    }

    #[test]
    fn test_radix_from_str_names() {
        assert_eq!("binary".parse::<Radix>().unwrap(), Radix::BINARY);
        assert_eq!("OCT".parse::<Radix>().unwrap(), Radix::OCTAL);
        assert_eq!("Decimal".parse::<Radix>().unwrap(), Radix::DECIMAL);
        assert_eq!("hex".parse::<Radix>().unwrap(), Radix::HEXADECIMAL);
        assert_eq!("36".parse::<Radix>().unwrap().get(), 36);
    }

    #[test]
    fn test_radix_from_str_invalid() {
        assert!("".parse::<Radix>().is_err());
        assert!("sexagesimal".parse::<Radix>().is_err());
        let err = "40".parse::<Radix>().unwrap_err();
        assert!(err.contains("not supported"));
    }

    #[test]
    fn test_radix_name() {
        assert_eq!(Radix::BINARY.name(), "Binary");
        assert_eq!(Radix::HEXADECIMAL.name(), "Hexadecimal");
        assert_eq!(Radix::new(36).unwrap().name(), "Base 36");
    }

    #[test]
    fn test_radix_digits() {
        assert_eq!(Radix::BINARY.digits(), "01");
        assert_eq!(Radix::HEXADECIMAL.digits(), "0123456789ABCDEF");
        assert_eq!(Radix::new(36).unwrap().digits().len(), 36);
    }

    #[test]
    fn test_radix_deserialize_validates() {
        let radix: Radix = serde_json::from_str("16").unwrap();
        assert_eq!(radix, Radix::HEXADECIMAL);
        assert!(serde_json::from_str::<Radix>("99").is_err());
    }

    // ============================================================================
    // Digit tables
    // ============================================================================

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value('0'), Some(0));
        assert_eq!(digit_value('9'), Some(9));
        assert_eq!(digit_value('A'), Some(10));
        assert_eq!(digit_value('f'), Some(15));
        assert_eq!(digit_value('Z'), Some(35));
        assert_eq!(digit_value('-'), None);
        assert_eq!(digit_value(' '), None);
        assert_eq!(digit_value('é'), None);
    }

    #[test]
    fn test_digit_symbol_inverts_digit_value() {
        for (i, &b) in ALPHABET.iter().enumerate() {
            let symbol = digit_symbol(i as u32);
            assert_eq!(symbol, b as char);
            assert_eq!(digit_value(symbol), Some(i as u32));
        }
    }

    #[test]
    fn test_is_valid_digit_matches_digit_value() {
        for base in 2..=36 {
            let radix = Radix::new(base).unwrap();
            for &b in ALPHABET {
                let c = b as char;
                assert_eq!(
                    is_valid_digit(c, radix),
                    digit_value(c).unwrap() < base,
                    "digit {c} in base {base}"
                );
            }
        }
    }
}
