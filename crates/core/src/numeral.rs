use std::fmt;

use serde::Serialize;

use crate::error::ConversionError;
use crate::radix::{digit_value, Radix};

/// A non-empty, uppercase digit string in which every digit is valid for `radix`.
///
/// The only way to build one is [`NumeralString::parse`], so holding a value
/// means normalization and validation already happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumeralString {
    digits: String,
    radix: Radix,
}

impl NumeralString {
    /// Normalizes `raw` and validates each digit against `radix`.
    pub fn parse(raw: &str, radix: Radix) -> Result<Self, ConversionError> {
        let digits = normalize(raw)?;
        validate(&digits, radix)?;
        Ok(Self { digits, radix })
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Digit values paired with their symbols, most significant first.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = (char, u32)> + '_ {
        // Validated on construction, every char has a value.
        self.digits
            .chars()
            .map(|c| (c, digit_value(c).unwrap_or_default()))
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl fmt::Display for NumeralString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// Trims surrounding whitespace and uppercases letters.
///
/// Returns [`ConversionError::EmptyInput`] when nothing is left after trimming.
pub fn normalize(raw: &str) -> Result<String, ConversionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::EmptyInput);
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// Checks every character of an already normalized string against `radix`.
///
/// Stops at the first offending character.
pub fn validate(normalized: &str, radix: Radix) -> Result<(), ConversionError> {
    for character in normalized.chars() {
        let value = digit_value(character).ok_or(ConversionError::InvalidCharacter { character })?;
        if value >= radix.get() {
            return Err(ConversionError::DigitOutOfRange {
                character,
                base: radix.get(),
            });
        }
    }
    Ok(())
}
