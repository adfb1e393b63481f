use serde::{Deserialize, Serialize};

/// Reasons a conversion request can be rejected.
///
/// Every variant is a local validation failure. The engine returns these as
/// values; callers at the wire boundary turn them into the `errorMessage`
/// field of a result.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ConversionError {
    #[error("Input cannot be empty")]
    EmptyInput,

    #[error("Invalid character '{character}': not a digit in any supported base")]
    InvalidCharacter { character: char },

    #[error("Digit '{character}' is out of range for base {base}")]
    DigitOutOfRange { character: char, base: u32 },

    #[error("Base {base} is not supported (expected 2 to 36)")]
    InvalidBase { base: i64 },

    #[error("Value '{input}' in base {base} does not fit in a signed 64-bit integer")]
    Overflow { input: String, base: u32 },
}

/// Discriminant of [`ConversionError`], for callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    EmptyInput,
    InvalidCharacter,
    DigitOutOfRange,
    InvalidBase,
    Overflow,
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::EmptyInput => ErrorKind::EmptyInput,
            ConversionError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            ConversionError::DigitOutOfRange { .. } => ErrorKind::DigitOutOfRange,
            ConversionError::InvalidBase { .. } => ErrorKind::InvalidBase,
            ConversionError::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConversionError::EmptyInput.to_string(),
            "Input cannot be empty"
        );
        assert_eq!(
            ConversionError::DigitOutOfRange {
                character: '2',
                base: 2
            }
            .to_string(),
            "Digit '2' is out of range for base 2"
        );
        assert_eq!(
            ConversionError::InvalidBase { base: 40 }.to_string(),
            "Base 40 is not supported (expected 2 to 36)"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(ConversionError::EmptyInput.kind(), ErrorKind::EmptyInput);
        assert_eq!(
            ConversionError::InvalidCharacter { character: '.' }.kind(),
            ErrorKind::InvalidCharacter
        );
        assert_eq!(
            ConversionError::Overflow {
                input: "FFFFFFFFFFFFFFFFF".to_string(),
                base: 16
            }
            .kind(),
            ErrorKind::Overflow
        );
    }

    #[test]
    fn test_error_serializes_with_kind_tag() {
        let json = serde_json::to_value(ConversionError::DigitOutOfRange {
            character: '9',
            base: 8,
        })
        .unwrap();

        assert_eq!(json["kind"], "digitOutOfRange");
        assert_eq!(json["character"], "9");
        assert_eq!(json["base"], 8);
    }
}
