use serde::{Deserialize, Serialize};

use crate::error::ConversionError;
use crate::expand::expand;
use crate::numeral::NumeralString;
use crate::radix::Radix;
use crate::reduce::reduce;
use crate::step::{render, Step};

/// Successful conversion with its typed derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: NumeralString,
    /// Intermediate decimal value. `None` when source and target base match
    /// and no arithmetic was needed.
    pub value: Option<i64>,
    pub to: Radix,
    pub result: String,
    pub steps: Vec<Step>,
}

/// Wire form of a single conversion, as handed to UI clients.
///
/// Exactly one of `result`/`steps` or `errorMessage` is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub result: String,
    pub steps: Vec<String>,
    pub is_valid: bool,
    pub error_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ConversionError>,
}

/// Values of one input in the four named systems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllConversions {
    pub binary: String,
    pub octal: String,
    pub decimal: String,
    pub hexadecimal: String,
}

/// Wire form of [`AllConversions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllConversionsResult {
    pub binary: String,
    pub octal: String,
    pub decimal: String,
    pub hexadecimal: String,
    pub is_valid: bool,
    pub error_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ConversionError>,
}

/// Convert `raw` from base `from` to base `to`.
///
/// Bases are checked first, then the input is normalized and validated; no
/// arithmetic runs unless all of that succeeds. The derivation lists the
/// positional terms of the reduction (unless the source is decimal), followed
/// by the divisions of the expansion (unless the target is decimal). When both
/// bases match the normalized input is returned as is, with a single note.
pub fn convert(raw: &str, from: i64, to: i64) -> Result<Conversion, ConversionError> {
    let from = Radix::try_from(from)?;
    let to = Radix::try_from(to)?;
    let input = NumeralString::parse(raw, from)?;

    if from == to {
        let steps = vec![Step::Identity {
            input: input.as_str().to_string(),
            radix: from,
        }];
        return Ok(Conversion {
            result: input.as_str().to_string(),
            input,
            value: None,
            to,
            steps,
        });
    }

    let reduction = reduce(&input)?;
    // Reduced values carry no sign.
    let expansion = expand(reduction.value.unsigned_abs(), to);

    let mut steps = reduction.steps;
    steps.extend(expansion.steps);

    // Decimal to decimal is caught above, so one side always contributes.
    if steps.is_empty() {
        steps.push(Step::Identity {
            input: input.as_str().to_string(),
            radix: from,
        });
    }

    Ok(Conversion {
        input,
        value: Some(reduction.value),
        to,
        result: expansion.digits,
        steps,
    })
}

/// Convert and fold the outcome into the wire form. Never fails.
pub fn convert_number(raw: &str, from: i64, to: i64) -> ConversionResult {
    convert(raw, from, to).into()
}

/// Reduce once and expand into binary, octal, decimal and hexadecimal.
pub fn fan_out(raw: &str, from: i64) -> Result<AllConversions, ConversionError> {
    let from = Radix::try_from(from)?;
    let input = NumeralString::parse(raw, from)?;
    let value = reduce(&input)?.value;

    let [binary, octal, decimal, hexadecimal] =
        Radix::NAMED.map(|to| expand(value.unsigned_abs(), to).digits);

    Ok(AllConversions {
        binary,
        octal,
        decimal,
        hexadecimal,
    })
}

/// [`fan_out`] folded into the wire form. Never fails.
pub fn convert_to_all_systems(raw: &str, from: i64) -> AllConversionsResult {
    fan_out(raw, from).into()
}

impl From<Result<Conversion, ConversionError>> for ConversionResult {
    fn from(outcome: Result<Conversion, ConversionError>) -> Self {
        match outcome {
            Ok(conversion) => ConversionResult {
                result: conversion.result,
                steps: render(&conversion.steps),
                is_valid: true,
                error_message: String::new(),
                error: None,
            },
            Err(error) => ConversionResult {
                result: String::new(),
                steps: Vec::new(),
                is_valid: false,
                error_message: error.to_string(),
                error: Some(error),
            },
        }
    }
}

impl From<Result<AllConversions, ConversionError>> for AllConversionsResult {
    fn from(outcome: Result<AllConversions, ConversionError>) -> Self {
        match outcome {
            Ok(all) => AllConversionsResult {
                binary: all.binary,
                octal: all.octal,
                decimal: all.decimal,
                hexadecimal: all.hexadecimal,
                is_valid: true,
                error_message: String::new(),
                error: None,
            },
            Err(error) => AllConversionsResult {
                is_valid: false,
                error_message: error.to_string(),
                error: Some(error),
                ..Default::default()
            },
        }
    }
}
