use serde::Serialize;

use crate::error::ConversionError;
use crate::numeral::NumeralString;
use crate::radix::Radix;
use crate::step::Step;

/// Decimal value of a numeral together with the positional expansion that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reduction {
    pub value: i64,
    pub steps: Vec<Step>,
}

/// Reduce a numeral to its integer value by positional weighting.
///
/// Digits are processed from the rightmost (position 0) to the leftmost,
/// each contributing `digit × radix^position`. The weight is carried as a
/// running integer product so every displayed term is exact. Overflow of
/// the 64-bit intermediate is reported, never wrapped; zero digits add
/// nothing, so leading zeros are accepted at any length.
///
/// Base 10 input is parsed directly and yields no steps.
pub fn reduce(numeral: &NumeralString) -> Result<Reduction, ConversionError> {
    let radix = numeral.radix();
    let overflow = || ConversionError::Overflow {
        input: numeral.as_str().to_string(),
        base: radix.get(),
    };

    if radix == Radix::DECIMAL {
        let value = numeral.as_str().parse::<i64>().map_err(|_| overflow())?;
        return Ok(Reduction {
            value,
            steps: Vec::new(),
        });
    }

    let base = i64::from(radix.get());
    let mut value: i64 = 0;
    // None once radix^position no longer fits.
    let mut weight: Option<i64> = Some(1);
    let mut steps = Vec::with_capacity(numeral.len() + 1);

    for (position, (symbol, digit)) in numeral.digits().rev().enumerate() {
        let contribution = if digit == 0 {
            0
        } else {
            weight
                .and_then(|w| w.checked_mul(i64::from(digit)))
                .ok_or_else(overflow)?
        };
        value = value.checked_add(contribution).ok_or_else(overflow)?;

        steps.push(Step::Term {
            symbol,
            digit,
            radix,
            position,
            contribution,
        });

        weight = weight.and_then(|w| w.checked_mul(base));
    }

    steps.push(Step::Sum { total: value });

    Ok(Reduction { value, steps })
}
