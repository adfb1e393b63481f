use std::fmt;

use serde::Serialize;

use crate::radix::Radix;

/// One line of a conversion derivation.
///
/// Steps carry the integers produced by the arithmetic itself; the text is
/// only rendered through [`fmt::Display`] when a caller asks for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Step {
    /// Positional weight of one digit: `digit × radix^position = contribution`.
    Term {
        symbol: char,
        digit: u32,
        radix: Radix,
        position: usize,
        contribution: i64,
    },
    /// Total of all terms.
    Sum { total: i64 },
    /// One round of successive division.
    Division {
        dividend: u64,
        radix: Radix,
        quotient: u64,
        remainder: char,
    },
    /// Zero needs no division loop.
    Zero { radix: Radix },
    /// Remainders assembled from last to first.
    ReadBack { digits: String },
    /// Source and target bases are the same.
    Identity { input: String, radix: Radix },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Term {
                symbol,
                digit,
                radix,
                position,
                contribution,
            } => {
                if *digit >= 10 {
                    write!(f, "{symbol} ({digit}) × {radix}^{position} = {contribution}")
                } else {
                    write!(f, "{digit} × {radix}^{position} = {contribution}")
                }
            }
            Step::Sum { total } => write!(f, "Sum = {total} (decimal)"),
            Step::Division {
                dividend,
                radix,
                quotient,
                remainder,
            } => write!(f, "{dividend} ÷ {radix} = {quotient} remainder {remainder}"),
            Step::Zero { radix } => {
                write!(f, "0 is 0 in every base, so the result in base {radix} is 0")
            }
            Step::ReadBack { digits } => {
                write!(f, "Reading remainders from bottom to top: {digits}")
            }
            Step::Identity { input, radix } => {
                write!(f, "No conversion needed: {input} is already in {}", radix.name())
            }
        }
    }
}

/// Renders steps into the display strings handed to UI clients.
pub fn render(steps: &[Step]) -> Vec<String> {
    steps.iter().map(ToString::to_string).collect()
}
