//! Core library for radix
//!
//! This crate implements the **Functional Core** of the radix application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`radix_core`** (this crate): the conversion engine, pure functions with zero I/O
//! - **`radix`**: CLI rendering and the JSON-RPC tool server (the Imperative Shell)
//!
//! Every function here is deterministic and side-effect free. Failures are
//! returned as [`ConversionError`] values and never logged.
//!
//! # Pipeline
//!
//! A conversion runs `normalize → validate → reduce → expand`:
//!
//! - [`numeral`]: trims and uppercases the input, then checks each digit against the source base
//! - [`reduce`]: positional weighting into a checked 64-bit intermediate value
//! - [`expand`]: successive division into the target base
//! - [`convert`]: assembles the result and the ordered derivation, plus the
//!   four-system fan-out
//!
//! Supported bases are 2 through 36 with the digit alphabet `0-9A-Z`.
//!
//! # Example Usage
//!
//! ```rust
//! use radix_core::{convert_number, convert_to_all_systems};
//!
//! let result = convert_number("FF", 16, 2);
//! assert!(result.is_valid);
//! assert_eq!(result.result, "11111111");
//!
//! let all = convert_to_all_systems("10", 10);
//! assert_eq!(all.hexadecimal, "A");
//! ```

pub mod convert;
pub mod error;
pub mod expand;
pub mod numeral;
pub mod radix;
pub mod reduce;
pub mod step;

pub use convert::{
    convert, convert_number, convert_to_all_systems, fan_out, AllConversions,
    AllConversionsResult, Conversion, ConversionResult,
};
pub use error::{ConversionError, ErrorKind};
pub use numeral::NumeralString;
pub use radix::Radix;
pub use step::Step;
