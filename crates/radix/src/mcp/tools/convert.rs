use crate::prelude::eprintln;
use serde::Deserialize;

use super::{text_result, JsonRpcError};

fn parse_arguments<T: for<'de> Deserialize<'de>>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null)).map_err(|e| {
        JsonRpcError::new(
            JsonRpcError::INVALID_PARAMS,
            format!("Invalid arguments: {e}"),
        )
    })
}

pub fn handle_convert_number(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ConvertNumberArgs {
        input: String,
        from_base: i64,
        to_base: i64,
    }

    let args: ConvertNumberArgs = parse_arguments(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling convert_number: input={:?}, from_base={}, to_base={}",
            args.input, args.from_base, args.to_base
        );
    }

    let result = radix_core::convert_number(&args.input, args.from_base, args.to_base);

    text_result(&result, !result.is_valid)
}

pub fn handle_convert_to_all_systems(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ConvertToAllSystemsArgs {
        input: String,
        from_base: Option<i64>,
    }

    let args: ConvertToAllSystemsArgs = parse_arguments(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling convert_to_all_systems: input={:?}, from_base={:?}",
            args.input, args.from_base
        );
    }

    let result = radix_core::convert_to_all_systems(&args.input, args.from_base.unwrap_or(10));

    text_result(&result, !result.is_valid)
}
