use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use radix_core::{Conversion, ConversionResult, Radix};

#[derive(Debug, clap::Args, Clone)]
pub struct ConvertOptions {
    /// Value to convert (surrounding whitespace is ignored, letters in any case)
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Source base: 2 to 36, or binary, octal, decimal, hexadecimal
    #[arg(short, long, env = "RADIX_FROM", default_value = "decimal")]
    pub from: Radix,

    /// Target base: 2 to 36, or binary, octal, decimal, hexadecimal
    #[arg(short, long, env = "RADIX_TO", default_value = "binary")]
    pub to: Radix,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print only the result, without the derivation
    #[arg(long)]
    pub no_steps: bool,
}

pub fn run(options: ConvertOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Converting '{}' from {} to {}",
            options.value,
            options.from.name(),
            options.to.name()
        );
    }

    log::debug!(
        "convert value={:?} from={} to={}",
        options.value,
        options.from,
        options.to
    );

    if options.json {
        // Invalid input is part of the JSON payload, not a process failure.
        let result = radix_core::convert_number(
            &options.value,
            i64::from(options.from.get()),
            i64::from(options.to.get()),
        );
        println!("{}", format_result_json(&result)?);
        return Ok(());
    }

    let conversion = radix_core::convert(
        &options.value,
        i64::from(options.from.get()),
        i64::from(options.to.get()),
    )
    .map_err(Error::from)?;

    print!("{}", format_conversion_text(&conversion, !options.no_steps));

    Ok(())
}

/// Convert a wire result to pretty JSON
fn format_result_json(result: &ConversionResult) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Render a conversion as colored text with numbered steps
fn format_conversion_text(conversion: &Conversion, show_steps: bool) -> String {
    let mut result = String::new();
    let from = conversion.input.radix();

    if !show_steps {
        result.push_str(&format!("{}\n", conversion.result));
        return result;
    }

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "{} ({}) → {}",
            conversion.input,
            from.name(),
            conversion.to.name()
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    result.push_str(&format!("\n{}\n", "Steps".bright_yellow().bold()));
    for (idx, step) in conversion.steps.iter().enumerate() {
        result.push_str(&format!(
            "  {} {}\n",
            format!("{:>3}.", idx + 1).yellow(),
            step
        ));
    }

    if let Some(value) = conversion.value {
        if from != Radix::DECIMAL && conversion.to != Radix::DECIMAL {
            result.push_str(&format!(
                "\n{}: {}\n",
                "Decimal".green(),
                value.to_string().bright_white()
            ));
        }
    }

    result.push_str(&format!(
        "\n{}: {}\n\n",
        "Result".green().bold(),
        conversion.result.bright_white().bold()
    ));

    result
}
