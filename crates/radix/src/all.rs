use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use radix_core::{AllConversions, AllConversionsResult, Radix};

#[derive(Debug, clap::Args, Clone)]
pub struct AllOptions {
    /// Value to convert
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Source base: 2 to 36, or binary, octal, decimal, hexadecimal
    #[arg(short, long, env = "RADIX_FROM", default_value = "decimal")]
    pub from: Radix,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: AllOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Converting '{}' from {} to all named systems",
            options.value,
            options.from.name()
        );
    }

    log::debug!("fan out value={:?} from={}", options.value, options.from);

    let from = i64::from(options.from.get());

    if options.json {
        let result = radix_core::convert_to_all_systems(&options.value, from);
        println!("{}", format_all_json(&result)?);
        return Ok(());
    }

    let all = radix_core::fan_out(&options.value, from).map_err(Error::from)?;

    println!(
        "\n{} {}\n",
        options.value.trim().to_uppercase().bright_cyan().bold(),
        format!("({})", options.from.name()).bright_black()
    );
    build_table(&all).printstd();
    println!();

    Ok(())
}

fn format_all_json(result: &AllConversionsResult) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// One row per named system: name, base, value
fn build_table(all: &AllConversions) -> prettytable::Table {
    let mut table = crate::prelude::new_table();

    let values = [&all.binary, &all.octal, &all.decimal, &all.hexadecimal];
    for (radix, value) in Radix::NAMED.iter().zip(values) {
        table.add_row(prettytable::row![radix.name(), radix.get(), value]);
    }

    table
}
