use crate::prelude::{println, *};
use radix_core::Radix;
use serde::Serialize;

#[derive(Debug, clap::Args, Clone)]
pub struct SystemsOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// A named number system as shown to users
#[derive(Debug, Serialize)]
struct SystemInfo {
    name: String,
    base: u32,
    digits: &'static str,
}

pub fn run(options: SystemsOptions, _global: crate::Global) -> Result<()> {
    let systems = list_systems();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&systems)?);
        return Ok(());
    }

    let mut table = crate::prelude::new_table();
    table.set_titles(prettytable::row!["System", "Base", "Digits"]);
    for system in &systems {
        table.add_row(prettytable::row![system.name, system.base, system.digits]);
    }
    table.printstd();

    println!(
        "\nAny base from {} to {} is accepted; letters A-Z stand for 10-35.",
        Radix::MIN,
        Radix::MAX
    );

    Ok(())
}

fn list_systems() -> Vec<SystemInfo> {
    Radix::NAMED
        .iter()
        .map(|radix| SystemInfo {
            name: radix.name(),
            base: radix.get(),
            digits: radix.digits(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_systems() {
        let systems = list_systems();

        assert_eq!(systems.len(), 4);
        assert_eq!(systems[0].name, "Binary");
        assert_eq!(systems[0].digits, "01");
        assert_eq!(systems[3].base, 16);
        assert_eq!(systems[3].digits, "0123456789ABCDEF");
    }
}
