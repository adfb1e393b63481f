use crate::prelude::*;
use clap::Parser;

mod all;
mod convert;
mod error;
mod mcp;
mod prelude;
mod systems;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Convert numbers between bases 2 to 36 and explain every step"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "RADIX_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Convert a value from one base to another, with the derivation
    Convert(crate::convert::ConvertOptions),

    /// Convert a value to binary, octal, decimal and hexadecimal at once
    All(crate::all::AllOptions),

    /// List the named number systems and their digits
    Systems(crate::systems::SystemsOptions),

    /// Model Context Protocol server exposing the converter as tools
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Convert(options) => crate::convert::run(options, app.global),
        SubCommands::All(options) => crate::all::run(options, app.global),
        SubCommands::Systems(options) => crate::systems::run(options, app.global),
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
