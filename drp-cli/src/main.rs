//! DRP CLI - submit date ranges and print calendars without a browser.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "drp-cli",
    version,
    about = "Date range picker form toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: drp_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting drp-cli");
    drp_cmd::run(cli.command)
}
