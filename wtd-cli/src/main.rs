//! WTD CLI - headless access to the simulated water treatment sensors.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wtd-cli",
    version,
    about = "Water treatment dashboard sensor simulator"
)]
struct Cli {
    #[command(subcommand)]
    command: wtd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wtd_cmd::run(cli.command).await
}
