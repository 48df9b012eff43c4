use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod logging;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.client_config();
    match cli.command {
        Command::Scrape(args) => commands::scrape(args, config).await,
        Command::Batch(args) => commands::batch(args, config).await,
    }
}
