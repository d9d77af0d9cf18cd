use clap::Parser;
use tracing::Level;

mod cli;
mod commands;
mod config;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => config::CliConfig::load(path)?,
        None => config::CliConfig::default(),
    };
    let ok = commands::run_command(cli, config)?;
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
