use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "orbit-address",
    about = "Validate, parse, and format OrbitDB database addresses",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format; overrides the config file.
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether addresses are valid
    Validate(ValidateArgs),
    /// Split an address into root and path
    Parse(ParseArgs),
    /// Build the canonical address string from a root and path
    Format(FormatArgs),
}

#[derive(Args)]
pub struct ValidateArgs {
    #[arg(required = true)]
    pub addresses: Vec<String>,
}

#[derive(Args)]
pub struct ParseArgs {
    pub address: String,
}

#[derive(Args)]
pub struct FormatArgs {
    #[arg(long)]
    pub root: String,
    #[arg(long, default_value = "")]
    pub path: String,
    /// Fail unless the formatted address is valid.
    #[arg(long)]
    pub check: bool,
}
