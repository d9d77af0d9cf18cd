use colored::Colorize;
use orbit_address::{Address, AddressParser};
use serde::Serialize;

use crate::cli::*;
use crate::config::CliConfig;

/// Runs a command, returning `false` when an address failed validation.
pub fn run_command(cli: Cli, config: CliConfig) -> anyhow::Result<bool> {
    if !config.color {
        colored::control::set_override(false);
    }
    let format = cli.format.unwrap_or(config.format);
    let parser = AddressParser::new();

    let (output, ok) = match cli.command {
        Command::Validate(args) => cmd_validate(&parser, &args, format)?,
        Command::Parse(args) => cmd_parse(&parser, &args, format)?,
        Command::Format(args) => cmd_format(&parser, &args, format)?,
    };
    println!("{output}");
    Ok(ok)
}

#[derive(Serialize)]
struct Validation<'a> {
    address: &'a str,
    valid: bool,
}

#[derive(Serialize)]
struct Parsed {
    address: String,
    root: String,
    path: String,
    version: u64,
    codec: String,
    hash: String,
    digest: String,
}

fn cmd_validate(
    parser: &AddressParser,
    args: &ValidateArgs,
    format: OutputFormat,
) -> anyhow::Result<(String, bool)> {
    let results: Vec<Validation<'_>> = args
        .addresses
        .iter()
        .map(|address| Validation {
            address,
            valid: parser.is_valid(address),
        })
        .collect();
    let ok = results.iter().all(|r| r.valid);
    tracing::debug!(count = results.len(), ok, "validated addresses");

    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&results)?,
        OutputFormat::Text => results
            .iter()
            .map(|r| {
                if r.valid {
                    format!("{} {}", "✓ valid  ".green().bold(), r.address)
                } else {
                    format!("{} {}", "✗ invalid".red().bold(), r.address)
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok((output, ok))
}

fn cmd_parse(
    parser: &AddressParser,
    args: &ParseArgs,
    format: OutputFormat,
) -> anyhow::Result<(String, bool)> {
    let address = parser.parse(&args.address)?;
    let decoded = address.decode_root()?;
    let parsed = Parsed {
        address: address.to_string(),
        root: address.root().to_string(),
        path: address.path().to_string(),
        version: decoded.version,
        codec: format!("{:#x}", decoded.codec),
        hash: format!("{:#x}", decoded.hash_code),
        digest: decoded.digest_hex(),
    };

    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&parsed)?,
        OutputFormat::Text => [
            format!("Address: {}", parsed.address.bold()),
            format!("  Root:    {}", parsed.root.yellow()),
            format!("  Path:    {}", display_path(&parsed.path)),
            format!("  CID:     v{} codec {} hash {}", parsed.version, parsed.codec, parsed.hash),
            format!("  Digest:  {}", parsed.digest.dimmed()),
        ]
        .join("\n"),
    };
    Ok((output, true))
}

fn cmd_format(
    parser: &AddressParser,
    args: &FormatArgs,
    format: OutputFormat,
) -> anyhow::Result<(String, bool)> {
    let address = Address::new(args.root.as_str(), args.path.as_str());
    let canonical = address.to_string();
    if args.check && !parser.is_valid(&canonical) {
        anyhow::bail!("formatted address is not valid: {canonical}");
    }

    let output = match format {
        OutputFormat::Json => serde_json::to_string(&canonical)?,
        OutputFormat::Text => canonical,
    };
    Ok((output, true))
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        path.cyan().to_string()
    }
}
