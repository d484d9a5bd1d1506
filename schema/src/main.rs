//! `app-schema`: inspect and produce app API messages from the command line.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use app_schema::catalog::{Catalog, MessageEntry};
use app_schema::infrastructure::{
    config::{BinaryFormat, Settings},
    telemetry::TelemetryBuilder,
};
use app_schema::object::to_json_string_pretty;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "app-schema", version, about = "Encode and decode app API messages")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Read and write length-delimited payloads
    #[arg(long, global = true)]
    framed: bool,

    /// Binary representation, overriding configuration
    #[arg(long, global = true, value_enum)]
    format: Option<BinaryFormat>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every known message name
    List {
        /// Only list messages from this package
        #[arg(long)]
        package: Option<String>,
    },
    /// Convert object-form JSON into binary
    Encode {
        /// Full or short message name
        message: String,
        /// Read from this file instead of stdin
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
    /// Convert binary into object-form JSON
    Decode {
        /// Full or short message name
        message: String,
        /// Read from this file instead of stdin
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
    /// Print the object form of an empty message
    Template {
        /// Full or short message name
        message: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::new().context("Failed to load configuration")?;
    if cli.framed {
        settings.codec.framed = true;
    }
    if let Some(format) = cli.format {
        settings.codec.binary_format = format;
    }

    TelemetryBuilder::from_settings(&settings.telemetry).init()?;
    debug!(?settings, "Configuration loaded");

    let catalog = Catalog::global();
    let codec = settings.codec.codec();
    let framing = settings.codec.framing();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::List { package } => {
            for entry in catalog.entries() {
                if package.as_deref().is_none_or(|p| entry.package() == p) {
                    writeln!(stdout, "{}", entry.full_name())?;
                }
            }
        }
        Command::Encode { message, input } => {
            let entry = resolve(catalog, &message)?;
            let text = String::from_utf8(read_input(input.as_ref())?).context("Input is not UTF-8")?;
            let object: serde_json::Value = serde_json::from_str(&text).context("Input is not valid JSON")?;
            let bytes = entry
                .encode_from_object(&codec, &object, framing)
                .with_context(|| format!("Failed to encode {}", entry.full_name()))?;
            info!(message = entry.full_name(), bytes = bytes.len(), "Encoded message");
            write_binary(&mut stdout, &bytes, settings.codec.binary_format)?;
        }
        Command::Decode { message, input } => {
            let entry = resolve(catalog, &message)?;
            let bytes = read_binary(&read_input(input.as_ref())?, settings.codec.binary_format)?;
            let object = entry
                .decode_to_object(&codec, &bytes, framing)
                .with_context(|| format!("Failed to decode {}", entry.full_name()))?;
            info!(message = entry.full_name(), bytes = bytes.len(), "Decoded message");
            writeln!(stdout, "{}", to_json_string_pretty(&object)?)?;
        }
        Command::Template { message } => {
            let entry = resolve(catalog, &message)?;
            let object = entry.default_object()?;
            writeln!(stdout, "{}", to_json_string_pretty(&object)?)?;
        }
    }

    stdout.flush()?;
    Ok(())
}

fn resolve<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a MessageEntry> {
    catalog
        .resolve(name)
        .with_context(|| format!("Cannot resolve message '{name}'"))
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn read_binary(raw: &[u8], format: BinaryFormat) -> Result<Vec<u8>> {
    match format {
        BinaryFormat::Raw => Ok(raw.to_vec()),
        BinaryFormat::Hex => {
            let Ok(text) = std::str::from_utf8(raw) else {
                bail!("Hex input is not UTF-8");
            };
            let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            Ok(hex::decode(digits).map_err(app_schema::SchemaError::from)?)
        }
    }
}

fn write_binary(out: &mut impl Write, bytes: &[u8], format: BinaryFormat) -> Result<()> {
    match format {
        BinaryFormat::Raw => out.write_all(bytes)?,
        BinaryFormat::Hex => writeln!(out, "{}", hex::encode(bytes))?,
    }
    Ok(())
}
