use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codec::EmvDecoder;
use colored::Colorize;
use qr_config::ToolConfig;
use serde_json::Value;
use tracing::{debug, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

mod input;
mod output;

#[derive(Parser)]
#[command(name = "emvqr")]
#[command(about = "Decode EMV merchant-presented QR payloads to JSON")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<String>,
    /// Capture the CRC without verifying it
    #[arg(long, global = true)]
    no_crc: bool,
    /// Print single-line JSON
    #[arg(long, global = true)]
    compact_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Commands {
    /// Fully decode an EMVCo payload
    Decode {
        /// QR payload text, or - to read one line from stdin
        qr: String,
    },
    /// List top-level TLV fields without classification or CRC check
    Flat {
        /// QR payload text, or - to read one line from stdin
        qr: String,
    },
    /// Decode the compact positional grammar
    Compact {
        /// QR payload text, or - to read one line from stdin
        qr: String,
    },
    /// Decode and reduce to the primary merchant account
    Summary {
        /// QR payload text, or - to read one line from stdin
        qr: String,
    },
}

impl Commands {
    fn qr_arg(&self) -> &str {
        match self {
            Self::Decode { qr } | Self::Flat { qr } | Self::Compact { qr } | Self::Summary { qr } => {
                qr
            }
        }
    }
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Config loading logs before the configured level is known
    let bootstrap = log_subscriber(env_filter(qr_config::DEFAULT_LOG_LEVEL), io::stderr);
    let mut config = tracing::subscriber::with_default(bootstrap, || {
        qr_config::load_config(cli.config.as_deref())
    })?;
    if cli.no_crc {
        config.decoder.enforce_crc = false;
    }
    if cli.compact_json {
        config.output.pretty = false;
    }

    tracing::subscriber::set_global_default(log_subscriber(
        env_filter(&config.log_level),
        io::stderr,
    ))
    .context("Failed to install log subscriber")?;
    debug!("Effective configuration: {:?}", config);

    let qr = input::resolve_qr(cli.command.qr_arg(), io::stdin().lock())?;
    let value = execute(&cli.command, &config, &qr)?;
    println!("{}", output::render(&value, config.output.pretty)?);
    Ok(())
}

/// `RUST_LOG` if set, otherwise `level`
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn log_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .finish()
}

/// Run one subcommand against already-resolved QR text
fn execute(command: &Commands, config: &ToolConfig, qr: &str) -> Result<Value> {
    let decoder = EmvDecoder::new(config.decoder.clone());

    let value = match command {
        Commands::Decode { .. } => {
            let payload = decoder.decode(qr).context("Failed to decode EMV payload")?;
            serde_json::to_value(payload)
        }
        Commands::Flat { .. } => {
            let fields = decoder.parse_flat(qr).context("Failed to list TLV fields")?;
            serde_json::to_value(fields)
        }
        Commands::Compact { .. } => {
            let info = codec::parse_compact_with(qr, &config.decoder)
                .context("Failed to decode compact payload")?;
            serde_json::to_value(info)
        }
        Commands::Summary { .. } => {
            let payload = decoder.decode(qr).context("Failed to decode EMV payload")?;
            serde_json::to_value(codec::project(&payload))
        }
    };

    value.context("Failed to serialize output")
}
