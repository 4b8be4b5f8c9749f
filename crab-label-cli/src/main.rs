//! crab-label: barcode label command generator
//!
//! Renders barcode labels as ZPL, EPL or ESC/POS and writes them to a file,
//! stdout, or a raw TCP printer.

mod cli;
mod config;
mod logger;

use clap::Parser;
use crab_label::SUPPORTED_DPI;

use cli::Cli;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::from_env();

    logger::init_logger(&config.log_level, config.log_json)?;
    tracing::debug!(?config, "Configuration loaded");
    if !SUPPORTED_DPI.contains(&config.default_dpi) {
        tracing::warn!(dpi = config.default_dpi, "Unusual default DPI");
    }

    cli::run(cli, config).await
}
