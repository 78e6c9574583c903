//! vitae - a plain-text viewer for a personal portfolio's published data.
//!
//! Loads the site's JSON data set (from the local cache when fresh enough,
//! otherwise over HTTP) and prints either a one-screen overview or a
//! CV-style report.

mod format;
mod report;

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vitae_core::{Config, SiteLoader};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_usage() {
    eprintln!("Usage: vitae [cv] [--fresh]");
    eprintln!();
    eprintln!("  (no command)  print a portfolio overview");
    eprintln!("  cv            print a printable-CV style report");
    eprintln!("  --fresh       skip the local cache for this run");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let mut show_cv = false;
    let mut fresh = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "cv" => show_cv = true,
            "--fresh" => fresh = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(2);
            }
        }
    }

    let config = Config::load()?;
    info!(base_url = %config.resolved_base_url(), "vitae starting");

    let mut loader = SiteLoader::from_config(&config)?;
    if fresh {
        loader = loader.bypass_cache();
    }
    loader.init().await;

    match loader.data() {
        Some(data) => {
            let output = if show_cv {
                report::printable_cv(data)
            } else {
                report::overview(data, &loader)
            };
            print!("{}", output);
            Ok(())
        }
        None => {
            eprintln!("Failed to load site data; see log output for details.");
            eprintln!("Check the base URL ({}) and try again.", config.resolved_base_url());
            std::process::exit(1);
        }
    }
}
