//! # generate-openapi Entry Point
//!
//! Logs go to stderr so stdout carries only the document.

use clap::Parser;
use ensapi_cli::GenerateArgs;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = GenerateArgs::parse();
    ensapi_cli::run(&args, &mut std::io::stdout().lock())
}
