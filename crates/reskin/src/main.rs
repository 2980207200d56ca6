//! reskin CLI - port React function components to Preact or Vue.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use reskin_core::LibraryTarget;
use tracing_subscriber::{fmt, EnvFilter};

mod compile;
mod config;
mod inputs;

#[derive(Parser)]
#[command(name = "reskin")]
#[command(about = "Port React function components to Preact or Vue")]
#[command(version)]
pub struct Cli {
    /// Target library: react, preact, vue2 or vue3
    target: LibraryTarget,

    /// Component files or directories to transpile
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory (defaults to config or "dist")
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Path to reskin.toml config file
    #[arg(short, long, default_value = "reskin.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let code = compile::run(cli.target, &cli.inputs, cli.out_dir, &cli.config).await?;

    Ok(ExitCode::from(code))
}
