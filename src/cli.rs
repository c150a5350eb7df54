use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "comfygate")]
#[command(about = "Job validation and readiness checks for a ComfyUI render worker", long_about = None)]
pub struct Cli {
    /// Path to the configuration file (default: config/comfygate.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Wait until the rendering server answers ready
    Check(CheckArgs),
    /// Validate a job payload and print its canonical form
    Validate(ValidateArgs),
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Override the configured rendering server base URL
    #[arg(long)]
    pub url: Option<String>,

    /// Override the configured probe retry budget
    #[arg(long)]
    pub retries: Option<u32>,

    /// Override the configured delay between probes, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Payload file to validate; reads stdin when omitted
    pub file: Option<PathBuf>,
}
