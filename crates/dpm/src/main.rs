//! Data Product Manager - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dpm` | Serve HTTP on the configured address |
//! | `dpm --request req.json` | Resolve one request file and print the response |

// Force-link dpm-providers to ensure linkme registrations are included
extern crate dpm_providers;

use clap::Parser;
use dpm::run;

/// Command line interface for the Data Product Manager
#[derive(Parser, Debug)]
#[command(name = "dpm")]
#[command(about = "Data Product Manager - resolve data products through registered providers")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Resolve this JSON request file once instead of serving HTTP
    #[arg(short, long)]
    pub request: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.request.as_deref()).await
}
