//! Tollgate binary
//!
//! ```text
//! tollgate --config /etc/tollgate/tollgate.toml
//! ```
//!
//! The JWT secret is required; set it in the file or through
//! `TOLLGATE__AUTH__JWT__SECRET`.

use clap::Parser;
use std::path::PathBuf;
use tollgate_server::run;

/// Command line interface for Tollgate
#[derive(Parser, Debug)]
#[command(name = "tollgate")]
#[command(about = "Bearer token and session gate for HTTP services")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
