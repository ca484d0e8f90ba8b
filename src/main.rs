// src/main.rs

use casino_deploy::{deploy, DeployConfig};
use eyre::Result;
use tracing_subscriber::EnvFilter;

// Zero-argument entry point: load config, deploy once, print the
// address. Any error propagates out of main, lands on stderr, and the
// process exits 1; stdout carries only the address line.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DeployConfig::from_env()?;
    let address = deploy::run(&config).await?;

    println!("{} deployed to: {:?}", config.artifact_name, address);
    Ok(())
}
