//! Postage calculator binary
//!
//! Rates mail pieces read from stdin, one per line.

use anyhow::Result;
use tracing::info;

use postage_cli::{config::CliConfig, logging, run};
use postage_rates::PostageEngine;

fn main() -> Result<()> {
    logging::init();

    info!("Starting postage calculator v{}", postage_common::VERSION);

    let config = CliConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let engine = PostageEngine::new(&config.engine)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(
        &engine,
        &config,
        stdin.lock(),
        stdout.lock(),
        std::io::stderr(),
    )?;

    Ok(())
}
