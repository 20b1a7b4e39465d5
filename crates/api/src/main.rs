//! Clinic Triage - Main Entry Point
//!
//! Usage: `clinic-triage [CONFIG_FILE]`

use anyhow::Context;
use api::{init_logging, run_server, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1);
    let settings =
        Settings::load(config_path.as_deref()).context("failed to load configuration")?;

    init_logging(&settings.logging)?;

    info!("=== Clinic Triage v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Decision support only; not a substitute for clinical judgment");

    run_server(settings).await
}
