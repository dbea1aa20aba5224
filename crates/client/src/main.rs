//! Fantasy Fighters roster client binary.
//!
//! This binary is the composition root that assembles:
//! 1. Store (`ROSTER_STORE`: Supabase by default, or in-memory)
//! 2. Frontend (UI) - CLI
//!
//! # Examples
//!
//! ```bash
//! # Remote roster (needs SUPABASE_URL and SUPABASE_ANON_KEY)
//! cargo run -p roster-client
//!
//! # Local, empty roster
//! ROSTER_STORE=memory cargo run -p roster-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use roster_client::{Client, StoreConfig, build_store};

    // 1. Load configuration from environment
    let store_config = StoreConfig::from_env()?;
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the file writer on exit
    let _log_guard = logging::setup_logging()?;

    tracing::info!("Starting roster client");
    tracing::info!(store = %store_config.kind, "Store selected");

    // 3. Build the store (independent layer)
    let store = build_store(&store_config)?;

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder().store(store).frontend(frontend).build()?;
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
