//! Glue code tying the store handle, controller, and terminal UI together.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::{AppController, Frontend, FrontendConfig};
use client_store_core::FighterStore;

use crate::{config::CliConfig, event::EventLoop, presentation::terminal};

/// Terminal frontend. Owns configuration only; the store is injected at run time.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }

    /// Frontend and CLI configuration read from the environment.
    pub fn from_env() -> Self {
        Self::new(FrontendConfig::from_env(), CliConfig::from_env())
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, store: Arc<dyn FighterStore>) -> Result<()> {
        tracing::info!(backend = store.backend(), "CLI frontend starting");

        let (app, initial) = AppController::new(self.frontend_config.clone());
        let event_loop = EventLoop::new(app, store, self.cli_config.clone());

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        event_loop.run(&mut terminal, initial).await?;

        terminal::restore()?;
        tracing::info!("CLI frontend exiting");

        Ok(())
    }
}
