//! Trait describing a runnable client front-end.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use client_store_core::FighterStore;

/// Frontend abstraction for UI layers.
///
/// Frontends talk to persistence only through the injected store handle;
/// they never construct a store themselves.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use std::sync::Arc;
/// use anyhow::Result;
/// use async_trait::async_trait;
/// use client_frontend_core::{AppController, Frontend, FrontendConfig, Response, dispatch};
/// use client_store_core::FighterStore;
///
/// struct PrintFrontend;
///
/// #[async_trait]
/// impl Frontend for PrintFrontend {
///     async fn run(&mut self, store: Arc<dyn FighterStore>) -> Result<()> {
///         let (mut app, request) = AppController::new(FrontendConfig::default());
///         let reply = dispatch(store.as_ref(), request.command).await;
///         app.handle(Response::new(request.ticket, reply));
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error. Store
    /// failures are not fatal; they are reported through the message log.
    async fn run(&mut self, store: Arc<dyn FighterStore>) -> Result<()>;
}
