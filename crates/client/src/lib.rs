//! Top-level client wiring a fighter store into a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (composition root)
//!   ├─→ Store (FighterStore: Supabase or in-memory)
//!   └─→ Frontend (UI layer - CLI, etc.), receives the store handle
//! ```
//!
//! There is no global store: exactly one `Arc<dyn FighterStore>` is built
//! here and handed to the frontend.

mod builder;
mod store;

pub use builder::ClientBuilder;
pub use store::{StoreConfig, StoreKind, build_store};

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use std::sync::Arc;

use anyhow::Result;
use client_store_core::FighterStore;

/// Top-level client container.
pub struct Client {
    store: Arc<dyn FighterStore>,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Name of the injected store backend.
    pub fn backend(&self) -> &str {
        self.store.backend()
    }

    /// Transfers control to the frontend until the user quits.
    ///
    /// # Errors
    ///
    /// Returns whatever fatal error the frontend reports. Store failures are
    /// handled inside the frontend and never surface here.
    pub async fn run(self) -> Result<()> {
        let Client {
            store,
            mut frontend,
        } = self;

        tracing::info!(backend = store.backend(), "client starting");
        let result = frontend.run(store).await;
        tracing::info!("client stopped");
        result
    }
}
