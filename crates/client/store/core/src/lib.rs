//! Fighter store abstraction for the roster client.
//!
//! The view layer only ever talks to a [`FighterStore`]. Concrete stores live
//! in their own crates (`client-store-supabase`) or here when they carry no
//! extra dependencies ([`InMemoryFighterStore`]).
//!
//! # Usage
//!
//! ```ignore
//! use client_store_core::{FighterStore, InMemoryFighterStore};
//! use roster_core::NewFighter;
//!
//! async fn seed(store: &dyn FighterStore) -> Result<(), client_store_core::StoreError> {
//!     let created = store.create(NewFighter::new("Shadow Blade")).await?;
//!     let fetched = store.get(&created.id).await?;
//!     assert_eq!(created, fetched);
//!     Ok(())
//! }
//! ```

pub mod memory;
pub mod traits;

pub use memory::InMemoryFighterStore;
pub use traits::{FighterStore, StoreError, TransportError};
