//! Supabase-backed fighter store.
//!
//! Talks to the PostgREST API that Supabase exposes for each table
//! (`{url}/rest/v1/{table}`), authenticating with the project's anon key.
//!
//! ## Modules
//!
//! - [`config`]: endpoint and credentials, loaded from the environment
//! - [`client`]: [`SupabaseFighterStore`], the `FighterStore` implementation
//! - [`row`]: wire rows and the validation boundary into `roster_core::Fighter`
//! - [`error`]: configuration errors and transport error mapping

pub mod client;
pub mod config;
pub mod error;
pub mod row;

pub use client::SupabaseFighterStore;
pub use config::SupabaseConfig;
pub use error::ConfigError;
pub use row::FighterRow;
