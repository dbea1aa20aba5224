//! Store selection for the composition root.

use std::{env, sync::Arc};

use anyhow::{Context, Result};
use client_store_core::{FighterStore, InMemoryFighterStore};
use client_store_supabase::{SupabaseConfig, SupabaseFighterStore};

/// Which [`FighterStore`] implementation backs the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreKind {
    /// Remote PostgREST table.
    #[default]
    Supabase,
    /// Process-local table that starts empty.
    Memory,
}

/// Store selection plus backend settings.
#[derive(Clone, Debug, Default)]
pub struct StoreConfig {
    pub kind: StoreKind,
}

impl StoreConfig {
    pub const fn new(kind: StoreKind) -> Self {
        Self { kind }
    }

    /// Environment variables:
    /// - `ROSTER_STORE` - `supabase` (default) or `memory`
    ///
    /// The Supabase backend reads its own variables when the store is built.
    ///
    /// # Errors
    ///
    /// Returns an error if `ROSTER_STORE` names an unknown backend.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind = match lookup("ROSTER_STORE") {
            Some(value) if !value.trim().is_empty() => value
                .trim()
                .parse::<StoreKind>()
                .with_context(|| format!("Unknown ROSTER_STORE value '{value}'"))?,
            _ => StoreKind::default(),
        };
        Ok(Self { kind })
    }
}

/// Constructs the configured store.
///
/// # Errors
///
/// Returns an error if the Supabase configuration is missing or invalid.
pub fn build_store(config: &StoreConfig) -> Result<Arc<dyn FighterStore>> {
    let store: Arc<dyn FighterStore> = match config.kind {
        StoreKind::Memory => Arc::new(InMemoryFighterStore::new()),
        StoreKind::Supabase => {
            let supabase =
                SupabaseConfig::from_env().context("Failed to load Supabase configuration")?;
            Arc::new(
                SupabaseFighterStore::new(supabase)
                    .context("Failed to create Supabase client")?,
            )
        }
    };

    tracing::info!(backend = store.backend(), "store ready");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| match key {
            "ROSTER_STORE" => value.map(str::to_string),
            _ => None,
        }
    }

    #[test]
    fn defaults_to_supabase() {
        assert_eq!(StoreConfig::from_lookup(lookup(None)).unwrap().kind, StoreKind::Supabase);
        assert_eq!(
            StoreConfig::from_lookup(lookup(Some("  "))).unwrap().kind,
            StoreKind::Supabase
        );
    }

    #[test]
    fn parses_backend_names() {
        assert_eq!(
            StoreConfig::from_lookup(lookup(Some("Memory"))).unwrap().kind,
            StoreKind::Memory
        );
        assert!(StoreConfig::from_lookup(lookup(Some("postgres"))).is_err());
        assert_eq!(StoreKind::Supabase.to_string(), "supabase");
    }

    #[test]
    fn memory_store_needs_no_credentials() {
        let store = build_store(&StoreConfig::new(StoreKind::Memory)).unwrap();
        assert_eq!(store.backend(), "memory");
    }
}
