//! Supabase store configuration.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Table used when `SUPABASE_TABLE` is unset.
pub const DEFAULT_TABLE: &str = "Fighters";

/// Request timeout used when `SUPABASE_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Supabase project endpoint and credentials.
#[derive(Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://abcd.supabase.co`.
    pub url: String,

    /// Public anon key; sent as both `apikey` and bearer token.
    pub anon_key: String,

    /// Table holding the roster.
    pub table: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            table: DEFAULT_TABLE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SUPABASE_URL` - Project URL (required)
    /// - `SUPABASE_ANON_KEY` - Anon API key (required)
    /// - `SUPABASE_TABLE` - Table name (default: Fighters)
    /// - `SUPABASE_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let anon_key =
            lookup("SUPABASE_ANON_KEY").ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;

        let mut config = Self::new(url, anon_key);

        if let Some(table) = lookup("SUPABASE_TABLE") {
            config.table = table;
        }

        if let Some(raw) = lookup("SUPABASE_TIMEOUT_SECS") {
            let secs = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: "SUPABASE_TIMEOUT_SECS",
                reason: e.to_string(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Set table name.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// PostgREST endpoint for the roster table.
    pub fn rest_endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "SUPABASE_URL",
                reason: format!("expected an http(s) URL, got {:?}", self.url),
            });
        }

        if self.anon_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "SUPABASE_ANON_KEY",
                reason: "must not be empty".to_string(),
            });
        }

        if self.table.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "SUPABASE_TABLE",
                reason: "must not be empty".to_string(),
            });
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::Invalid {
                key: "SUPABASE_TIMEOUT_SECS",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

// Keeps the key out of logs.
impl fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .field("table", &self.table)
            .field("timeout", &self.timeout)
            .finish()
    }
}
