//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug)]
pub struct FrontendConfig {
    pub messages: MessageConfig,

    /// Require a second delete request before a fighter is removed.
    pub confirm_delete: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            messages: MessageConfig::default(),
            confirm_delete: true,
        }
    }
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, confirm_delete: bool) -> Self {
        Self {
            messages,
            confirm_delete,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROSTER_MESSAGE_CAPACITY` - Message log capacity (default: 32)
    /// - `ROSTER_CONFIRM_DELETE` - Ask before deleting a fighter (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("ROSTER_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(confirm) = read_env_bool("ROSTER_CONFIRM_DELETE") {
            config.confirm_delete = confirm;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 32 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
