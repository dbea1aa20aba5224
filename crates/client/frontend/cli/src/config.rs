//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 6, minimum: 3)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui = config.ui.with_message_panel_height(height);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl UiConfig {
    pub const MIN_MESSAGE_PANEL_HEIGHT: u16 = 3;

    pub fn with_message_panel_height(mut self, height: u16) -> Self {
        self.message_panel_height = height.max(Self::MIN_MESSAGE_PANEL_HEIGHT);
        self
    }

    /// Message lines that fit inside the panel borders.
    pub fn visible_messages(&self) -> usize {
        usize::from(self.message_panel_height.saturating_sub(2))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 6,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
