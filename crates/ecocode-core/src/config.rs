//! Workbench configuration
//!
//! Timings, canned texts and layout defaults. Loaded from an optional JSON
//! file; every field falls back to its default when absent.

use crate::error::Result;
use crate::panel::{Direction, PanelConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Storage key of the chat/editor splitter
pub const CHAT_PANEL_STORAGE_KEY: &str = "ecocode.layout.chat_panel_size";

pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Hello! I'm your AI coding assistant. How can I help you with your project today?";

pub const DEFAULT_CANNED_REPLY: &str =
    "I understand you want to work on your code. What specific feature or bug would you like help with?";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkbenchConfig {
    /// Delay before the assistant reply appears
    pub reply_delay_ms: u64,
    /// How long the "copied" check mark stays visible
    pub copy_indicator_ms: u64,
    /// Simulated build duration
    pub build_delay_ms: u64,
    /// Simulated preview load after a build
    pub preview_load_ms: u64,
    /// Viewport widths below this use the single-pane layout
    pub mobile_breakpoint: f64,
    pub chat_panel: PanelConfig,
    pub welcome_message: String,
    pub canned_reply: String,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            copy_indicator_ms: 2000,
            build_delay_ms: 1500,
            preview_load_ms: 1200,
            mobile_breakpoint: 768.0,
            chat_panel: PanelConfig {
                initial_size: 30.0,
                min_size: 20.0,
                max_size: 50.0,
                direction: Direction::Horizontal,
                storage_key: Some(CHAT_PANEL_STORAGE_KEY.to_string()),
            },
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
            canned_reply: DEFAULT_CANNED_REPLY.to_string(),
        }
    }
}

impl WorkbenchConfig {
    /// Load from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn copy_indicator(&self) -> Duration {
        Duration::from_millis(self.copy_indicator_ms)
    }

    pub fn build_delay(&self) -> Duration {
        Duration::from_millis(self.build_delay_ms)
    }

    pub fn preview_load(&self) -> Duration {
        Duration::from_millis(self.preview_load_ms)
    }
}

/// Per-user data directory (`~/.local/share/ecocode` and platform equivalents)
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ecocode")
}

/// Default location of the config file
pub fn default_config_path() -> PathBuf {
    data_dir().join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = WorkbenchConfig::default();
        assert_eq!(config.reply_delay(), Duration::from_millis(1000));
        assert_eq!(config.copy_indicator(), Duration::from_millis(2000));
        assert_eq!(config.build_delay(), Duration::from_millis(1500));
        assert_eq!(config.preview_load(), Duration::from_millis(1200));
        assert_eq!(config.chat_panel.storage_key.as_deref(), Some(CHAT_PANEL_STORAGE_KEY));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = WorkbenchConfig::load_or_default(dir.path().join("config.json")).unwrap();
        assert_eq!(config, WorkbenchConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"replyDelayMs": 250, "chatPanel": {"maxSize": 60}}"#).unwrap();

        let config = WorkbenchConfig::load_or_default(&path).unwrap();
        assert_eq!(config.reply_delay_ms, 250);
        assert_eq!(config.build_delay_ms, 1500);
        assert_eq!(config.chat_panel.max_size, 60.0);
        // Nested defaults come from PanelConfig, not from the workbench layout
        assert_eq!(config.chat_panel.min_size, 20.0);
        assert_eq!(config.canned_reply, DEFAULT_CANNED_REPLY);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(WorkbenchConfig::load_or_default(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_full_file_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = WorkbenchConfig::default();
        config.canned_reply = "Sure.".to_string();
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(WorkbenchConfig::load_or_default(&path).unwrap(), config);
    }
}
