use serde::{Deserialize, Serialize};
use slidecraft_document::MAX_PAYLOAD_LENGTH;
use slidecraft_editor::{HistoryConfig, DEFAULT_COALESCE_WINDOW_MS};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "slidecraft.config.json";

/// Slidecraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Continuous edits closer together than this share one undo step
    pub coalesce_window_ms: i64,

    /// Undo depth kept while replaying scripts (0 = unlimited)
    pub max_undo_levels: usize,

    /// Largest storage payload `pack` may produce, in characters
    pub storage_limit: usize,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), ?config, "loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn history(&self) -> HistoryConfig {
        HistoryConfig {
            coalesce_window_ms: self.coalesce_window_ms,
            max_undo_levels: self.max_undo_levels,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coalesce_window_ms: DEFAULT_COALESCE_WINDOW_MS,
            max_undo_levels: 0,
            storage_limit: MAX_PAYLOAD_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "coalesceWindowMs": 300,
            "storageLimit": 5000
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.coalesce_window_ms, 300);
        assert_eq!(config.max_undo_levels, 0);
        assert_eq!(config.storage_limit, 5000);
        assert_eq!(config.history().coalesce_window_ms, 300);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.coalesce_window_ms, 150);
        assert_eq!(config.storage_limit, 100_000);
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_string_lossy().to_string();
        assert_eq!(Config::load(&cwd).unwrap(), Config::default());

        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{"maxUndoLevels": 5}"#).unwrap();
        assert_eq!(Config::load(&cwd).unwrap().max_undo_levels, 5);

        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{"bogus": true"#).unwrap();
        assert!(Config::load(&cwd).is_err());
    }
}
