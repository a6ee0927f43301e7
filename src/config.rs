//! Configuration handling for the TUI

use crate::api::{DEFAULT_ADDRESS_LOOKUP_URL, DEFAULT_API_BASE_URL};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Table every form writes to unless configured otherwise
pub const DEFAULT_TABLE_ID: u32 = 19;

/// User configuration, read from `config.json`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Base URL of the row API, without table id
    pub api_base_url: Option<String>,
    /// Token sent as `Authorization: Token <token>`
    pub api_token: Option<String>,
    pub signup_table_id: Option<u32>,
    pub merchandise_table_id: Option<u32>,
    pub event_table_id: Option<u32>,
    /// Base URL of the postal-code lookup service
    pub address_lookup_url: Option<String>,
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("br.com", "lume", "lume-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory the log file is written to
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when it does not exist
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn address_lookup_url(&self) -> &str {
        self.address_lookup_url
            .as_deref()
            .unwrap_or(DEFAULT_ADDRESS_LOOKUP_URL)
    }

    pub fn table_ids(&self) -> TableIds {
        TableIds {
            signup: self.signup_table_id.unwrap_or(DEFAULT_TABLE_ID),
            merchandise: self.merchandise_table_id.unwrap_or(DEFAULT_TABLE_ID),
            event: self.event_table_id.unwrap_or(DEFAULT_TABLE_ID),
        }
    }
}

/// Destination table of each form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableIds {
    pub signup: u32,
    pub merchandise: u32,
    pub event: u32,
}

impl Default for TableIds {
    fn default() -> Self {
        AppConfig::default().table_ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.api_base_url.is_none());
        assert!(config.api_token.is_none());
        assert!(config.signup_table_id.is_none());
        assert!(config.merchandise_table_id.is_none());
        assert!(config.event_table_id.is_none());
        assert!(config.address_lookup_url.is_none());
    }

    #[test]
    fn test_defaults_fill_missing_values() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.address_lookup_url(), "https://viacep.com.br/ws");
        assert_eq!(
            config.table_ids(),
            TableIds {
                signup: 19,
                merchandise: 19,
                event: 19
            }
        );
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            api_base_url: Some("http://localhost:8000/api/database/rows/table".to_string()),
            api_token: Some("secret".to_string()),
            signup_table_id: Some(20),
            merchandise_table_id: Some(21),
            event_table_id: Some(22),
            address_lookup_url: Some("http://localhost:9000/ws".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.api_base_url(),
            "http://localhost:8000/api/database/rows/table"
        );
        assert_eq!(parsed.api_token, Some("secret".to_string()));
        assert_eq!(parsed.address_lookup_url(), "http://localhost:9000/ws");
        assert_eq!(
            parsed.table_ids(),
            TableIds {
                signup: 20,
                merchandise: 21,
                event: 22
            }
        );
    }

    #[test]
    fn test_partial_serialization() {
        let parsed: AppConfig = serde_json::from_str(r#"{"event_table_id": 42}"#).unwrap();
        let ids = parsed.table_ids();
        assert_eq!(ids.event, 42);
        assert_eq!(ids.signup, DEFAULT_TABLE_ID);
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"api_token": "abc", "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.api_token, Some("abc".to_string()));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = AppConfig::config_path();
        let _dir = AppConfig::log_dir();
    }

    fn scratch_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lume-tui-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("lume-tui-no-such-dir/config.json");
        let config = AppConfig::load_from(&path).unwrap();
        assert!(config.api_token.is_none());
        assert_eq!(config.table_ids(), TableIds::default());
    }

    #[test]
    fn test_load_reads_file() {
        let path = scratch_file("valid.json", r#"{"api_token": "abc", "signup_table_id": 7}"#);
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.api_token.as_deref(), Some("abc"));
        assert_eq!(config.table_ids().signup, 7);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let path = scratch_file("broken.json", "{ not json");
        assert!(AppConfig::load_from(&path).is_err());
    }
}
