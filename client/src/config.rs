use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Describing the client configuration.
#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Base URL every endpoint suffix is appended to.
    pub base_url: String,
    /// Delay applied to material-search input before a fetch fires, in
    /// milliseconds. Edits inside the window supersede each other.
    pub search_debounce_ms: u64,
    pub request_timeout_secs: u64,
    /// Where the bearer token and theme preference are persisted.
    /// In-memory only when absent.
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            search_debounce_ms: 500,
            request_timeout_secs: 30,
            store_path: None,
        }
    }
}

impl Config {
    /// Read the configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
