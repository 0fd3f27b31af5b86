//! Configuration types for the finance client

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::text::DEFAULT_WORD_LIMIT;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Scheme, host and port of the finance server, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_csrf_cookie_name")]
    pub csrf_cookie_name: String,
    #[serde(default = "default_csrf_header_name")]
    pub csrf_header_name: String,
    #[serde(default = "default_word_limit")]
    pub word_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            csrf_cookie_name: default_csrf_cookie_name(),
            csrf_header_name: default_csrf_header_name(),
            word_limit: default_word_limit(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_csrf_cookie_name() -> String {
    "csrftoken".to_string()
}

fn default_csrf_header_name() -> String {
    "X-CSRFToken".to_string()
}

fn default_word_limit() -> usize {
    DEFAULT_WORD_LIMIT
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::ClientError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
