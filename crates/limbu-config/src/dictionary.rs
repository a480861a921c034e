use std::env;

use serde::{Deserialize, Serialize};

use crate::env_parse;

/// Upstream Limbu dictionary payload
pub const DEFAULT_DICTIONARY_URL: &str =
    "https://raw.githubusercontent.com/ingsha09/limbu-dictionary-api/main/data.json?v=3";

fn default_enabled() -> bool {
    true
}

fn default_url() -> String {
    DEFAULT_DICTIONARY_URL.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_url")]
    pub url: String,
    /// Local JSON file, takes precedence over `url`
    #[serde(default)]
    pub file: Option<String>,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let enabled = env_parse("LIMBU_DICTIONARY_ENABLED").unwrap_or_else(default_enabled);
        let url = env::var("LIMBU_DICTIONARY_URL").unwrap_or_else(|_| default_url());
        let file = env::var("LIMBU_DICTIONARY_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty());

        Self { enabled, url, file }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            url: default_url(),
            file: None,
        }
    }
}
