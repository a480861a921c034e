use std::fs;
use std::path::Path;

use anyhow::Context;
use limbu_config::Config;

/// Load config from a JSON file if given, otherwise from the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            let config = serde_json::from_str(&data)
                .with_context(|| format!("Failed to parse config {}", path.display()))?;
            Ok(config)
        }
        None => Ok(Config::new()),
    }
}
