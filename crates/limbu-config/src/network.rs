use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("limbu-suggest/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Settings for the one-shot dictionary fetch
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let timeout_seconds =
            env_parse("HTTP_TIMEOUT_SECONDS").unwrap_or_else(default_timeout_seconds);
        let user_agent = env::var("HTTP_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self {
            timeout_seconds,
            user_agent,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}
