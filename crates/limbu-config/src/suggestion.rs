use limbu_core::DEFAULT_SUGGESTION_LIMIT;
use limbu_core::input::DEFAULT_CONTEXT_CHARS;
use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

fn default_context_chars() -> usize {
    DEFAULT_CONTEXT_CHARS
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Max suggestions per keystroke
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// How much text before the cursor to look at
    #[serde(default = "default_context_chars")]
    pub context_chars: usize,
}

impl SuggestionConfig {
    pub fn new() -> Self {
        Self {
            limit: env_parse("SUGGESTION_LIMIT").unwrap_or_else(default_limit),
            context_chars: env_parse("CONTEXT_CHARS").unwrap_or_else(default_context_chars),
        }
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            context_chars: default_context_chars(),
        }
    }
}
