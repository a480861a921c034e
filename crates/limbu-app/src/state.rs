use std::sync::Arc;

use limbu_config::Config;
use limbu_core::SuggestionEngine;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub engine: Arc<SuggestionEngine>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            engine: Arc::new(SuggestionEngine::new()),
        }
    }
}
