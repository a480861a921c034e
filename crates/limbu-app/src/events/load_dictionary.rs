use std::sync::Arc;

use kanal::AsyncSender;
use limbu_core::types::AppEvent;
use limbu_loader::{load_into, loader_from_config};

use crate::state::AppState;

/// Start a dictionary load in the background.
///
/// Returns immediately; the outcome is reported on the output channel. A failed
/// load leaves the current snapshot in place.
pub async fn handle_dictionary_reload(state: Arc<AppState>, app_to_output_tx: AsyncSender<AppEvent>) {
    let (dictionary, network) = {
        let config = state.config.read().await;
        (config.dictionary.clone(), config.network.clone())
    };

    if !dictionary.enabled {
        tracing::warn!("Dictionary disabled, suggestions will stay empty");
        return;
    }

    tokio::spawn(async move {
        let event = match loader_from_config(&dictionary, &network) {
            Ok(loader) => match load_into(&state.engine, loader.as_ref()).await {
                Ok(stats) => AppEvent::DictionaryReady(stats),
                Err(e) => AppEvent::DictionaryFailed(e.to_string()),
            },
            Err(e) => {
                tracing::error!("Failed to create dictionary loader: {}", e);
                AppEvent::DictionaryFailed(e.to_string())
            }
        };

        if let Err(e) = app_to_output_tx.send(event).await {
            tracing::debug!("Output closed before dictionary load finished: {}", e);
        }
    });
}
