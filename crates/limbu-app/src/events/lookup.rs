use kanal::AsyncSender;
use limbu_core::types::{AppEvent, DisplaySuggestion};

use crate::state::AppState;

pub async fn handle_lookup(
    state: &AppState,
    word: String,
    app_to_output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let result = state
        .engine
        .lookup(&word)
        .map(|entry| DisplaySuggestion::from(entry.as_ref()));

    app_to_output_tx
        .send(AppEvent::ShowLookup { word, result })
        .await?;

    Ok(())
}
