use kanal::AsyncSender;
use limbu_core::input::{current_word, text_before_cursor};
use limbu_core::types::{AppEvent, DisplaySuggestion};

use crate::state::AppState;

/// Suggest completions for the word being typed at the end of `text`
pub async fn handle_text_input(
    state: &AppState,
    text: &str,
    app_to_output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (limit, context_chars) = {
        let config = state.config.read().await;
        (config.suggestion.limit, config.suggestion.context_chars)
    };

    let word = current_word(text_before_cursor(text, context_chars));

    let suggestions: Vec<DisplaySuggestion> = state
        .engine
        .get_suggestions(word, limit)
        .iter()
        .map(|entry| DisplaySuggestion::from(entry.as_ref()))
        .collect();

    if suggestions.is_empty() && !state.engine.is_ready() {
        tracing::debug!("Dictionary not loaded yet, no suggestions for '{}'", word);
    }

    app_to_output_tx
        .send(AppEvent::ShowSuggestions {
            query: word.to_string(),
            suggestions,
        })
        .await?;

    Ok(())
}
