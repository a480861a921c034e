use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use limbu_core::types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod load_dictionary;
pub mod lookup;
pub mod text_input;

use load_dictionary::handle_dictionary_reload;
use lookup::handle_lookup;
use text_input::handle_text_input;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
    app_to_output_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            event = input_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
            _ = cancel.cancelled() => break,
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        if !handle_events(state.clone(), &app_to_output_tx, event).await? {
            break;
        }
    }

    tracing::info!("[EVENT_LOOP] Stopping");
    Ok(())
}

/// Returns `false` once the loop should stop
async fn handle_events(
    state: Arc<AppState>,
    app_to_output_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::TextInput(text) => {
            handle_text_input(&state, &text, app_to_output_tx).await?;
        }
        AppEvent::Lookup(word) => {
            handle_lookup(&state, word, app_to_output_tx).await?;
        }
        AppEvent::ReloadDictionary => {
            handle_dictionary_reload(state, app_to_output_tx.clone()).await;
        }
        AppEvent::Shutdown => {
            // let the printer drain what is queued before it stops
            app_to_output_tx.send(AppEvent::Shutdown).await?;
            return Ok(false);
        }
        AppEvent::DictionaryReady(_)
        | AppEvent::DictionaryFailed(_)
        | AppEvent::ShowSuggestions { .. }
        | AppEvent::ShowLookup { .. } => {
            // Output-only events, ignore in backend
        }
    }

    Ok(true)
}
