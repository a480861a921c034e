use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use limbu_core::types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::{output_loop, spawn_stdin_reader};
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub input_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub app_to_output: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            input_to_app: kanal::bounded_async(256), // pasted text arrives in bursts
            app_to_output: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> anyhow::Result<JoinSet<anyhow::Result<()>>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.input_to_app.1.clone(),
            self.channels.app_to_output.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Output printer
        tasks.spawn(output_loop(
            self.channels.app_to_output.1.clone(),
            self.cancel_token.child_token(),
        ));

        // Dictionary load starts right away, queries are served while it runs
        self.channels
            .input_to_app
            .0
            .try_send(AppEvent::ReloadDictionary)?;

        // Stdin runs on its own thread so a pending read never blocks shutdown
        spawn_stdin_reader(self.channels.input_to_app.0.clone_sync())?;

        Ok(tasks)
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
