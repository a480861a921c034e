use std::io::BufRead;
use std::thread::JoinHandle;

use kanal::{AsyncReceiver, Sender};
use limbu_core::types::{AppEvent, DisplaySuggestion};
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;

/// Turn one line of stdin into an app event.
///
/// Plain lines are the text before the cursor. `:reload`, `:lookup <word>` and
/// `:quit` are commands.
pub fn parse_line(line: &str) -> AppEvent {
    let line = line.trim_end_matches(['\r', '\n']);

    match line.trim() {
        ":reload" => AppEvent::ReloadDictionary,
        ":quit" => AppEvent::Shutdown,
        cmd => match cmd.strip_prefix(":lookup ") {
            Some(word) => AppEvent::Lookup(word.trim().to_string()),
            None => AppEvent::TextInput(line.to_string()),
        },
    }
}

/// Read stdin lines on a dedicated thread and forward them as events.
/// Sends `Shutdown` on EOF.
pub fn spawn_stdin_reader(tx: Sender<AppEvent>) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::error!("Failed to read stdin: {}", e);
                        break;
                    }
                };

                let event = parse_line(&line);
                let quit = matches!(event, AppEvent::Shutdown);
                if tx.send(event).is_err() || quit {
                    return;
                }
            }

            tracing::info!("stdin closed");
            let _ = tx.send(AppEvent::Shutdown);
        })
}

pub fn format_suggestions(suggestions: &[DisplaySuggestion]) -> String {
    suggestions
        .iter()
        .map(|s| format!("{}\t{}\t{}\n", s.word, s.phonetic, s.meaning))
        .collect()
}

/// Prints results to stdout until shutdown
pub async fn output_loop(
    output_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();

    loop {
        let event = tokio::select! {
            event = output_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
            _ = cancel.cancelled() => break,
        };

        match event {
            AppEvent::ShowSuggestions { query, suggestions } => {
                tracing::debug!("{} suggestions for '{}'", suggestions.len(), query);
                stdout
                    .write_all(format_suggestions(&suggestions).as_bytes())
                    .await?;
            }
            AppEvent::ShowLookup { word, result } => {
                let line = match result {
                    Some(found) => format_suggestions(std::slice::from_ref(&found)),
                    None => format!("{word}\t(not found)\n"),
                };
                stdout.write_all(line.as_bytes()).await?;
            }
            AppEvent::DictionaryReady(stats) => {
                tracing::info!(
                    "Dictionary ready: {} words (generation {})",
                    stats.accepted,
                    stats.generation
                );
            }
            AppEvent::DictionaryFailed(reason) => {
                tracing::warn!("Dictionary unavailable: {}", reason);
            }
            AppEvent::Shutdown => break,
            _ => {}
        }

        stdout.flush().await?;
    }

    tracing::info!("Output loop stopping");
    Ok(())
}
