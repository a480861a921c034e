use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use limbu_config::Config;
use limbu_core::types::AppEvent;
use limbu_core::{DictionaryEntry, Meanings, SuggestionIndex};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

fn entry(id: &str, form: &str, phonetic: &str, en: &str) -> DictionaryEntry {
    DictionaryEntry {
        phonetic: phonetic.to_string(),
        meanings: Meanings {
            en: en.to_string(),
            ne: String::new(),
        },
        ..DictionaryEntry::new(id, form)
    }
}

fn loaded_state() -> Arc<AppState> {
    let state = Arc::new(AppState::new(Config::default()));
    state.engine.publish(SuggestionIndex::build(vec![
        entry("1", "ᤀᤁ", "aka", "one"),
        entry("2", "ᤀᤂ", "aga", "two"),
        entry("3", "ᤁᤀ", "kaa", "three"),
    ]));
    state
}

struct Harness {
    input_tx: AsyncSender<AppEvent>,
    output_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
    handle: JoinHandle<anyhow::Result<()>>,
}

fn start(state: Arc<AppState>) -> Harness {
    let (input_tx, input_rx) = kanal::bounded_async(16);
    let (output_tx, output_rx) = kanal::bounded_async(16);
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(event_loop(state, input_rx, output_tx, cancel.clone()));

    Harness {
        input_tx,
        output_rx,
        cancel,
        handle,
    }
}

async fn next_output(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("Timeout - no output event")
        .expect("output channel closed")
}

#[tokio::test]
async fn test_text_input_yields_suggestions_for_current_word() {
    let harness = start(loaded_state());

    harness
        .input_tx
        .send(AppEvent::TextInput("ᤁᤀ ᤀ".to_string()))
        .await
        .unwrap();

    match next_output(&harness.output_rx).await {
        AppEvent::ShowSuggestions { query, suggestions } => {
            assert_eq!(query, "ᤀ");
            let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
            assert_eq!(words, vec!["ᤀᤁ", "ᤀᤂ"]);
            assert_eq!(suggestions[0].phonetic, "aka");
            assert_eq!(suggestions[0].meaning, "one");
        }
        other => panic!("Wrong event type: {other:?}"),
    }

    harness.cancel.cancel();
    harness.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_limit_comes_from_config() {
    let state = loaded_state();
    state.config.write().await.suggestion.limit = 1;
    let harness = start(state);

    harness
        .input_tx
        .send(AppEvent::TextInput("ᤀ".to_string()))
        .await
        .unwrap();

    match next_output(&harness.output_rx).await {
        AppEvent::ShowSuggestions { suggestions, .. } => {
            assert_eq!(suggestions.len(), 1);
            assert_eq!(suggestions[0].word, "ᤀᤁ");
        }
        other => panic!("Wrong event type: {other:?}"),
    }

    harness.cancel.cancel();
    harness.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_queries_before_dictionary_load_are_empty() {
    let harness = start(Arc::new(AppState::new(Config::default())));

    harness
        .input_tx
        .send(AppEvent::TextInput("ᤀ".to_string()))
        .await
        .unwrap();

    match next_output(&harness.output_rx).await {
        AppEvent::ShowSuggestions { suggestions, .. } => assert!(suggestions.is_empty()),
        other => panic!("Wrong event type: {other:?}"),
    }

    harness.cancel.cancel();
    harness.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_lookup_known_and_unknown() {
    let harness = start(loaded_state());

    harness
        .input_tx
        .send(AppEvent::Lookup("ᤁᤀ".to_string()))
        .await
        .unwrap();
    match next_output(&harness.output_rx).await {
        AppEvent::ShowLookup { word, result } => {
            assert_eq!(word, "ᤁᤀ");
            assert_eq!(result.map(|r| r.meaning), Some("three".to_string()));
        }
        other => panic!("Wrong event type: {other:?}"),
    }

    harness
        .input_tx
        .send(AppEvent::Lookup("ᤜ".to_string()))
        .await
        .unwrap();
    match next_output(&harness.output_rx).await {
        AppEvent::ShowLookup { result, .. } => assert!(result.is_none()),
        other => panic!("Wrong event type: {other:?}"),
    }

    harness.cancel.cancel();
    harness.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_failed_reload_reports_and_keeps_snapshot() {
    let mut config = Config::default();
    config.dictionary.file = Some(
        std::env::temp_dir()
            .join("limbu-app-missing-dictionary.json")
            .display()
            .to_string(),
    );
    let state = Arc::new(AppState::new(config));
    state
        .engine
        .publish(SuggestionIndex::build(vec![entry("1", "ᤀᤁ", "aka", "one")]));
    let harness = start(state.clone());

    harness
        .input_tx
        .send(AppEvent::ReloadDictionary)
        .await
        .unwrap();

    match next_output(&harness.output_rx).await {
        AppEvent::DictionaryFailed(reason) => assert!(reason.contains("IO error")),
        other => panic!("Wrong event type: {other:?}"),
    }
    assert_eq!(state.engine.get_suggestions("ᤀ", 5).len(), 1);

    harness.cancel.cancel();
    harness.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_reload_from_file_publishes() {
    let path = std::env::temp_dir().join(format!("limbu-app-dict-{}.json", std::process::id()));
    tokio::fs::write(
        &path,
        r#"[{ "id": "9", "limbu": "ᤛᤀ", "phonetic": "waa", "meaning": { "en": "nine", "ne": "" }, "status": "verified" }]"#,
    )
    .await
    .unwrap();

    let mut config = Config::default();
    config.dictionary.file = Some(path.display().to_string());
    let state = Arc::new(AppState::new(config));
    let harness = start(state.clone());

    harness
        .input_tx
        .send(AppEvent::ReloadDictionary)
        .await
        .unwrap();

    let event = next_output(&harness.output_rx).await;
    let _ = tokio::fs::remove_file(&path).await;
    match event {
        AppEvent::DictionaryReady(stats) => {
            assert_eq!(stats.accepted, 1);
            assert_eq!(stats.generation, 1);
        }
        other => panic!("Wrong event type: {other:?}"),
    }
    assert_eq!(
        state.engine.lookup("ᤛᤀ").map(|e| e.phonetic.clone()),
        Some("waa".to_string())
    );

    harness.cancel.cancel();
    harness.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_shutdown_is_forwarded_and_stops_loop() {
    let harness = start(loaded_state());

    harness.input_tx.send(AppEvent::Shutdown).await.unwrap();

    assert!(matches!(
        next_output(&harness.output_rx).await,
        AppEvent::Shutdown
    ));
    timeout(Duration::from_secs(2), harness.handle)
        .await
        .expect("event loop did not stop")
        .unwrap()
        .unwrap();
}
