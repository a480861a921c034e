use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use tokio::sync::{Mutex, watch};

use crate::dictionary::{DictionaryEntry, RawRecord};
use crate::error::CoreError;
use crate::index::{BuildStats, SuggestionIndex};

/// A published, immutable index
pub type Snapshot = Arc<SuggestionIndex>;

/// Owns the currently published [`SuggestionIndex`] and swaps it on reload.
///
/// Readers clone the current `Arc` and query it without holding any lock, so a
/// query always sees one complete snapshot. Builds are serialized and the last
/// one to complete replaces the previous snapshot.
pub struct SuggestionEngine {
    current: watch::Sender<Option<Snapshot>>,
    build_lock: Mutex<()>,
    generation: AtomicU64,
}

impl SuggestionEngine {
    pub fn new() -> Self {
        Self {
            current: watch::Sender::new(None),
            build_lock: Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    /// Build an index from decoded records off the async runtime and publish it.
    ///
    /// Malformed records are dropped and only show up in the returned stats. On
    /// error the previously published snapshot stays current.
    pub async fn submit_dictionary(&self, records: Vec<RawRecord>) -> Result<BuildStats, CoreError> {
        let _guard = self.build_lock.lock().await;

        let started = Instant::now();
        let record_count = records.len();
        tracing::info!("Building suggestion index from {} records", record_count);

        let index = tokio::task::spawn_blocking(move || SuggestionIndex::from_records(records))
            .await
            .map_err(|e| CoreError::BuildFailure(e.to_string()))?;

        let stats = self.publish(index);
        tracing::info!(
            "Suggestion index ready: {} entries ({} dropped) in {:?}",
            stats.accepted,
            stats.dropped_malformed,
            started.elapsed()
        );

        Ok(stats)
    }

    /// Publish an index built elsewhere. Returns its stats with the assigned generation.
    pub fn publish(&self, mut index: SuggestionIndex) -> BuildStats {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        index.set_generation(generation);
        let stats = index.stats();

        let snapshot = Arc::new(index);
        let replaced = self.current.send_if_modified(|current| {
            let newer = current
                .as_ref()
                .is_none_or(|published| published.stats().generation < generation);
            if newer {
                *current = Some(snapshot);
            }
            newer
        });

        if replaced {
            tracing::debug!("Published suggestion index generation {}", generation);
        } else {
            tracing::warn!("Discarded stale suggestion index generation {}", generation);
        }

        stats
    }

    /// Current snapshot, if any dictionary has been published
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.current.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Receiver that observes every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<Option<Snapshot>> {
        self.current.subscribe()
    }

    /// Ranked completions for `current_text`. Empty until a dictionary is published.
    pub fn get_suggestions(&self, current_text: &str, limit: usize) -> Vec<Arc<DictionaryEntry>> {
        match self.snapshot() {
            Some(index) => {
                let suggestions = index.suggest(current_text, limit);
                tracing::debug!("'{}' -> {} suggestions", current_text, suggestions.len());
                suggestions
            }
            None => Vec::new(),
        }
    }

    /// Exact match against the current snapshot
    pub fn lookup(&self, word: &str) -> Option<Arc<DictionaryEntry>> {
        self.snapshot().and_then(|index| index.lookup(word))
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}
