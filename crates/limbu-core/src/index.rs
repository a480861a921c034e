use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::collation;
use crate::dictionary::{DictionaryEntry, RawRecord};

/// Number of suggestions returned when the caller has no preference
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Diagnostics collected while building an index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Entries that made it into the index
    pub accepted: usize,
    /// Records dropped for having no script form
    pub dropped_malformed: usize,
    /// Entries whose script form was already taken by an earlier-sorted entry
    pub duplicate_forms: usize,
    /// Publication counter assigned by the engine, 0 for unpublished indexes
    pub generation: u64,
}

/// Immutable, collation-sorted word collection with an exact-match side index.
///
/// Built once per dictionary load and never mutated afterwards, so any number of
/// readers can query it concurrently without locking.
#[derive(Debug, Default)]
pub struct SuggestionIndex {
    /// Sorted by `collation::compare` on `script_form`, stable on ties
    entries: Vec<Arc<DictionaryEntry>>,
    /// script form -> position in `entries`; the last-sorted duplicate wins
    exact: HashMap<String, usize>,
    stats: BuildStats,
}

impl SuggestionIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from already decoded entries, silently skipping ones without a script form.
    pub fn build(entries: impl IntoIterator<Item = DictionaryEntry>) -> Self {
        let mut dropped = 0;
        let kept = entries
            .into_iter()
            .filter(|entry| {
                let keep = entry.is_indexable();
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .collect();

        Self::from_indexable(kept, dropped)
    }

    /// Build from raw upstream records, dropping malformed ones.
    pub fn from_records(records: impl IntoIterator<Item = RawRecord>) -> Self {
        let mut dropped = 0;
        let mut kept = Vec::new();

        for record in records {
            match DictionaryEntry::try_from(record) {
                Ok(entry) => kept.push(entry),
                Err(e) => {
                    tracing::debug!("Skipping record: {}", e);
                    dropped += 1;
                }
            }
        }

        Self::from_indexable(kept, dropped)
    }

    fn from_indexable(mut entries: Vec<DictionaryEntry>, dropped_malformed: usize) -> Self {
        // `sort_by` is stable, equal script forms keep their input order
        entries.sort_by(|a, b| collation::compare(&a.script_form, &b.script_form));

        let entries: Vec<Arc<DictionaryEntry>> = entries.into_iter().map(Arc::new).collect();

        let mut exact = HashMap::with_capacity(entries.len());
        let mut duplicate_forms = 0;
        for (position, entry) in entries.iter().enumerate() {
            if exact.insert(entry.script_form.clone(), position).is_some() {
                duplicate_forms += 1;
            }
        }

        if dropped_malformed > 0 {
            tracing::warn!("Dropped {} malformed dictionary records", dropped_malformed);
        }

        let stats = BuildStats {
            accepted: entries.len(),
            dropped_malformed,
            duplicate_forms,
            generation: 0,
        };

        Self {
            entries,
            exact,
            stats,
        }
    }

    pub(crate) fn set_generation(&mut self, generation: u64) {
        self.stats.generation = generation;
    }

    /// Up to `limit` entries whose script form starts with `prefix`, in collation order.
    ///
    /// An empty prefix yields nothing. Runs in O(log n + k): matches form one
    /// contiguous run in the sorted entries, found by binary search.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<Arc<DictionaryEntry>> {
        if prefix.is_empty() || limit == 0 {
            return Vec::new();
        }

        let start = self
            .entries
            .partition_point(|entry| collation::compare(&entry.script_form, prefix) == Ordering::Less);

        self.entries[start..]
            .iter()
            .take_while(|entry| entry.script_form.starts_with(prefix))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Exact script form lookup
    pub fn lookup(&self, word: &str) -> Option<Arc<DictionaryEntry>> {
        self.exact
            .get(word)
            .and_then(|&position| self.entries.get(position))
            .cloned()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.exact.contains_key(word)
    }

    /// Entries in collation order
    pub fn entries(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.iter().map(|entry| entry.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }
}
