use crate::dictionary::DictionaryEntry;
use crate::index::BuildStats;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Text before the cursor changed
    TextInput(String),
    /// Exact lookup request for a typed word
    Lookup(String),
    ReloadDictionary,
    DictionaryReady(BuildStats),
    DictionaryFailed(String),
    ShowSuggestions {
        query: String,
        suggestions: Vec<DisplaySuggestion>,
    },
    ShowLookup {
        word: String,
        result: Option<DisplaySuggestion>,
    },
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySuggestion {
    pub word: String,
    pub phonetic: String,
    pub meaning: String,
}

impl From<&DictionaryEntry> for DisplaySuggestion {
    fn from(entry: &DictionaryEntry) -> Self {
        Self {
            word: entry.script_form.clone(),
            phonetic: entry.phonetic.clone(),
            meaning: entry.meanings.primary().to_string(),
        }
    }
}
