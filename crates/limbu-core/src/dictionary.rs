use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// Translations of a word. `en` is the primary meaning, `ne` the secondary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meanings {
    #[serde(deserialize_with = "null_as_default")]
    pub en: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ne: String,
}

impl Meanings {
    /// Meaning for a language code ("en" or "ne")
    pub fn get(&self, lang: &str) -> Option<&str> {
        let text = match lang {
            "en" => &self.en,
            "ne" => &self.ne,
            _ => return None,
        };
        (!text.is_empty()).then_some(text.as_str())
    }

    /// Primary meaning, falling back to the secondary one
    pub fn primary(&self) -> &str {
        if self.en.is_empty() { &self.ne } else { &self.en }
    }
}

/// A dictionary record as decoded from the upstream payload.
///
/// Every field is lenient: missing or `null` values decode to their defaults so
/// that one bad record never fails the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "limbu")]
    pub script_form: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub phonetic: String,
    #[serde(rename = "meaning", deserialize_with = "null_as_default")]
    pub meanings: Meanings,
    pub group: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

/// One indexed dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub id: String,
    /// Word in Limbu script, the lookup key
    pub script_form: String,
    /// Latin transliteration, display only
    pub phonetic: String,
    pub meanings: Meanings,
    pub group: Option<String>,
    pub status: String,
}

impl DictionaryEntry {
    /// Entry with only a script form, mostly useful for tests and tooling
    pub fn new(id: impl Into<String>, script_form: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            script_form: script_form.into(),
            phonetic: String::new(),
            meanings: Meanings::default(),
            group: None,
            status: String::new(),
        }
    }

    pub fn is_indexable(&self) -> bool {
        !self.script_form.is_empty()
    }
}

impl TryFrom<RawRecord> for DictionaryEntry {
    type Error = CoreError;

    fn try_from(record: RawRecord) -> Result<Self, Self::Error> {
        let script_form = match record.script_form {
            Some(form) if !form.is_empty() => form,
            _ => return Err(CoreError::MalformedRecord { id: record.id }),
        };

        Ok(Self {
            id: record.id,
            script_form,
            phonetic: record.phonetic,
            meanings: record.meanings,
            group: record.group,
            status: record.status,
        })
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
