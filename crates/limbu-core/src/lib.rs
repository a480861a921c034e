pub mod collation;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod index;
pub mod input;
pub mod types;

pub use dictionary::{DictionaryEntry, Meanings, RawRecord};
pub use engine::SuggestionEngine;
pub use error::CoreError;
pub use index::{BuildStats, DEFAULT_SUGGESTION_LIMIT, SuggestionIndex};
