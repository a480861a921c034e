use std::path::PathBuf;

use async_trait::async_trait;
use limbu_core::RawRecord;

use crate::DictionaryLoader;
use crate::decode::decode_records;
use crate::error::LoadError;

/// Reads the dictionary payload from a local JSON file
pub struct FileDictionaryLoader {
    path: PathBuf,
}

impl FileDictionaryLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DictionaryLoader for FileDictionaryLoader {
    async fn fetch(&self) -> Result<Vec<RawRecord>, LoadError> {
        tracing::info!("Loading dictionary from file: {}", self.path.display());
        let json = tokio::fs::read_to_string(&self.path).await?;
        decode_records(&json)
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}
