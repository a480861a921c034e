mod decode;
mod error;
mod file;
mod http;

pub use decode::decode_records;
pub use error::LoadError;
pub use file::FileDictionaryLoader;
pub use http::HttpDictionaryLoader;

use async_trait::async_trait;
use limbu_config::dictionary::DictionaryConfig;
use limbu_config::network::NetworkConfig;
use limbu_core::{BuildStats, RawRecord, SuggestionEngine};

/// Source of raw dictionary records
#[async_trait]
pub trait DictionaryLoader: Send + Sync {
    /// Fetch and decode the whole dictionary once
    async fn fetch(&self) -> Result<Vec<RawRecord>, LoadError>;

    /// Human readable origin, for logs
    fn source(&self) -> String;
}

/// Pick the loader for the configured source. A local file wins over the URL.
pub fn loader_from_config(
    dictionary: &DictionaryConfig,
    network: &NetworkConfig,
) -> Result<Box<dyn DictionaryLoader>, LoadError> {
    match &dictionary.file {
        Some(path) => Ok(Box::new(FileDictionaryLoader::new(path))),
        None => Ok(Box::new(HttpDictionaryLoader::new(
            dictionary.url.clone(),
            network,
        )?)),
    }
}

/// Fetch a dictionary and hand it to the engine.
///
/// On failure nothing is published, so whatever snapshot was current stays current.
pub async fn load_into(
    engine: &SuggestionEngine,
    loader: &dyn DictionaryLoader,
) -> Result<BuildStats, LoadError> {
    let records = match loader.fetch().await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("Dictionary load from {} failed: {}", loader.source(), e);
            return Err(e);
        }
    };

    tracing::info!("Fetched {} records from {}", records.len(), loader.source());
    let stats = engine.submit_dictionary(records).await?;
    Ok(stats)
}
