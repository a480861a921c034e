use async_trait::async_trait;
use limbu_config::network::NetworkConfig;
use limbu_core::RawRecord;

use crate::DictionaryLoader;
use crate::decode::decode_records;
use crate::error::LoadError;

/// Fetches the dictionary payload with a single GET. No retries, no caching.
#[derive(Clone)]
pub struct HttpDictionaryLoader {
    client: reqwest::Client,
    url: String,
}

impl HttpDictionaryLoader {
    pub fn new(url: String, network: &NetworkConfig) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(network.timeout())
            .user_agent(network.user_agent.clone())
            .build()?;

        Ok(Self { client, url })
    }

    /// Use a preconfigured client
    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl DictionaryLoader for HttpDictionaryLoader {
    async fn fetch(&self) -> Result<Vec<RawRecord>, LoadError> {
        tracing::info!("Fetching dictionary from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes of dictionary data", body.len());

        decode_records(&body)
    }

    fn source(&self) -> String {
        self.url.clone()
    }
}
