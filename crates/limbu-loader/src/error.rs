use limbu_core::CoreError;

/// Failure to produce a dictionary as a whole. Individual bad records never end up here.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error(transparent)]
    Build(#[from] CoreError),
}
