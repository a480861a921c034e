#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A record without a usable script form. Dropped from the build, never surfaced to callers.
    #[error("Malformed record {id:?}: missing script form")]
    MalformedRecord { id: String },

    #[error("Dictionary build failed: {0}")]
    BuildFailure(String),
}
