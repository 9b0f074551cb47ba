//! Error types for payload parsing and fetching.

/// The payload could not be turned into a [`crate::TrainingResult`].
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Payload is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Payload does not match the training result schema: {0}")]
    Schema(#[source] serde_json::Error),
}

impl PayloadError {
    /// Classifies a serde_json error as either a syntax problem or a shape problem.
    pub(crate) fn from_serde(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Data => PayloadError::Schema(err),
            Category::Io | Category::Syntax | Category::Eof => PayloadError::InvalidJson(err),
        }
    }
}

/// Any way a single fetch of the training result can fail.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Backend answered with HTTP {0}")]
    Status(u16),

    #[error("Failed to read response body: {0}")]
    Body(#[from] std::io::Error),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error("Fetch task did not complete: {0}")]
    Join(String),
}
