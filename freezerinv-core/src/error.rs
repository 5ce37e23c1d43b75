use thiserror::Error;

#[derive(Debug, Error)]
pub enum FreezerInvError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to serialize inventory to JSON: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}
