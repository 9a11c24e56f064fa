use thiserror::Error;

/// Errors that can occur while searching recipes or persisting favorites
#[derive(Error, Debug)]
pub enum FinderError {
    /// Transport failure, non-success status, or an undecodable response body
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider returned no record for the requested id
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// Persisted favorites could not be decoded
    #[error("Malformed persisted data: {0}")]
    MalformedPersistedData(String),

    /// Failed to read or write the favorites slot
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),
}
