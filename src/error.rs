use thiserror::Error;

/// Result type alias using [`CacheError`].
pub type Result<T> = std::result::Result<T, CacheError>;

#[derive(Debug, Error)]
pub enum CacheError {
    /// The requested key is not present in the cache.
    #[error("key not found")]
    KeyNotFound,

    /// The sweep interval must be greater than zero.
    #[error("clean interval must be greater than zero")]
    InvalidCleanInterval,

    /// The background sweeper thread could not be started.
    #[error("failed to spawn sweeper thread: {0}")]
    SpawnSweeper(#[source] std::io::Error),
}

impl CacheError {
    /// Returns `true` for a cache miss.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, CacheError::KeyNotFound)
    }
}
