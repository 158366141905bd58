use crate::error::{CacheError, Result};
use std::time::Duration;

const DEFAULT_CLEAN_INTERVAL: Duration = Duration::from_secs(5);
const DEFAULT_TTL: Duration = Duration::from_secs(5);

/// Construction parameters for a [`crate::Cache`].
///
/// ```rust
/// use std::time::Duration;
/// use sweep_cache::CacheConfig;
///
/// let config = CacheConfig::default()
///     .clean_interval(Duration::from_secs(30))
///     .default_ttl(Duration::from_secs(60));
///
/// assert_eq!(config.get_clean_interval(), Duration::from_secs(30));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CacheConfig {
    clean_interval: Duration,
    default_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            clean_interval: DEFAULT_CLEAN_INTERVAL,
            default_ttl: DEFAULT_TTL,
        }
    }
}

impl CacheConfig {
    pub fn new(clean_interval: Duration, default_ttl: Duration) -> Self {
        Self {
            clean_interval,
            default_ttl,
        }
    }

    /// Sets how often the background sweeper removes expired entries.
    pub fn clean_interval(mut self, clean_interval: Duration) -> Self {
        self.clean_interval = clean_interval;
        self
    }

    /// Sets the TTL applied by [`crate::Cache::set`].
    pub fn default_ttl(mut self, default_ttl: Duration) -> Self {
        self.default_ttl = default_ttl;
        self
    }

    pub fn get_clean_interval(&self) -> Duration {
        self.clean_interval
    }

    pub fn get_default_ttl(&self) -> Duration {
        self.default_ttl
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.clean_interval.is_zero() {
            return Err(CacheError::InvalidCleanInterval);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_defaults_to_five_seconds() {
        let config = CacheConfig::default();

        assert_eq!(config.get_clean_interval(), Duration::from_secs(5));
        assert_eq!(config.get_default_ttl(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn it_rejects_zero_clean_interval() {
        // given
        let config = CacheConfig::default().clean_interval(Duration::ZERO);

        // when
        let result = config.validate();

        // then
        assert!(matches!(result, Err(CacheError::InvalidCleanInterval)));
    }

    #[test]
    fn it_accepts_zero_default_ttl() {
        let config = CacheConfig::new(Duration::from_millis(10), Duration::ZERO);

        assert!(config.validate().is_ok());
    }
}
