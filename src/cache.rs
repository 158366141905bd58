use crate::error::{CacheError, Result};
use entry::Entry;
use parking_lot::{Mutex, RwLock};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;
use std::time::{Duration, Instant};
use sweeper::Sweeper;
use tracing::trace;

pub(crate) mod config;
mod entry;
pub(crate) mod stats;
mod sweeper;

pub use config::CacheConfig;
pub use stats::Stats;
use stats::Counters;

pub(crate) type RandomState = ahash::RandomState;

/// Thread-safe key-value cache with per-entry TTL and a background sweeper.
///
/// Every entry gets an expiry timestamp when it is written. A background thread wakes up once per
/// clean interval and removes all entries whose expiry lies in the past. Reads never check expiry
/// themselves: an expired entry stays readable until the next sweep removes it.
///
/// All access goes through a single reader/writer lock. [`Cache::get`] takes it in shared mode,
/// writes and sweeps take it exclusively.
///
/// Wrap the cache in a [`std::sync::Arc`] to share it between threads. Dropping the cache stops the
/// sweeper and joins its thread.
#[derive(Debug)]
pub struct Cache<K, V, S = RandomState> {
    inner: Arc<Inner<K, V, S>>,
    config: CacheConfig,
    sweeper: Mutex<Option<Sweeper>>,
    metrics_last_accessed: Mutex<Instant>,
}

#[derive(Debug)]
struct Inner<K, V, S> {
    storage: RwLock<HashMap<K, Entry<V>, S>>,
    counters: Counters,
}

impl<K, V, S> Inner<K, V, S> {
    fn purge_expired(&self) -> usize {
        let mut storage = self.storage.write();
        let now = Instant::now();

        let before = storage.len();
        storage.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - storage.len();

        self.counters.add_expired_count(removed as u64);
        trace!(removed, remaining = storage.len(), "swept expired cache entries");

        removed
    }
}

impl<K, V> Cache<K, V, RandomState>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    /// Creates a cache and starts its sweeper.
    ///
    /// Entries written with [`Cache::set`] live for `default_ttl`. The sweeper removes expired
    /// entries every `clean_interval`.
    ///
    /// # Panics
    ///
    /// Panics if `clean_interval` is zero or the sweeper thread cannot be spawned. Use
    /// [`Cache::with_config`] to handle these cases.
    pub fn new(clean_interval: Duration, default_ttl: Duration) -> Cache<K, V, RandomState> {
        match Cache::with_config(CacheConfig::new(clean_interval, default_ttl)) {
            Ok(cache) => cache,
            Err(err) => panic!("failed to create cache: {err}"),
        }
    }

    /// Creates a cache from `config` and starts its sweeper.
    pub fn with_config(config: CacheConfig) -> Result<Cache<K, V, RandomState>> {
        Cache::with_config_and_hasher(config, Default::default())
    }
}

impl<K, V, S> Cache<K, V, S>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
    S: BuildHasher + Send + Sync + 'static,
{
    /// Creates a cache from `config`, using `hash_builder` to hash the keys.
    pub fn with_config_and_hasher(config: CacheConfig, hash_builder: S) -> Result<Cache<K, V, S>> {
        config.validate()?;

        let inner = Arc::new(Inner {
            storage: RwLock::new(HashMap::with_hasher(hash_builder)),
            counters: Counters::default(),
        });

        let worker_inner = Arc::clone(&inner);
        let sweeper = Sweeper::spawn(config.get_clean_interval(), move || {
            worker_inner.purge_expired();
        })
        .map_err(CacheError::SpawnSweeper)?;

        Ok(Self {
            inner,
            config,
            sweeper: Mutex::new(Some(sweeper)),
            metrics_last_accessed: Mutex::new(Instant::now()),
        })
    }
}

impl<K, V, S> Cache<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Inserts a key-value pair that expires after the default TTL.
    ///
    /// An existing entry for `key` is replaced, including its expiry.
    pub fn set(&self, key: K, value: V) {
        self.set_with_ttl(key, value, self.config.get_default_ttl());
    }

    /// Inserts a key-value pair that expires after `ttl`.
    ///
    /// An existing entry for `key` is replaced, including its expiry.
    pub fn set_with_ttl(&self, key: K, value: V, ttl: Duration) {
        let entry = Entry::new(value, ttl, Instant::now());

        let mut storage = self.inner.storage.write();
        storage.insert(key, entry);
    }

    /// Returns a clone of the value stored for `key`.
    ///
    /// Expiry is not checked here. An entry whose TTL has elapsed is still returned until the
    /// sweeper removes it. Consider wrapping your values in [`std::sync::Arc`] if cloning is too
    /// expensive for your use-case.
    pub fn get<Q>(&self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        let storage = self.inner.storage.read();

        match storage.get(key) {
            Some(entry) => {
                self.inner.counters.increment_hit_count();
                Ok(entry.value().clone())
            }
            None => {
                self.inner.counters.increment_miss_count();
                Err(CacheError::KeyNotFound)
            }
        }
    }

    /// Removes the entry for `key`.
    ///
    /// Fails with [`CacheError::KeyNotFound`] if the key is absent.
    pub fn delete<Q>(&self, key: &Q) -> Result<()>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let mut storage = self.inner.storage.write();

        match storage.remove(key) {
            Some(_) => {
                self.inner.counters.increment_delete_count();
                Ok(())
            }
            None => Err(CacheError::KeyNotFound),
        }
    }

    /// Returns `true` if an entry for `key` is present, expired or not.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.storage.read().contains_key(key)
    }
}

impl<K, V, S> Cache<K, V, S> {
    /// Stops the background sweeper.
    ///
    /// Blocks until the sweeper thread has exited. Entries are no longer removed automatically
    /// afterwards, though [`Cache::purge_expired`] still works. Calling this more than once is a
    /// no-op.
    pub fn stop_cleaner(&self) {
        let sweeper = self.sweeper.lock().take();

        if let Some(sweeper) = sweeper {
            sweeper.stop();
        }
    }

    pub fn is_cleaner_running(&self) -> bool {
        self.sweeper.lock().as_ref().is_some_and(Sweeper::is_running)
    }

    /// Removes all expired entries right away and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.inner.purge_expired()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.inner.storage.write().clear();
    }

    /// Number of entries, including expired entries not yet swept.
    pub fn len(&self) -> usize {
        self.inner.storage.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clean_interval(&self) -> Duration {
        self.config.get_clean_interval()
    }

    pub fn default_ttl(&self) -> Duration {
        self.config.get_default_ttl()
    }

    /// Returns the counters collected since the previous call and resets them.
    pub fn stats(&self) -> Stats {
        let millis_elapsed = {
            let mut guard = self.metrics_last_accessed.lock();
            let millis_elapsed = guard.elapsed().as_millis();
            *guard = Instant::now();
            millis_elapsed
        };

        self.inner.counters.take(millis_elapsed)
    }
}
