//! A thread-safe, in-memory key-value cache with per-entry time-to-live.
//!
//! Entries are written with either an explicit TTL or the cache's default TTL. A background
//! sweeper thread wakes up on a fixed interval and removes every entry whose TTL has elapsed.
//!
//! # Features
//!
//! - Thread-safe by default, reads run concurrently under a shared lock
//! - Per-entry TTL with a configurable default
//! - Periodic background sweeping, no cleanup calls required from callers
//! - No unsafe code
//!
//! # Expiration
//!
//! Expiration is passive. Reads do not check whether an entry has expired, so an entry stays
//! readable for up to one clean interval after its TTL has elapsed. Once the sweeper is stopped
//! with [`Cache::stop_cleaner`], expired entries are only removed by [`Cache::delete`],
//! [`Cache::purge_expired`] or by being overwritten.
//!
//! # Examples
//!
//! Basic usage with string keys and values:
//!
//! ```rust
//! use std::time::Duration;
//! use sweep_cache::Cache;
//!
//! // Sweep every 5 seconds, keep entries for a minute by default
//! let cache = Cache::new(Duration::from_secs(5), Duration::from_secs(60));
//!
//! cache.set("user:1".to_string(), "alice");
//! assert_eq!(cache.get("user:1").ok(), Some("alice"));
//! ```
//!
//! Custom TTLs and cache misses:
//!
//! ```rust
//! use std::time::Duration;
//! use sweep_cache::Cache;
//!
//! let cache = Cache::new(Duration::from_secs(5), Duration::from_secs(60));
//!
//! cache.set_with_ttl("session".to_string(), 42, Duration::from_secs(1));
//! assert_eq!(cache.get("session").ok(), Some(42));
//!
//! cache.delete("session").unwrap();
//! assert!(cache.get("session").unwrap_err().is_key_not_found());
//! assert!(cache.delete("session").is_err());
//! ```
//!
//! Thread-safe usage across multiple threads:
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//! use std::time::Duration;
//! use sweep_cache::Cache;
//!
//! let cache = Arc::new(Cache::new(Duration::from_secs(5), Duration::from_secs(60)));
//! cache.set("key1", "value1");
//!
//! let cache_in_arc = Arc::clone(&cache);
//! let handle = thread::spawn(move || {
//!     cache_in_arc.set("key2", "value2");
//! });
//!
//! handle.join().unwrap();
//!
//! assert_eq!(cache.get("key1").ok(), Some("value1"));
//! assert_eq!(cache.get("key2").ok(), Some("value2"));
//!
//! cache.stop_cleaner();
//! assert!(!cache.is_cleaner_running());
//! ```

#![forbid(unsafe_code)]
pub mod cache;
pub mod error;

pub use cache::{Cache, CacheConfig, Stats};
pub use error::{CacheError, Result};
