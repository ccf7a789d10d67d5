//! Cache builder: the capacity-validating construction entry point.
//!
//! Collects configuration (today just the capacity) and hands out caches
//! through fallible `try_build*` methods, so misconfiguration surfaces as
//! [`ConfigError`] instead of a panic deep in a constructor.
//!
//! ## Example
//!
//! ```
//! use lrukit::builder::CacheBuilder;
//!
//! let mut cache = CacheBuilder::new(100).try_build::<u64, String>().unwrap();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
use crate::policy::lru::LruCache;
#[cfg(feature = "concurrency")]
use crate::policy::lru::SharedLruCache;

/// Builder for cache instances.
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    capacity: usize,
}

impl CacheBuilder {
    /// Starts a builder for a cache holding at most `capacity` entries.
    /// Validation happens at build time.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Builds a single-threaded [`LruCache`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configured capacity is zero.
    pub fn try_build<K, V>(self) -> Result<LruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        LruCache::try_new(self.capacity)
    }

    /// Builds a [`SharedLruCache`] for cross-thread use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configured capacity is zero.
    #[cfg(feature = "concurrency")]
    pub fn try_build_shared<K, V>(self) -> Result<SharedLruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone + Send + Sync,
        V: Send + Sync,
    {
        SharedLruCache::try_new(self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_working_cache() {
        let mut cache = CacheBuilder::new(2).try_build::<u64, String>().unwrap();

        assert_eq!(cache.put(1, "one".to_string()), None);
        assert_eq!(cache.put(2, "two".to_string()), None);
        assert_eq!(cache.get(&1), Some(&"one".to_string()));

        // Capacity enforcement: key 2 is LRU after the get above.
        let evicted = cache.put(3, "three".to_string());
        assert_eq!(evicted, Some((2, "two".to_string())));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = CacheBuilder::new(0).try_build::<u64, u64>().unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }

    #[cfg(feature = "concurrency")]
    #[test]
    fn builds_a_shared_cache() {
        let cache = CacheBuilder::new(8).try_build_shared::<u64, u64>().unwrap();
        cache.put(1, 10);
        assert_eq!(*cache.get(&1).unwrap(), 10);
    }

    #[cfg(feature = "concurrency")]
    #[test]
    fn zero_capacity_shared_is_rejected() {
        assert!(CacheBuilder::new(0).try_build_shared::<u64, u64>().is_err());
    }
}
