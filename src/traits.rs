//! # Cache Trait Hierarchy
//!
//! Trait hierarchy for the cache, separating the universal operations from
//! recency-specific ones so callers can bound generics on exactly the
//! capability they need.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  put(&mut, K, V) → Option<(K, V)>       │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  capacity(&) → usize                    │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          MutableCache<K, V>             │
//!   │                                         │
//!   │  remove(&K) → Option<V>                 │
//!   │  remove_batch(&[K]) → Vec<Option<V>>    │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          LruCacheTrait<K, V>            │
//!   │                                         │
//!   │  pop_lru() → Option<(K, V)>             │
//!   │  peek_lru() → Option<(&K, &V)>          │
//!   │  touch(&K) → bool                       │
//!   │  recency_rank(&K) → Option<usize>       │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! | Trait             | Extends        | Purpose                            |
//! |-------------------|----------------|------------------------------------|
//! | `CoreCache`       | -              | Universal cache operations         |
//! | `MutableCache`    | `CoreCache`    | Adds arbitrary key removal         |
//! | `LruCacheTrait`   | `MutableCache` | Recency tracking and tail eviction |
//! | `ConcurrentCache` | `Send + Sync`  | Marker for thread-safe caches      |
//!
//! Note the `put` signature: it returns an optional *(key, value)* pair
//! rather than an optional value. The same shape carries two meanings —
//! "you overwrote this key" and "this other key was evicted" — see
//! [`CoreCache::put`] for the disambiguation rule.

/// Core cache operations that any fixed-capacity cache supports.
///
/// # Type Parameters
///
/// - `K`: Key type (implementations typically require `Eq + Hash + Clone`)
/// - `V`: Value type, treated opaquely
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, possibly displacing something.
    ///
    /// The return value is a single optional pair covering **two distinct
    /// cases**, deliberately not split into a richer enum:
    ///
    /// - `Some((k, v))` where `k` equals the inserted key: the key already
    ///   existed; `v` is the value it previously held. Nothing was evicted
    ///   and the entry count is unchanged.
    /// - `Some((k, v))` where `k` differs from the inserted key: the cache
    ///   was full, and the least-recently-used entry `(k, v)` was evicted
    ///   to make room.
    /// - `None`: the key was new and there was room; nothing came out.
    ///
    /// Callers that care which case happened must compare the returned key
    /// against the key they passed in. Treating an update's returned pair
    /// as an eviction notice is the classic misuse of this API.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    /// use lrukit::traits::CoreCache;
    ///
    /// let mut cache = LruCache::new(2);
    ///
    /// assert_eq!(cache.put(1, "first"), None);
    /// // Overwrite: returned key is the key we put.
    /// assert_eq!(cache.put(1, "FIRST"), Some((1, "first")));
    /// assert_eq!(cache.put(2, "second"), None);
    /// // Eviction: returned key is a different key.
    /// assert_eq!(cache.put(3, "third"), Some((1, "FIRST")));
    /// ```
    fn put(&mut self, key: K, value: V) -> Option<(K, V)>;

    /// Gets a reference to a value by key, promoting the key to most
    /// recently used. Returns `None` on a miss, with no mutation.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Returns `true` if the key exists. Does not promote.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the fixed maximum capacity.
    fn capacity(&self) -> usize;

    /// Removes all entries.
    fn clear(&mut self);
}

/// Caches supporting removal of arbitrary keys.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes an entry by key, returning its value if present.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes a batch of keys, returning each removal result in order.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|key| self.remove(key)).collect()
    }
}

/// Recency-specific operations for LRU caches.
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Returns the least recently used entry without removing or promoting
    /// it.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Promotes a key to most recently used without retrieving its value.
    /// Returns `true` if the key was found.
    fn touch(&mut self, key: &K) -> bool;

    /// Returns the key's position in recency order (0 = most recently
    /// used). O(n) list walk; intended for verification, not hot paths.
    fn recency_rank(&self, key: &K) -> Option<usize>;
}

/// Marker trait for cache types that are safe to share across threads.
pub trait ConcurrentCache: Send + Sync {}
