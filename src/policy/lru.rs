//! # Least Recently Used (LRU) cache
//!
//! Fixed-capacity key-value cache that evicts the entry whose most recent
//! access is oldest whenever a new key would exceed capacity.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────────────────────────────┐
//!   │                      SharedLruCache<K, V>                       │
//!   │                                                                 │
//!   │   ┌─────────────────────────────────────────────────────────┐   │
//!   │   │           Arc<RwLock<LruCache<K, Arc<V>>>>              │   │
//!   │   └─────────────────────────────────────────────────────────┘   │
//!   │                             │                                   │
//!   │                             ▼                                   │
//!   │   ┌─────────────────────────────────────────────────────────┐   │
//!   │   │                    LruCache<K, V>                       │   │
//!   │   │                                                         │   │
//!   │   │   ┌─────────────────────────────────────────────────┐   │   │
//!   │   │   │  FxHashMap<K, Entry<V>>   (key index)           │   │   │
//!   │   │   │                                                 │   │   │
//!   │   │   │  ┌───────┬─────────────────────────────────┐    │   │   │
//!   │   │   │  │  Key  │  Entry { value, node: SlotId }  │    │   │   │
//!   │   │   │  ├───────┼───────────────────────┬─────────┘    │   │   │
//!   │   │   │  │  k_1  │  ── non-owning handle │              │   │   │
//!   │   │   │  └───────┴───────────────────────┼──────────    │   │   │
//!   │   │   └──────────────────────────────────┼──────────────┘   │   │
//!   │   │                                      ▼                  │   │
//!   │   │   ┌─────────────────────────────────────────────────┐   │   │
//!   │   │   │  RecencyList<K>   (access order, keys only)     │   │   │
//!   │   │   │                                                 │   │   │
//!   │   │   │  head ─► [k_1] ◄──► [k_2] ◄──► [k_3] ◄── tail   │   │   │
//!   │   │   │          (MRU)                 (LRU)            │   │   │
//!   │   │   └─────────────────────────────────────────────────┘   │   │
//!   │   └─────────────────────────────────────────────────────────┘   │
//!   └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values live in the index; the recency list holds keys only. Each index
//! entry keeps the `SlotId` of its key's list node, so promotion and
//! eviction relink in O(1) without scanning. The two structures always
//! agree on the key set: every operation mutates both inside one critical
//! section, and debug builds re-validate after each mutation.
//!
//! ## Operation flow
//!
//! ```text
//!   put(k, v), k absent, cache full (capacity = 3):
//!     1. link k at head               head ─► [k] [a] [b] [c] ◄─ tail
//!     2. pop tail c, drop its entry   head ─► [k] [a] [b]     ◄─ tail
//!     3. return (c, value_of_c)
//!
//!   put(k, v2), k present:
//!     replace value in index, move k's node to head,
//!     return (k, v1)  ── the *previous* value, not an eviction
//!
//!   get(k): index lookup, move node to head, return &value
//! ```
//!
//! ## The put return contract
//!
//! `put` returns `Option<(K, V)>` and the pair means *either* "you
//! overwrote this key" (returned key equals the put key) *or* "this other
//! key was evicted" (returned key differs). Compare keys to tell the cases
//! apart; see [`LruCache::put`].
//!
//! ## Concurrency model
//!
//! `LruCache` is single-threaded (`&mut self`). [`SharedLruCache`] wraps
//! it in one coarse `parking_lot::RwLock` guarding the list and index
//! jointly: every mutating operation (including `get`, which relinks)
//! takes the write lock for its entire duration; pure reads (`len`,
//! `peek`, `contains`) take the read lock. Values are shared as `Arc<V>`
//! so handles returned to callers stay valid after eviction. No operation
//! performs I/O or blocks while holding the lock.
//!
//! ## Capacity
//!
//! Capacity is fixed at construction and must be at least 1: a
//! zero-capacity cache would have to evict the entry it just inserted,
//! so the fallible constructors reject it and the infallible ones panic.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;

use crate::ds::{RecencyList, SlotId};
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

/// Index entry: the stored value plus a non-owning handle to the key's
/// node in the recency list.
#[derive(Debug)]
struct Entry<V> {
    value: V,
    node: SlotId,
}

/// Fixed-capacity LRU cache core.
///
/// Single-threaded; wrap in [`SharedLruCache`] for shared access. Keys are
/// cloned once on insert (one copy lives in the index, one in the list
/// node); values are owned by the index and treated opaquely.
///
/// All operations are O(1) expected except [`recency_rank`], which walks
/// the list and exists for verification.
///
/// [`recency_rank`]: LruCache::recency_rank
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::LruCache;
///
/// let mut cache: LruCache<u32, String> = LruCache::new(2);
/// cache.put(1, "one".to_string());
/// cache.put(2, "two".to_string());
///
/// assert_eq!(cache.get(&1), Some(&"one".to_string()));
///
/// // Key 2 is now least recently used; inserting a third key evicts it.
/// let evicted = cache.put(3, "three".to_string());
/// assert_eq!(evicted, Some((2, "two".to_string())));
/// ```
pub struct LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    index: FxHashMap<K, Entry<V>>,
    order: RecencyList<K>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) to
    /// handle that case as an error instead.
    pub fn new(capacity: usize) -> Self {
        Self::try_new(capacity).expect("lru cache capacity must be at least 1")
    }

    /// Creates a cache holding at most `capacity` entries, rejecting a
    /// zero capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// assert!(LruCache::<u32, ()>::try_new(8).is_ok());
    /// assert!(LruCache::<u32, ()>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be at least 1"));
        }
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: RecencyList::with_capacity(capacity),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        })
    }

    /// Inserts a key-value pair, possibly displacing something.
    ///
    /// **Read this before matching on the result.** The returned optional
    /// pair conflates two cases on purpose (the two-case shape is the
    /// crate's stable contract):
    ///
    /// - `key` already present: its value is replaced, its node moves to
    ///   the head, and `Some((key, previous_value))` comes back — the
    ///   returned key **equals** the one passed in. No eviction happened
    ///   and [`len`](Self::len) is unchanged.
    /// - `key` absent and the cache full: the tail (least recently used)
    ///   entry is evicted and returned as `Some((evicted_key,
    ///   evicted_value))` — the returned key **differs** from the one
    ///   passed in. `len` stays at capacity.
    /// - `key` absent with room to spare: returns `None`.
    ///
    /// Compare the returned key with `key` to distinguish an overwrite
    /// from an eviction.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(entry) = self.index.get_mut(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let previous = std::mem::replace(&mut entry.value, value);
            let node = entry.node;
            self.order.move_to_front(node);

            self.debug_validate();
            return Some((key, previous));
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        // New key: link at the head first. The tail popped below can never
        // be the node just linked, because capacity >= 1.
        let node = self.order.push_front(key.clone());
        self.index.insert(key, Entry { value, node });

        let mut evicted = None;
        if self.index.len() > self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            if let Some(victim) = self.order.pop_back() {
                if let Some(entry) = self.index.remove(&victim) {
                    #[cfg(feature = "metrics")]
                    self.metrics.record_evicted_entry();
                    evicted = Some((victim, entry.value));
                }
            }
        }

        self.debug_validate();
        evicted
    }

    /// Gets a reference to the value for `key`, promoting it to most
    /// recently used. A miss returns `None` and mutates nothing.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let node = match self.index.get(key) {
            Some(entry) => entry.node,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.order.move_to_front(node);
        self.debug_validate();

        self.index.get(key).map(|entry| &entry.value)
    }

    /// Gets the value for `key` without promoting it.
    ///
    /// Unlike [`get`](Self::get) this leaves the recency order untouched,
    /// so a peeked key is still the eviction candidate it was before.
    pub fn peek(&self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_call();

        let entry = self.index.get(key)?;
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_found();
        Some(&entry.value)
    }

    /// Returns `true` if `key` is present. Does not promote.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the fixed capacity chosen at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let entry = self.index.remove(key)?;
        self.order.remove(entry.node);
        self.debug_validate();
        Some(entry.value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let key = self.order.pop_back()?;
        let entry = self.index.remove(&key)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_found();

        self.debug_validate();
        Some((key, entry.value))
    }

    /// Returns the least recently used entry without removing or
    /// promoting it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lru_call();

        let key = self.order.back()?;
        let entry = self.index.get(key)?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lru_found();

        Some((key, &entry.value))
    }

    /// Promotes `key` to most recently used without reading its value.
    /// Returns `true` if the key was present.
    pub fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        if let Some(entry) = self.index.get(key) {
            let node = entry.node;
            self.order.move_to_front(node);
            self.debug_validate();

            #[cfg(feature = "metrics")]
            self.metrics.record_touch_found();
            true
        } else {
            false
        }
    }

    /// Returns `key`'s position in recency order, 0 being most recently
    /// used. O(n) list walk; meant for tests and diagnostics.
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_recency_rank_call();

        let target = self.index.get(key)?.node;
        for (rank, id) in self.order.iter_ids().enumerate() {
            #[cfg(feature = "metrics")]
            (&self.metrics).record_recency_rank_scan_step();
            if id == target {
                #[cfg(feature = "metrics")]
                (&self.metrics).record_recency_rank_found();
                return Some(rank);
            }
        }
        None
    }

    /// Removes all entries. Capacity is unchanged.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.index.clear();
        self.order.clear();
        self.debug_validate();
    }

    /// Length of the recency list, exposed for verification: by invariant
    /// it always equals [`len`](Self::len).
    pub fn recency_len(&self) -> usize {
        self.order.len()
    }

    /// Verifies that the recency list and key index agree: equal lengths,
    /// length within capacity, and every linked key mapped to exactly the
    /// node holding it. Test- and diagnostics-oriented.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.order.len() {
            return Err(InvariantError::new(format!(
                "index holds {} entries but recency list holds {}",
                self.index.len(),
                self.order.len()
            )));
        }
        if self.index.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.index.len(),
                self.capacity
            )));
        }
        let mut walked = 0usize;
        for id in self.order.iter_ids() {
            let key = self
                .order
                .key(id)
                .ok_or_else(|| InvariantError::new("traversal reached an unlinked node"))?;
            match self.index.get(key) {
                Some(entry) if entry.node == id => walked += 1,
                Some(_) => {
                    return Err(InvariantError::new(
                        "index entry points at a different node than the list holds",
                    ));
                },
                None => {
                    return Err(InvariantError::new("recency list key missing from index"));
                },
            }
        }
        if walked != self.index.len() {
            return Err(InvariantError::new(format!(
                "list traversal reached {} nodes but index holds {}",
                walked,
                self.index.len()
            )));
        }
        Ok(())
    }

    #[inline]
    fn debug_validate(&self) {
        #[cfg(debug_assertions)]
        {
            self.order.debug_validate();
            debug_assert_eq!(self.index.len(), self.order.len());
            debug_assert!(self.index.len() <= self.capacity);
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Copies the current operation counters out of the cache.
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            peek_calls: self.metrics.peek_calls.get(),
            peek_found: self.metrics.peek_found.get(),
            peek_lru_calls: self.metrics.peek_lru_calls.get(),
            peek_lru_found: self.metrics.peek_lru_found.get(),
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            recency_rank_calls: self.metrics.recency_rank_calls.get(),
            recency_rank_found: self.metrics.recency_rank_found.get(),
            recency_rank_scan_steps: self.metrics.recency_rank_scan_steps.get(),
            cache_len: self.index.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        LruCache::put(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn capacity(&self) -> usize {
        LruCache::capacity(self)
    }

    fn clear(&mut self) {
        LruCache::clear(self)
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        LruCache::pop_lru(self)
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCache::peek_lru(self)
    }

    fn touch(&mut self, key: &K) -> bool {
        LruCache::touch(self, key)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        LruCache::recency_rank(self, key)
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an LRU cache with a default capacity of 16.
    fn default() -> Self {
        Self::new(16)
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

/// Thread-safe LRU cache: [`LruCache`] behind one coarse
/// `parking_lot::RwLock`, cloneable handle included.
///
/// Values are stored as `Arc<V>` so a handle returned from [`get`] stays
/// valid even if the entry is evicted a moment later. `get` takes the
/// write lock — promoting to most recently used is a mutation — while
/// `peek`, `len`, `contains` and friends only take the read lock.
///
/// [`get`]: SharedLruCache::get
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::SharedLruCache;
///
/// let cache: SharedLruCache<u32, String> = SharedLruCache::new(100);
/// cache.put(1, "one".to_string());
///
/// let value = cache.get(&1).unwrap();
/// assert_eq!(*value, "one");
/// ```
#[cfg(feature = "concurrency")]
#[derive(Clone)]
pub struct SharedLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    inner: Arc<RwLock<LruCache<K, Arc<V>>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> SharedLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    /// Creates a shared cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; see [`try_new`](Self::try_new).
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Creates a shared cache, rejecting a zero capacity.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: Arc::new(RwLock::new(LruCache::try_new(capacity)?)),
        })
    }

    /// Inserts a value, wrapping it in `Arc` internally.
    ///
    /// Same two-case return contract as [`LruCache::put`]: compare the
    /// returned key with the one passed in to distinguish an overwrite
    /// (`Some((key, previous))`) from an eviction of a different key.
    pub fn put(&self, key: K, value: V) -> Option<(K, Arc<V>)> {
        self.put_arc(key, Arc::new(value))
    }

    /// Inserts a pre-wrapped `Arc<V>` without re-wrapping.
    pub fn put_arc(&self, key: K, value: Arc<V>) -> Option<(K, Arc<V>)> {
        let mut cache = self.inner.write();
        cache.put(key, value)
    }

    /// Gets the value for `key`, promoting it to most recently used.
    ///
    /// Takes the write lock: promotion relinks the recency list.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let mut cache = self.inner.write();
        cache.get(key).map(Arc::clone)
    }

    /// Gets the value for `key` without promoting it. Read lock only.
    pub fn peek(&self, key: &K) -> Option<Arc<V>> {
        let cache = self.inner.read();
        cache.peek(key).map(Arc::clone)
    }

    /// Removes the entry for `key`.
    pub fn remove(&self, key: &K) -> Option<Arc<V>> {
        let mut cache = self.inner.write();
        cache.remove(key)
    }

    /// Promotes `key` without reading it; `true` if the key was present.
    pub fn touch(&self, key: &K) -> bool {
        let mut cache = self.inner.write();
        cache.touch(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&self) -> Option<(K, Arc<V>)> {
        let mut cache = self.inner.write();
        cache.pop_lru()
    }

    /// Returns the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<(K, Arc<V>)> {
        let cache = self.inner.read();
        cache.peek_lru().map(|(k, v)| (k.clone(), Arc::clone(v)))
    }

    /// Returns the current number of entries. Read lock only.
    pub fn len(&self) -> usize {
        let cache = self.inner.read();
        cache.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        let cache = self.inner.read();
        cache.is_empty()
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        let cache = self.inner.read();
        cache.capacity()
    }

    /// Returns `true` if `key` is present. Does not promote.
    pub fn contains(&self, key: &K) -> bool {
        let cache = self.inner.read();
        cache.contains(key)
    }

    /// Removes all entries.
    pub fn clear(&self) {
        let mut cache = self.inner.write();
        cache.clear()
    }

    /// Length of the recency list, for verification; equals `len()` by
    /// invariant.
    pub fn recency_len(&self) -> usize {
        let cache = self.inner.read();
        cache.recency_len()
    }

    /// Runs the core invariant check under the read lock.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let cache = self.inner.read();
        cache.check_invariants()
    }
}

#[cfg(all(feature = "metrics", feature = "concurrency"))]
impl<K, V> SharedLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    /// Copies the current operation counters out of the cache.
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        let cache = self.inner.read();
        cache.metrics_snapshot()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> crate::traits::ConcurrentCache for SharedLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for SharedLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("SharedLruCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> Default for SharedLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    /// Creates a shared LRU cache with a default capacity of 16.
    fn default() -> Self {
        Self::new(16)
    }
}
