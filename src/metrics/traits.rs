//! # Metrics Trait Hierarchy
//!
//! Separates *recording*, from *snapshotting* so observability never
//! couples into the cache policy logic:
//!
//! ```text
//!   ┌─────────────────────────────┐
//!   │     CoreMetricsRecorder     │
//!   │  get_hit/get_miss/insert    │
//!   │  evict/clear                │
//!   └──────────────┬──────────────┘
//!                  │
//!                  ▼
//!   ┌─────────────────────────────┐     ┌──────────────────────────────┐
//!   │     LruMetricsRecorder      │     │  LruMetricsReadRecorder      │
//!   │  pop_lru/touch (&mut self)  │     │  peek/rank (&self, Cell)     │
//!   └─────────────────────────────┘     └──────────────────────────────┘
//!
//!   Consumption:  MetricsSnapshotProvider<S>  (bench/test)
//! ```
//!
//! Recorders only write counters; snapshot providers only read. Operations
//! taking `&mut self` record through the mutable recorder; read-only
//! operations (`peek`, `peek_lru`, `recency_rank`) record through the
//! `&self` recorder backed by [`MetricsCell`](crate::metrics::cell::MetricsCell).

/// Common counters for any cache policy.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Metrics for LRU behavior (recency order).
pub trait LruMetricsRecorder: CoreMetricsRecorder {
    fn record_pop_lru_call(&mut self);
    fn record_pop_lru_found(&mut self);
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
}

/// Read-only LRU metrics for `&self` methods (uses interior mutability).
pub trait LruMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
    fn record_peek_lru_call(&self);
    fn record_peek_lru_found(&self);
    fn record_recency_rank_call(&self);
    fn record_recency_rank_found(&self);
    fn record_recency_rank_scan_step(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}
