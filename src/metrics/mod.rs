//! Operation counters for the cache, compiled in behind the `metrics`
//! feature. Recording happens inside the cache's critical sections; reads
//! go through [`snapshot::LruMetricsSnapshot`] copies so consumers never
//! hold cache internals.

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use metrics_impl::LruMetrics;
pub use snapshot::LruMetricsSnapshot;
