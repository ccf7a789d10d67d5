use std::cell::Cell;

/// A metrics-only counter cell for `&self` read paths.
///
/// # Safety
/// This type is only safe if all accesses are externally synchronized.
/// In this crate it sits inside `LruCache`, which is either used from a
/// single thread or guarded by the `SharedLruCache` lock.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}

// SAFETY:
// All access to MetricsCell is externally synchronized by the cache lock.
// Metrics are observational and do not affect correctness.
unsafe impl Sync for MetricsCell {}
unsafe impl Send for MetricsCell {}
