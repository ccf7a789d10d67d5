//! Eviction policy implementations. This crate ships a single policy:
//! least recently used.

pub mod lru;

pub use lru::LruCache;
#[cfg(feature = "concurrency")]
pub use lru::SharedLruCache;
