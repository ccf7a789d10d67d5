pub use crate::builder::CacheBuilder;
pub use crate::ds::{RecencyList, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::LruMetricsSnapshot;
pub use crate::policy::lru::LruCache;
#[cfg(feature = "concurrency")]
pub use crate::policy::lru::SharedLruCache;
pub use crate::traits::{ConcurrentCache, CoreCache, LruCacheTrait, MutableCache};
