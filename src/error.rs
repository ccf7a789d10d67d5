//! Error types for the lrukit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when cache configuration parameters are
//!   invalid. The only rejected configuration today is a zero capacity,
//!   which would make the eviction protocol unsound (the just-inserted
//!   entry would itself be the eviction victim).
//! - [`InvariantError`]: Returned by the test-oriented `check_invariants`
//!   accessors when the recency list and key index disagree.
//!
//! Lookup misses are not errors anywhere in this crate: `get` on an absent
//! key is a normal `None`.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::error::ConfigError;
//! use lrukit::policy::lru::LruCache;
//!
//! let cache: Result<LruCache<u64, String>, ConfigError> = LruCache::try_new(128);
//! assert!(cache.is_ok());
//!
//! let rejected = LruCache::<u64, String>::try_new(0);
//! assert!(rejected.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`LruCache::try_new`](crate::policy::lru::LruCache::try_new) and
/// [`CacheBuilder::try_build`](crate::builder::CacheBuilder::try_build).
/// Carries a human-readable description of which parameter failed
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`LruCache::check_invariants`](crate::policy::lru::LruCache::check_invariants),
/// which exists for tests and debugging rather than production use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be > 0");
        assert_eq!(err.to_string(), "capacity must be > 0");
    }

    #[test]
    fn config_debug_includes_message() {
        let err = ConfigError::new("bad capacity");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("bad capacity"));
    }

    #[test]
    fn config_message_accessor() {
        let err = ConfigError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("list length mismatch");
        assert_eq!(err.to_string(), "list length mismatch");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}
