//! Keyed TTL cache fronting user-profile lookups.
//!
//! The cache is a pure key→value store with expiry: it never performs the
//! fetch itself. The check-cache → fetch → populate flow lives in
//! `profile::service`, so the cache stays independently testable.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;

/// Time source for the cache. Swapped for a manual clock in tests.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall-clock time. The production clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    stored_at_millis: i64,
}

/// Generic store keyed by an opaque string (a user id in practice).
///
/// An entry is valid iff `now - stored_at < ttl`; an expired-but-present
/// entry reads identically to absence and is swept lazily on the next write.
/// `set` is an unconditional overwrite — last write wins, no merge.
///
/// The map sits behind a `Mutex` because the tokio runtime is multi-threaded;
/// every operation takes the lock for its full (short) duration.
pub struct TtlCache<T> {
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
    ttl_millis: i64,
    clock: Arc<dyn Clock>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl_millis: ttl.as_millis() as i64,
            clock,
        }
    }

    pub fn with_system_clock(ttl: Duration) -> Self {
        Self::new(ttl, Arc::new(SystemClock))
    }

    /// Returns the cached value, or `None` on absence or expiry.
    pub fn get(&self, key: &str) -> Option<T> {
        let now = self.clock.now_millis();
        let entries = self.lock();
        entries
            .get(key)
            .filter(|entry| now - entry.stored_at_millis < self.ttl_millis)
            .map(|entry| entry.value.clone())
    }

    /// Overwrites any existing entry with a fresh timestamp, then sweeps
    /// expired entries so abandoned keys do not accumulate.
    pub fn set(&self, key: &str, value: T) {
        let now = self.clock.now_millis();
        let mut entries = self.lock();
        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                stored_at_millis: now,
            },
        );
        entries.retain(|_, entry| now - entry.stored_at_millis < self.ttl_millis);
    }

    /// Removes one entry, if present.
    pub fn invalidate(&self, key: &str) {
        self.lock().remove(key);
    }

    /// Clears the whole store.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry<T>>> {
        // A panic while holding the lock leaves plain data behind, never a
        // broken invariant, so poisoning is safe to shrug off.
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};

    use super::*;

    /// Test clock advanced by hand.
    struct ManualClock(AtomicI64);

    impl ManualClock {
        fn new() -> Arc<Self> {
            Arc::new(Self(AtomicI64::new(0)))
        }

        fn advance(&self, millis: i64) {
            self.0.fetch_add(millis, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now_millis(&self) -> i64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    const TTL: Duration = Duration::from_millis(1000);

    #[test]
    fn test_round_trip_within_ttl() {
        let clock = ManualClock::new();
        let cache = TtlCache::new(TTL, clock.clone());

        cache.set("user-1", "profile".to_string());
        clock.advance(999);
        assert_eq!(cache.get("user-1"), Some("profile".to_string()));
    }

    #[test]
    fn test_expired_entry_is_a_miss() {
        let clock = ManualClock::new();
        let cache = TtlCache::new(TTL, clock.clone());

        cache.set("user-1", "profile".to_string());
        clock.advance(1000);
        assert_eq!(cache.get("user-1"), None);
    }

    #[test]
    fn test_missing_key_is_a_miss() {
        let cache: TtlCache<String> = TtlCache::with_system_clock(TTL);
        assert_eq!(cache.get("never-set"), None);
    }

    #[test]
    fn test_set_overwrites_value_and_timestamp() {
        let clock = ManualClock::new();
        let cache = TtlCache::new(TTL, clock.clone());

        cache.set("user-1", "v1".to_string());
        cache.set("user-1", "v2".to_string());
        assert_eq!(cache.get("user-1"), Some("v2".to_string()));

        // Rewriting near expiry restarts the TTL from the write.
        clock.advance(900);
        cache.set("user-1", "v3".to_string());
        clock.advance(900);
        assert_eq!(cache.get("user-1"), Some("v3".to_string()));
    }

    #[test]
    fn test_invalidate_removes_single_key() {
        let cache = TtlCache::with_system_clock(TTL);
        cache.set("user-1", 1);
        cache.set("user-2", 2);

        cache.invalidate("user-1");
        assert_eq!(cache.get("user-1"), None);
        assert_eq!(cache.get("user-2"), Some(2));
    }

    #[test]
    fn test_clear_removes_everything() {
        let cache = TtlCache::with_system_clock(TTL);
        cache.set("user-1", 1);
        cache.set("user-2", 2);

        cache.clear();
        assert_eq!(cache.get("user-1"), None);
        assert_eq!(cache.get("user-2"), None);
    }

    #[test]
    fn test_write_sweeps_expired_entries() {
        let clock = ManualClock::new();
        let cache = TtlCache::new(TTL, clock.clone());

        cache.set("stale", 1);
        clock.advance(2000);
        cache.set("fresh", 2);

        let entries = cache.lock();
        assert!(!entries.contains_key("stale"));
        assert!(entries.contains_key("fresh"));
    }
}
