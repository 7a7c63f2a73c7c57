use std::sync::Arc;

use tracing::debug;

use crate::backend::ProfileBackend;
use crate::cache::TtlCache;
use crate::errors::CoreError;
use crate::profile::models::ProfileRecord;

/// Cached profile reads: check cache → on miss, fetch → populate → return.
///
/// The composition lives here rather than in the cache, which stays a plain
/// key→value store with expiry. A 404 from the backend is returned as `None`
/// and not cached, so a user who finishes intake shows up on the next read
/// instead of after a full TTL.
pub struct ProfileService {
    backend: Arc<dyn ProfileBackend>,
    cache: Arc<TtlCache<ProfileRecord>>,
}

impl ProfileService {
    pub fn new(backend: Arc<dyn ProfileBackend>, cache: Arc<TtlCache<ProfileRecord>>) -> Self {
        Self { backend, cache }
    }

    pub async fn get_profile(&self, user_id: &str) -> Result<Option<ProfileRecord>, CoreError> {
        if let Some(profile) = self.cache.get(user_id) {
            debug!(user_id, "profile cache hit");
            return Ok(Some(profile));
        }

        let fetched = self.backend.fetch_profile(user_id).await?;
        if let Some(profile) = &fetched {
            self.cache.set(user_id, profile.clone());
        }
        Ok(fetched)
    }

    /// Drops the cached snapshot, forcing the next read to refetch. Called
    /// after intake writes so the UI never renders a stale profile.
    pub fn invalidate(&self, user_id: &str) {
        self.cache.invalidate(user_id);
    }
}
