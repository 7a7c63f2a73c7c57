use std::sync::Arc;

use crate::backend::BackendClient;
use crate::cache::TtlCache;
use crate::config::Config;
use crate::errors::CoreError;
use crate::gate::NavigationGate;
use crate::profile::models::ProfileRecord;
use crate::profile::service::ProfileService;

/// Shared core state handed to the UI shell's host process.
///
/// Built once at startup from `Config`; the cache and backend client are
/// shared between the profile service and the navigation gate so every
/// consumer sees the same snapshots and the same TTL.
pub struct CoreState {
    pub backend: BackendClient,
    pub profile_cache: Arc<TtlCache<ProfileRecord>>,
    pub profiles: ProfileService,
    pub gate: NavigationGate,
    pub config: Config,
}

impl CoreState {
    pub fn from_config(config: Config) -> Result<Self, CoreError> {
        let backend = BackendClient::new(&config.backend_base_url)?;
        let profile_cache = Arc::new(TtlCache::with_system_clock(config.cache_ttl));
        let profiles = ProfileService::new(
            Arc::new(backend.clone()),
            Arc::clone(&profile_cache),
        );
        let gate = NavigationGate::new(Arc::new(backend.clone()), config.status_check_timeout);
        Ok(Self {
            backend,
            profile_cache,
            profiles,
            gate,
            config,
        })
    }
}
