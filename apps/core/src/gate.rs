//! Navigation gate — the readiness signal that unlocks downstream features
//! (recommendations browsing, profile-generation CTA) in the UI shell.
//!
//! Both status checks are fail-closed: any error or timeout degrades its own
//! flag to `false` and is logged, never surfaced to rendering code. The user
//! sees a locked feature, not a crash, and the warn-level log keeps the
//! failure diagnosable.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::time::{error::Elapsed, timeout};
use tracing::warn;

use crate::backend::{StatusBackend, StatusResponse};
use crate::errors::CoreError;

/// The two feature-availability flags, resolved independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavigationFlags {
    pub has_profile_data: bool,
    pub has_real_recommendations: bool,
}

/// Snapshot for callers that poll while the checks are in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateState {
    pub has_profile_data: bool,
    pub has_real_recommendations: bool,
    pub is_loading: bool,
}

impl GateState {
    fn loading() -> Self {
        Self {
            has_profile_data: false,
            has_real_recommendations: false,
            is_loading: true,
        }
    }

    fn resolved(flags: NavigationFlags) -> Self {
        Self {
            has_profile_data: flags.has_profile_data,
            has_real_recommendations: flags.has_real_recommendations,
            is_loading: false,
        }
    }
}

pub struct NavigationGate {
    backend: Arc<dyn StatusBackend>,
    check_timeout: Duration,
}

impl NavigationGate {
    pub fn new(backend: Arc<dyn StatusBackend>, check_timeout: Duration) -> Self {
        Self {
            backend,
            check_timeout,
        }
    }

    /// Runs both status checks concurrently and merges them independently —
    /// a failure on one side never overwrites the other side's result. Each
    /// check is bounded by the configured timeout so a hung request cannot
    /// hold the gate in a loading state forever.
    pub async fn check(&self, user_id: &str) -> NavigationFlags {
        let (profile, recommendations) = tokio::join!(
            timeout(self.check_timeout, self.backend.profile_status(user_id)),
            timeout(
                self.check_timeout,
                self.backend.recommendation_status(user_id)
            ),
        );

        NavigationFlags {
            has_profile_data: resolve_flag(profile, "profile_status"),
            has_real_recommendations: resolve_flag(recommendations, "recommendation_status"),
        }
    }

    /// Combined `{flags, is_loading}` read: starts at `is_loading = true` and
    /// flips exactly once, when both checks have resolved. Dropping the
    /// receiver mid-flight simply discards the eventual result.
    pub fn watch(&self, user_id: &str) -> watch::Receiver<GateState> {
        let (tx, rx) = watch::channel(GateState::loading());
        let gate = NavigationGate {
            backend: Arc::clone(&self.backend),
            check_timeout: self.check_timeout,
        };
        let user_id = user_id.to_string();
        tokio::spawn(async move {
            let flags = gate.check(&user_id).await;
            let _ = tx.send(GateState::resolved(flags));
        });
        rx
    }
}

fn resolve_flag(outcome: Result<Result<StatusResponse, CoreError>, Elapsed>, check: &str) -> bool {
    match outcome {
        Ok(Ok(response)) => response.is_completed(),
        Ok(Err(err)) => {
            warn!(check, %err, "status check failed; gating feature off");
            false
        }
        Err(_) => {
            warn!(check, "status check timed out; gating feature off");
            false
        }
    }
}
