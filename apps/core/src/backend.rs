//! Backend client — the single point of entry for all counseling-backend
//! HTTP calls. No other module may issue requests directly; the gate and
//! profile service both go through the traits defined here so tests can
//! substitute stubs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::errors::CoreError;
use crate::profile::models::ProfileRecord;
use crate::recommendations::models::Recommendation;

/// Status literal that marks an async backend job as done. Both the profile
/// and recommendation pipelines report it.
pub const STATUS_COMPLETED: &str = "completed";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `{status}` payload of the profile- and recommendation-status endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchoolRecommendationsData {
    pub recommendations: Vec<Recommendation>,
}

/// Profile-fetch seam for the cached profile service.
#[async_trait]
pub trait ProfileBackend: Send + Sync {
    /// Fetches the user's profile snapshot. A missing profile (404) is a
    /// normal pre-intake state, returned as `Ok(None)`.
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<ProfileRecord>, CoreError>;
}

/// Status-check seam for the navigation gate.
#[async_trait]
pub trait StatusBackend: Send + Sync {
    async fn profile_status(&self, user_id: &str) -> Result<StatusResponse, CoreError>;
    async fn recommendation_status(&self, user_id: &str) -> Result<StatusResponse, CoreError>;
}

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// GET /recommendations/{userId}. A 404 here means generation has not
    /// produced anything yet and surfaces as `NotFound`.
    pub async fn fetch_recommendations(
        &self,
        user_id: &str,
    ) -> Result<SchoolRecommendationsData, CoreError> {
        let url = format!("{}/recommendations/{user_id}", self.base_url);
        let data: SchoolRecommendationsData = self.get_json(&url).await?;
        debug!(user_id, count = data.recommendations.len(), "fetched recommendations");
        Ok(data)
    }

    /// GETs `url` and decodes the body, distinguishing transport failures
    /// (`Network`) from malformed payloads (`Parse`).
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, CoreError> {
        let response = check_status(self.client.get(url).send().await?, url).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ProfileBackend for BackendClient {
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<ProfileRecord>, CoreError> {
        let url = format!("{}/users/{user_id}", self.base_url);
        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(user_id, "no profile yet");
            return Ok(None);
        }
        let response = check_status(response, &url).await?;
        let body = response.text().await?;
        Ok(Some(serde_json::from_str(&body)?))
    }
}

#[async_trait]
impl StatusBackend for BackendClient {
    async fn profile_status(&self, user_id: &str) -> Result<StatusResponse, CoreError> {
        self.get_json(&format!("{}/profiles/status/{user_id}", self.base_url))
            .await
    }

    async fn recommendation_status(&self, user_id: &str) -> Result<StatusResponse, CoreError> {
        self.get_json(&format!("{}/recommendations/status/{user_id}", self.base_url))
            .await
    }
}

async fn check_status(response: Response, url: &str) -> Result<Response, CoreError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(CoreError::NotFound(url.to_string()));
    }
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(CoreError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response)
}
