//! Trip backend HTTP client.
//!
//! Provides async methods for the attraction search, attraction detail and
//! itinerary endpoints. Responses are decoded straight into domain types.

use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{Attraction, AttractionId, ItineraryEntry, ItineraryRequest, SearchQuery};

use super::backend::Backend;
use super::error::ApiError;

/// Default base URL for a locally running backend.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the backend client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL for the API (defaults to a local backend)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// HTTP client for the trip backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Build an endpoint URL from path segments below the base URL.
    ///
    /// Segments are percent-encoded, so ids with spaces or non-ASCII
    /// characters stay a single segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Check that the backend is up.
    pub async fn health(&self) -> Result<(), ApiError> {
        let response = self.http.get(self.base_url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(())
    }

    /// Search attractions for a destination.
    ///
    /// `GET /attractions?destination=..&days=..&preferences=..`
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Attraction>, ApiError> {
        let url = self.endpoint(&["attractions"]);

        debug!(destination = %query.destination(), days = %query.days(), "searching attractions");

        let response = self.http.get(url).query(&query.to_pairs()).send().await?;
        let attractions: Vec<Attraction> = read_json(response, None).await?;

        debug!(count = attractions.len(), "search returned");
        Ok(attractions)
    }

    /// Fetch one attraction by id.
    ///
    /// Returns `NotFound` for a 404 or an empty/`null` body.
    pub async fn attraction(&self, id: &AttractionId) -> Result<Attraction, ApiError> {
        let url = self.endpoint(&["attractions", id.as_str()]);

        debug!(id = %id, "fetching attraction");

        let response = self.http.get(url).send().await?;
        let what = format!("attraction {id}");
        read_json(response, Some(&what)).await
    }

    /// Submit a selection and receive the generated itinerary.
    ///
    /// `POST /itinerary`
    pub async fn build_itinerary(
        &self,
        request: &ItineraryRequest,
    ) -> Result<Vec<ItineraryEntry>, ApiError> {
        let url = self.endpoint(&["itinerary"]);

        debug!(
            selected = request.selected_ids.len(),
            days = %request.days,
            "building itinerary"
        );

        let response = self.http.post(url).json(request).send().await?;
        read_json(response, None).await
    }
}

impl Backend for ApiClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Attraction>, ApiError> {
        ApiClient::search(self, query).await
    }

    async fn attraction(&self, id: &AttractionId) -> Result<Attraction, ApiError> {
        ApiClient::attraction(self, id).await
    }

    async fn build_itinerary(
        &self,
        request: &ItineraryRequest,
    ) -> Result<Vec<ItineraryEntry>, ApiError> {
        ApiClient::build_itinerary(self, request).await
    }
}

/// Check the status and decode a JSON body.
///
/// `not_found` names the entity for single-entity lookups; when given, a 404
/// or an empty/`null` body is reported as `NotFound` rather than a failure.
async fn read_json<T: DeserializeOwned>(
    response: Response,
    not_found: Option<&str>,
) -> Result<T, ApiError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        if let Some(what) = not_found {
            return Err(ApiError::NotFound(what.to_string()));
        }
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let body = response.text().await?;

    if let Some(what) = not_found {
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(ApiError::NotFound(what.to_string()));
        }
    }

    serde_json::from_str(&body).map_err(|e| ApiError::decode(&e, &body))
}


#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
