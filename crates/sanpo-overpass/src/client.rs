//! HTTP client for the Overpass API with a single-fallback endpoint policy.
//!
//! Overpass public instances rate-limit and go down independently, so the
//! client tries the primary endpoint once and, on *any* failure — timeout,
//! network error, non-2xx status, unparseable body — tries the fallback
//! endpoint once. No further retries: a walk suggestion is not worth a
//! back-off loop against a community-run service.

use std::time::Duration;

use reqwest::{Client, Url};

use sanpo_core::{AppConfig, RawPoint};

use crate::error::OverpassError;
use crate::types::OverpassResponse;

/// Client holding the two Overpass endpoints and the shared `reqwest::Client`.
///
/// Use [`OverpassClient::new`] in production and
/// [`OverpassClient::with_endpoints`] to point at mock servers in tests.
#[derive(Debug)]
pub struct OverpassClient {
    client: Client,
    primary: Url,
    fallback: Url,
}

impl OverpassClient {
    /// Creates a client from the application config.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`OverpassError::InvalidEndpoint`] if a configured endpoint
    /// is not a valid URL.
    pub fn new(config: &AppConfig) -> Result<Self, OverpassError> {
        Self::with_endpoints(
            &config.overpass_url,
            &config.overpass_fallback_url,
            config.overpass_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with explicit endpoints (for wiremock tests).
    ///
    /// # Errors
    ///
    /// Same as [`OverpassClient::new`].
    pub fn with_endpoints(
        primary: &str,
        fallback: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            primary: parse_endpoint(primary)?,
            fallback: parse_endpoint(fallback)?,
        })
    }

    /// Sends the query to Overpass and returns the raw elements.
    ///
    /// Tries the primary endpoint; on any failure, logs a warning and tries
    /// the fallback endpoint once. `Ok(vec![])` means the area genuinely has
    /// no matching named spots.
    ///
    /// # Errors
    ///
    /// When both endpoints fail, the fallback's error is returned:
    /// - [`OverpassError::Http`] — network failure or timeout.
    /// - [`OverpassError::UnexpectedStatus`] — non-2xx response.
    /// - [`OverpassError::Deserialize`] — body is not the Overpass envelope.
    pub async fn fetch_spots(&self, query: &str) -> Result<Vec<RawPoint>, OverpassError> {
        match self.attempt(&self.primary, query).await {
            Ok(elements) => Ok(elements),
            Err(primary_err) => {
                tracing::warn!(
                    endpoint = %self.primary,
                    error = %primary_err,
                    "primary Overpass endpoint failed, trying fallback"
                );
                self.attempt(&self.fallback, query).await
            }
        }
    }

    /// One POST to one endpoint. Overpass expects the query form-encoded
    /// under the `data` key.
    async fn attempt(&self, endpoint: &Url, query: &str) -> Result<Vec<RawPoint>, OverpassError> {
        tracing::debug!(endpoint = %endpoint, bytes = query.len(), "dispatching Overpass query");

        let response = self
            .client
            .post(endpoint.clone())
            .form(&[("data", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OverpassError::UnexpectedStatus {
                status: status.as_u16(),
                url: endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| OverpassError::Deserialize {
                url: endpoint.to_string(),
                source: e,
            })?;

        Ok(parsed.elements.into_iter().map(RawPoint::from).collect())
    }
}

fn parse_endpoint(url: &str) -> Result<Url, OverpassError> {
    Url::parse(url).map_err(|e| OverpassError::InvalidEndpoint {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
