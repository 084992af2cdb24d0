//! HTTP client for the player prediction service
//!
//! Yardage-shaped stats are served by `/predictions/yardage/{player_id}`
//! with a `stat_type` query; touchdown stats by
//! `/predictions/touchdown/{player_id}` with the player's position.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::types::Envelope;
use super::{Prediction, PredictionError, PredictionSource, Selection};
use crate::catalog::Endpoint;
use crate::config::PredictionConfig;

/// Default prediction API base URL
pub const PREDICTION_API_URL: &str = "http://localhost:5000/api";

/// Configuration for the prediction client
#[derive(Debug, Clone)]
pub struct PredictionClientConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for PredictionClientConfig {
    fn default() -> Self {
        Self {
            base_url: PREDICTION_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl From<&PredictionConfig> for PredictionClientConfig {
    fn from(config: &PredictionConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
        }
    }
}

/// Client for the prediction API
pub struct HttpPredictionClient {
    config: PredictionClientConfig,
    client: Client,
}

impl HttpPredictionClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, PredictionError> {
        Self::with_config(PredictionClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: PredictionClientConfig) -> Result<Self, PredictionError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &PredictionClientConfig {
        &self.config
    }
}

/// URL and query string for a selection
pub(crate) fn endpoint_request(
    base_url: &str,
    selection: &Selection,
) -> (String, Vec<(&'static str, String)>) {
    let route = selection.stat.route();
    match route.endpoint {
        Endpoint::Yardage(stat_type) => (
            format!("{}/predictions/yardage/{}", base_url, selection.player_id),
            vec![
                ("opponent", selection.opponent.clone()),
                ("stat_type", stat_type.as_str().to_string()),
            ],
        ),
        Endpoint::Touchdown => (
            format!("{}/predictions/touchdown/{}", base_url, selection.player_id),
            vec![
                ("opponent", selection.opponent.clone()),
                ("position", selection.position.as_str().to_string()),
            ],
        ),
    }
}

#[async_trait]
impl PredictionSource for HttpPredictionClient {
    async fn fetch(&self, selection: &Selection) -> Result<Prediction, PredictionError> {
        let (url, query) = endpoint_request(&self.config.base_url, selection);

        tracing::debug!(
            url = %url,
            stat = %selection.stat,
            opponent = %selection.opponent,
            proxy = selection.stat.route().proxy,
            "Fetching prediction"
        );

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_transport(e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Envelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error)
                .unwrap_or(body);
            tracing::warn!(%status, error = %message, "Prediction service error");
            return Err(PredictionError::Unavailable(format!("{status}: {message}")));
        }

        let envelope: Envelope =
            serde_json::from_str(&body).map_err(|e| PredictionError::Decode(e.to_string()))?;
        envelope.into_prediction()
    }
}

impl HttpPredictionClient {
    fn map_transport(&self, error: reqwest::Error) -> PredictionError {
        if error.is_timeout() {
            PredictionError::Timeout(self.config.timeout)
        } else {
            PredictionError::Http(error)
        }
    }
}
