use super::{NpsConfig, NpsError, ParkQuery, ParkResponse, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Where park data comes from
///
/// The client owns key handling and result interpretation; a source only
/// performs one request and decodes the envelope.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParkSource: Send + Sync {
    async fn fetch(&self, api_key: &str, query: &ParkQuery) -> Result<ParkResponse>;
}

/// NPS Data API over HTTPS
pub struct HttpParkSource {
    base_url: String,
    limit: Option<u32>,
    http_client: reqwest::Client,
}

impl HttpParkSource {
    pub fn new(config: &NpsConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(&config.user_agent)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limit: config.limit,
            http_client,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl ParkSource for HttpParkSource {
    async fn fetch(&self, api_key: &str, query: &ParkQuery) -> Result<ParkResponse> {
        let url = self.url(&query.endpoint);
        let mut params = query.params(api_key);
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }

        debug!(
            target: "nps",
            endpoint = %query.endpoint,
            state_code = ?query.state_code,
            term = ?query.term,
            "Querying NPS API"
        );

        let response = self
            .http_client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                warn!(target: "nps", error = %e, "NPS API request failed");
                NpsError::Http(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(target: "nps", status = %status, "NPS API returned error");
            return Err(NpsError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| NpsError::Http(format!("Failed to read response body: {}", e)))?;

        serde_json::from_str::<ParkResponse>(&body).map_err(|e| {
            warn!(target: "nps", error = %e, "Failed to parse NPS response");
            NpsError::Parse(e.to_string())
        })
    }
}
