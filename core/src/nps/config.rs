use serde::{Deserialize, Serialize};

/// Configuration for the NPS data client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpsConfig {
    /// API root, without trailing endpoint (default: NPS Data API v1)
    pub base_url: String,
    /// Developer API key; empty means every call fails without a request
    pub api_key: String,
    /// User agent string
    pub user_agent: String,
    /// Timeout for API requests in milliseconds
    pub timeout_ms: u64,
    /// Page size sent with every query; `None` leaves the API default (50)
    pub limit: Option<u32>,
}

impl Default for NpsConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("NPS_API_BASE")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "https://developer.nps.gov/api/v1".to_string()),
            api_key: std::env::var("NPS_API_KEY").unwrap_or_default(),
            user_agent:
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.11; rv:62.0) Gecko/20100101 Firefox/62.0"
                    .to_string(),
            timeout_ms: std::env::var("NPS_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(10_000),
            limit: std::env::var("NPS_LIMIT")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .or(Some(100)),
        }
    }
}

/// Short form of a key that is safe to put in logs.
pub fn redact_key(key: &str) -> String {
    if key.is_empty() {
        return "<empty>".to_string();
    }
    let prefix: String = key.chars().take(4).collect();
    format!("{}…", prefix)
}
