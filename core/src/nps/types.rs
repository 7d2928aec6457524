use serde::{Deserialize, Deserializer, Serialize};

/// Park record as returned by the `parks` endpoint
///
/// Only the fields the skill speaks are kept; anything missing comes back empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Park {
    pub full_name: String,
    pub description: String,
    /// Comma-separated two-letter codes, e.g. `"CA,NV"`
    pub states: String,
    /// "National Park", "National Monument", "National Historic Trail", ...
    pub designation: String,
    pub park_code: String,
    pub url: String,
}

impl Park {
    /// Whether the record may be listed or spoken.
    ///
    /// Trails and entities without a designation are not parks to a listener.
    pub fn is_listable(&self) -> bool {
        !self.designation.is_empty() && !self.designation.contains("Trail")
    }
}

/// Remove trails and undesignated entities, keeping API order.
pub fn trim_park_list(parks: Vec<Park>) -> Vec<Park> {
    parks.into_iter().filter(Park::is_listable).collect()
}

/// Envelope of every NPS API list response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParkResponse {
    /// Declared number of matches; the API sends it as a string
    #[serde(deserialize_with = "deserialize_total")]
    pub total: u64,
    #[serde(default)]
    pub data: Vec<Park>,
}

fn deserialize_total<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Total {
        Number(u64),
        Text(String),
    }

    match Total::deserialize(deserializer)? {
        Total::Number(n) => Ok(n),
        Total::Text(s) => s.trim().parse::<u64>().map_err(serde::de::Error::custom),
    }
}

/// One request against the API: an endpoint plus at most one filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkQuery {
    pub endpoint: String,
    pub state_code: Option<String>,
    pub term: Option<String>,
}

impl ParkQuery {
    /// All parks in the state with the given two-letter code
    pub fn by_state(code: &str) -> Self {
        Self {
            endpoint: "parks".to_string(),
            state_code: Some(code.to_string()),
            term: None,
        }
    }

    /// Free-text search over park records
    pub fn search(term: &str) -> Self {
        Self {
            endpoint: "parks".to_string(),
            state_code: None,
            term: Some(term.to_string()),
        }
    }

    /// Query parameters for this request, API key first.
    pub fn params(&self, api_key: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![("api_key", api_key.to_string())];
        if let Some(code) = &self.state_code {
            params.push(("stateCode", code.clone()));
        }
        if let Some(term) = &self.term {
            params.push(("q", term.clone()));
        }
        params
    }
}

/// Where a park is, ready for the `Park.Location` dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkLocation {
    pub location: String,
    pub park: String,
}

/// A quiz question: the listener guesses `location` for `park`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub location: String,
    pub park: String,
}
