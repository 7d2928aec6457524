//! National Park Service data client
//!
//! Wraps the NPS Data API `parks` endpoint: builds queries, filters out trails,
//! and shapes names and locations for speech. Every operation answers with
//! `Ok(Some(_))` on data, `Ok(None)` when nothing matched, and `Err(_)` when
//! the call itself failed, so "no parks" and "server down" never look alike.

mod config;
mod source;
mod types;

pub use config::{redact_key, NpsConfig};
#[cfg(test)]
pub use source::MockParkSource;
pub use source::{HttpParkSource, ParkSource};
pub use types::{trim_park_list, Park, ParkLocation, ParkQuery, ParkResponse, QuizQuestion};

use crate::states::{self, STATE_CODES};
use crate::text::clean_string;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum NpsError {
    #[error("No NPS API key configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("NPS API returned status: {0}")]
    Status(u16),

    #[error("Malformed NPS response: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, NpsError>;

/// Client for park lookups
pub struct NpsClient {
    source: Arc<dyn ParkSource>,
    api_key: RwLock<String>,
    // Mirrors the outcome of the most recent fetch attempt
    last_call_failed: AtomicBool,
    rng: Mutex<StdRng>,
}

impl NpsClient {
    /// Create a client talking HTTPS to the configured API
    pub fn new(config: &NpsConfig) -> Self {
        Self::with_source(
            Arc::new(HttpParkSource::new(config)),
            config.api_key.clone(),
        )
    }

    /// Create a client over any park source
    pub fn with_source(source: Arc<dyn ParkSource>, api_key: impl Into<String>) -> Self {
        Self {
            source,
            api_key: RwLock::new(api_key.into()),
            last_call_failed: AtomicBool::new(false),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Use a fixed seed for the quiz draws
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Replace the API key; the next call uses it
    pub async fn set_api_key(&self, key: impl Into<String>) {
        let key = key.into();
        info!(target: "nps", api_key = %redact_key(&key), "NPS API key updated");
        *self.api_key.write().await = key;
    }

    /// Whether the most recent fetch attempt failed
    pub fn call_error(&self) -> bool {
        self.last_call_failed.load(Ordering::Relaxed)
    }

    /// Full names of the listable parks in a state, in API order
    pub async fn get_parks_by_state(&self, state: &str) -> Result<Option<Vec<String>>> {
        let Some(code) = states::code_for(state) else {
            debug!(target: "nps", state = %state, "Unknown state name");
            return Ok(None);
        };

        let Some(parks) = self.fetch(ParkQuery::by_state(code)).await? else {
            return Ok(None);
        };

        let names: Vec<String> = trim_park_list(parks)
            .iter()
            .map(|park| clean_string(&park.full_name))
            .collect();

        Ok((!names.is_empty()).then_some(names))
    }

    /// First listable park whose full name contains `park_name`, ignoring case
    pub async fn get_park_by_name(&self, park_name: &str) -> Result<Option<Park>> {
        let Some(parks) = self.fetch(ParkQuery::search(park_name)).await? else {
            return Ok(None);
        };

        // The search may have hit any field, so check the name ourselves
        let wanted = park_name.to_lowercase();
        let found = trim_park_list(parks)
            .into_iter()
            .find(|park| park.full_name.to_lowercase().contains(&wanted))
            .map(|mut park| {
                park.full_name = clean_string(&park.full_name);
                park
            });

        Ok(found)
    }

    /// Park name and spoken list of the states it lies in
    pub async fn get_location(&self, park_name: &str) -> Result<Option<ParkLocation>> {
        Ok(self
            .get_park_by_name(park_name)
            .await?
            .map(|park| ParkLocation {
                location: states::spoken_location(&park.states),
                park: park.full_name,
            }))
    }

    /// Cleaned description of the named park
    pub async fn get_description(&self, park_name: &str) -> Result<Option<String>> {
        Ok(self
            .get_park_by_name(park_name)
            .await?
            .map(|park| clean_string(&park.description))
            .filter(|desc| !desc.is_empty()))
    }

    /// Random park in a random state
    ///
    /// The state is drawn first, then a park within it, so parks in states
    /// with few parks come up more often than parks in crowded ones.
    pub async fn get_quiz_question(&self) -> Result<Option<QuizQuestion>> {
        let drawn = {
            let mut rng = self.rng.lock().await;
            STATE_CODES.choose(&mut *rng).copied()
        };
        let Some((state, code)) = drawn else {
            return Ok(None);
        };
        debug!(target: "nps", state = %state, code = %code, "Quiz state drawn");

        let Some(parks) = self.fetch(ParkQuery::by_state(code)).await? else {
            return Ok(None);
        };
        let parks = trim_park_list(parks);

        let park = {
            let mut rng = self.rng.lock().await;
            parks.choose(&mut *rng).cloned()
        };

        Ok(park.map(|park| QuizQuestion {
            location: states::spoken_location(&park.states),
            park: clean_string(&park.full_name),
        }))
    }

    async fn fetch(&self, query: ParkQuery) -> Result<Option<Vec<Park>>> {
        let result = self.try_fetch(&query).await;
        self.last_call_failed.store(result.is_err(), Ordering::Relaxed);
        if let Err(e) = &result {
            warn!(target: "nps", error = %e, endpoint = %query.endpoint, "Park lookup failed");
        }
        result
    }

    async fn try_fetch(&self, query: &ParkQuery) -> Result<Option<Vec<Park>>> {
        let api_key = self.api_key.read().await.clone();
        if api_key.is_empty() {
            return Err(NpsError::MissingApiKey);
        }

        let response = self.source.fetch(&api_key, query).await?;
        if response.total > 0 {
            Ok(Some(response.data))
        } else {
            Ok(None)
        }
    }
}
