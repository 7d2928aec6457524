//! Shared fakes for park integration tests

use async_trait::async_trait;
use parkvoice_core::nps::{NpsError, Park, ParkQuery, ParkResponse, ParkSource, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

/// What a scripted fetch answers with
pub enum Step {
    Parks(Vec<Park>),
    Fail(NpsError),
}

/// Park source that replays a script and records every query it saw.
/// Once the script runs out it answers with an empty result set.
#[derive(Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Step>>,
    seen: Mutex<Vec<(String, ParkQuery)>>,
}

impl ScriptedSource {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            script: Mutex::new(steps.into()),
            seen: Mutex::default(),
        }
    }

    pub fn queries(&self) -> Vec<(String, ParkQuery)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ParkSource for ScriptedSource {
    async fn fetch(&self, api_key: &str, query: &ParkQuery) -> Result<ParkResponse> {
        self.seen
            .lock()
            .unwrap()
            .push((api_key.to_string(), query.clone()));

        match self.script.lock().unwrap().pop_front() {
            Some(Step::Parks(data)) => Ok(ParkResponse {
                total: data.len() as u64,
                data,
            }),
            Some(Step::Fail(e)) => Err(e),
            None => Ok(ParkResponse::default()),
        }
    }
}

pub fn park(name: &str, states: &str, designation: &str) -> Park {
    Park {
        full_name: name.to_string(),
        description: format!("{} is worth a visit.", name),
        states: states.to_string(),
        designation: designation.to_string(),
        ..Default::default()
    }
}
