use crate::nps::NpsClient;
use crate::tools::{Tool, ToolError, ToolRegistry, ToolResult};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

fn required_str<'a>(arguments: &'a Value, key: &str) -> ToolResult<&'a str> {
    arguments[key]
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ToolError::InvalidArguments(format!("Missing '{}'", key)))
}

fn not_found() -> Value {
    json!({ "found": false })
}

fn string_schema(key: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            key: {
                "type": "string",
                "description": description
            }
        },
        "required": [key]
    })
}

/// Register every park tool over one shared client
pub fn register_park_tools(registry: &ToolRegistry, nps: Arc<NpsClient>) {
    registry.register(Arc::new(ParksByStateTool::new(Arc::clone(&nps))));
    registry.register(Arc::new(DescribeParkTool::new(Arc::clone(&nps))));
    registry.register(Arc::new(LocateParkTool::new(Arc::clone(&nps))));
    registry.register(Arc::new(QuizTool::new(nps)));
}

/// Names of the parks in a state
pub struct ParksByStateTool {
    nps: Arc<NpsClient>,
}

impl ParksByStateTool {
    pub fn new(nps: Arc<NpsClient>) -> Self {
        Self { nps }
    }
}

#[async_trait]
impl Tool for ParksByStateTool {
    fn name(&self) -> String {
        "parks:list_by_state".to_string()
    }

    fn description(&self) -> String {
        "List the national parks in a U.S. state".to_string()
    }

    fn parameters(&self) -> Value {
        string_schema("state", "Lowercase state name (e.g. 'utah', 'new mexico')")
    }

    async fn call(&self, arguments: Value) -> ToolResult<Value> {
        let state = required_str(&arguments, "state")?;
        debug!(target: "park_tools", state = %state, "Listing parks");

        Ok(match self.nps.get_parks_by_state(state).await? {
            Some(parks) => json!({ "found": true, "state": state, "parks": parks }),
            None => not_found(),
        })
    }
}

/// Description of a park
pub struct DescribeParkTool {
    nps: Arc<NpsClient>,
}

impl DescribeParkTool {
    pub fn new(nps: Arc<NpsClient>) -> Self {
        Self { nps }
    }
}

#[async_trait]
impl Tool for DescribeParkTool {
    fn name(&self) -> String {
        "parks:describe".to_string()
    }

    fn description(&self) -> String {
        "Describe a national park".to_string()
    }

    fn parameters(&self) -> Value {
        string_schema("park", "Park name or part of it (e.g. 'yellowstone')")
    }

    async fn call(&self, arguments: Value) -> ToolResult<Value> {
        let park = required_str(&arguments, "park")?;
        debug!(target: "park_tools", park = %park, "Describing park");

        Ok(match self.nps.get_description(park).await? {
            Some(description) => json!({ "found": true, "description": description }),
            None => not_found(),
        })
    }
}

/// Which states a park lies in
pub struct LocateParkTool {
    nps: Arc<NpsClient>,
}

impl LocateParkTool {
    pub fn new(nps: Arc<NpsClient>) -> Self {
        Self { nps }
    }
}

#[async_trait]
impl Tool for LocateParkTool {
    fn name(&self) -> String {
        "parks:locate".to_string()
    }

    fn description(&self) -> String {
        "Find which U.S. states a national park is in".to_string()
    }

    fn parameters(&self) -> Value {
        string_schema("park", "Park name or part of it (e.g. 'death valley')")
    }

    async fn call(&self, arguments: Value) -> ToolResult<Value> {
        let park = required_str(&arguments, "park")?;
        debug!(target: "park_tools", park = %park, "Locating park");

        Ok(match self.nps.get_location(park).await? {
            Some(found) => json!({ "found": true, "park": found.park, "location": found.location }),
            None => not_found(),
        })
    }
}

/// A random park and its location
pub struct QuizTool {
    nps: Arc<NpsClient>,
}

impl QuizTool {
    pub fn new(nps: Arc<NpsClient>) -> Self {
        Self { nps }
    }
}

#[async_trait]
impl Tool for QuizTool {
    fn name(&self) -> String {
        "parks:quiz".to_string()
    }

    fn description(&self) -> String {
        "Pick a random national park to quiz about its location".to_string()
    }

    fn parameters(&self) -> Value {
        json!({ "type": "object", "properties": {} })
    }

    async fn call(&self, _arguments: Value) -> ToolResult<Value> {
        Ok(match self.nps.get_quiz_question().await? {
            Some(q) => json!({ "found": true, "park": q.park, "location": q.location }),
            None => not_found(),
        })
    }
}
