use super::error::{ToolError, ToolResult};
use super::traits::Tool;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// A registry for managing available tools
#[derive(Clone)]
pub struct ToolRegistry {
    tools: Arc<DashMap<String, Arc<dyn Tool>>>,
    call_timeout: Duration,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(call_timeout: Duration) -> Self {
        Self {
            tools: Arc::new(DashMap::new()),
            call_timeout,
        }
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&self, tool: Arc<dyn Tool>) {
        let name = tool.name();
        info!(target: "tool_registry", tool = %name, "Registering tool");
        self.tools.insert(name, tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).map(|t| t.clone())
    }

    /// Registered tool names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.iter().map(|t| t.key().clone()).collect();
        names.sort();
        names
    }

    /// Call a tool by name with timeout
    #[tracing::instrument(skip(self, arguments), fields(tool.name = %name))]
    pub async fn call(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> ToolResult<serde_json::Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;

        debug!(target: "tool_registry", tool = %name, "Invoking tool");

        let result = match timeout(self.call_timeout, tool.call(arguments)).await {
            Ok(res) => res,
            Err(_) => {
                warn!(target: "tool_registry", tool = %name, "Tool execution timed out");
                Err(ToolError::Timeout)
            }
        };

        if let Err(e) = &result {
            warn!(target: "tool_registry", tool = %name, error = %e, "Tool execution failed");
        }
        result
    }
}
