use super::error::ToolResult;
use async_trait::async_trait;
use serde_json::Value;

/// A named operation callable with JSON arguments
#[async_trait]
pub trait Tool: Send + Sync {
    /// Registry key, e.g. "parks:locate"
    fn name(&self) -> String;

    /// One line for whoever picks tools by description
    fn description(&self) -> String;

    /// JSON Schema for the arguments object
    fn parameters(&self) -> Value;

    async fn call(&self, arguments: Value) -> ToolResult<Value>;
}
