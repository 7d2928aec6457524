use crate::nps::NpsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Timeout")]
    Timeout,
}

impl From<NpsError> for ToolError {
    fn from(e: NpsError) -> Self {
        ToolError::ExecutionFailed(e.to_string())
    }
}

pub type ToolResult<T> = Result<T, ToolError>;
