//! Tool trait and types.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::listings::ListingsError;

/// Error type for tool execution.
///
/// Failures surface to the caller as a structured error rather than an
/// empty result, so "fetch failed" and "zero matches" stay distinguishable.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl From<ListingsError> for ToolError {
    fn from(err: ListingsError) -> Self {
        match err {
            ListingsError::Transport(_) | ListingsError::Status(_) => {
                Self::ExternalService(err.to_string())
            }
            ListingsError::Decode(_) => Self::ExecutionFailed(err.to_string()),
        }
    }
}

/// Output from a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The result data.
    pub result: serde_json::Value,
    /// Time taken.
    pub duration: Duration,
}

impl ToolOutput {
    /// Create a successful output with a JSON result.
    pub fn success(result: serde_json::Value, duration: Duration) -> Self {
        Self { result, duration }
    }
}

/// Trait for tools the agent can invoke.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool name.
    fn name(&self) -> &str;

    /// Get a description of what the tool does.
    fn description(&self) -> &str;

    /// Get the JSON Schema for the tool's parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with the given parameters.
    async fn execute(&self, params: serde_json::Value) -> Result<ToolOutput, ToolError>;
}

/// Extract a required string parameter from a JSON object.
///
/// Returns `ToolError::InvalidParameters` if the key is missing or not a string.
pub fn require_str<'a>(params: &'a serde_json::Value, name: &str) -> Result<&'a str, ToolError> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ToolError::InvalidParameters(format!("missing '{}' parameter", name)))
}

/// Extract a required integer parameter from a JSON object.
///
/// Returns `ToolError::InvalidParameters` if the key is missing or not an integer.
pub fn require_i64(params: &serde_json::Value, name: &str) -> Result<i64, ToolError> {
    params
        .get(name)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| ToolError::InvalidParameters(format!("missing '{}' parameter", name)))
}

/// Lenient runtime validation of a tool's `parameters_schema()`.
///
/// Catches structural mistakes at registration/test time. Rules enforced:
///
/// 1. Top-level must have `"type": "object"`
/// 2. Top-level must have `"properties"` as an object
/// 3. Every key in `"required"` must exist in `"properties"`
/// 4. Every property must carry a `"title"` and a `"type"` (the simplified
///    schema shape keeps exactly those two fields per property)
///
/// Returns a list of validation errors. An empty list means the schema is valid.
pub fn validate_tool_schema(schema: &serde_json::Value, path: &str) -> Vec<String> {
    let mut errors = Vec::new();

    match schema.get("type").and_then(|t| t.as_str()) {
        Some("object") => {}
        Some(other) => {
            errors.push(format!("{path}: expected type \"object\", got \"{other}\""));
            return errors;
        }
        None => {
            errors.push(format!("{path}: missing \"type\": \"object\""));
            return errors;
        }
    }

    let properties = match schema.get("properties").and_then(|p| p.as_object()) {
        Some(p) => p,
        None => {
            errors.push(format!("{path}: missing or non-object \"properties\""));
            return errors;
        }
    };

    if let Some(required) = schema.get("required").and_then(|r| r.as_array()) {
        for req in required {
            if let Some(key) = req.as_str() {
                if !properties.contains_key(key) {
                    errors.push(format!(
                        "{path}: required key \"{key}\" not found in properties"
                    ));
                }
            }
        }
    }

    for (key, prop) in properties {
        if prop.get("title").and_then(|t| t.as_str()).is_none() {
            errors.push(format!("{path}.{key}: property missing \"title\""));
        }
        if prop.get("type").and_then(|t| t.as_str()).is_none() {
            errors.push(format!("{path}.{key}: property missing \"type\""));
        }
    }

    errors
}
