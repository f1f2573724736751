//! Tool descriptors: the registration entry handed to the framework.

use std::sync::Arc;

use serde::Serialize;

use crate::tools::tool::Tool;

/// One registered tool with its invocation metadata.
///
/// Serializes to the shape the hosting framework expects (camelCase flags);
/// the callable itself is the [`Tool`] and is not part of the wire shape.
/// Descriptors are built once at registry construction and never mutated.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
    pub is_dangerous: bool,
    pub function_type: String,
    pub is_long_running_tool: bool,
    pub rerun: bool,
    pub rerun_with_different_parameters: bool,
    #[serde(skip)]
    pub tool: Arc<dyn Tool>,
}

impl ToolDescriptor {
    /// Wrap a tool with the fixed metadata every listing tool shares:
    /// backend, not dangerous, not long-running, safe to rerun.
    pub fn backend(tool: Arc<dyn Tool>) -> Self {
        Self {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            parameters: tool.parameters_schema(),
            is_dangerous: false,
            function_type: "backend".to_string(),
            is_long_running_tool: false,
            rerun: true,
            rerun_with_different_parameters: true,
            tool,
        }
    }
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("function_type", &self.function_type)
            .finish_non_exhaustive()
    }
}
