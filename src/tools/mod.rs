//! Tool layer exposed to the hosting agent framework.
//!
//! Each tool pairs a parameter schema with an async callable. The framework
//! enumerates tools through [`ToolRegistry`], supplies a JSON object
//! matching the selected tool's schema, and renders whatever the tool
//! returns.

pub mod builtin;
pub mod schema;

mod descriptor;
mod registry;
mod tool;

pub use descriptor::ToolDescriptor;
pub use registry::ToolRegistry;
pub use tool::{require_i64, require_str, validate_tool_schema, Tool, ToolError, ToolOutput};
