//! Function-calling tools over a remote property-listing dataset.
//!
//! The dataset lives behind a single public JSON endpoint. Each tool fetches
//! the full record set, applies one in-memory filter (price range, unit
//! count, property type, occupancy status, or property id), and returns the
//! matches in source order. Tools are exposed to a hosting agent framework
//! through [`ToolRegistry`], which pairs each tool's parameter schema with
//! its invocation metadata.

pub mod config;
pub mod error;
pub mod listings;
pub mod tools;

pub use config::ListingsConfig;
pub use error::ConfigError;
pub use listings::{ListingsClient, ListingsError, PropertyRecord};
pub use tools::{Tool, ToolDescriptor, ToolError, ToolOutput, ToolRegistry};
