//! Property-type query tool.

use std::sync::Arc;

use async_trait::async_trait;

use crate::listings::{of_property_type, ListingsClient};
use crate::tools::builtin::fetch_records;
use crate::tools::schema::{object_schema, FieldSpec, ParamType};
use crate::tools::tool::{require_str, Tool, ToolError, ToolOutput};

/// Finds properties of a given type, matched case-insensitively.
pub struct TypeFinderTool {
    client: Arc<ListingsClient>,
}

impl TypeFinderTool {
    pub fn new(client: Arc<ListingsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TypeFinderTool {
    fn name(&self) -> &str {
        "type_finder"
    }

    fn description(&self) -> &str {
        "Takes a property type and returns every property of that type. \
         Property types in the dataset: Apartment, Commercial, Single Family \
         Home and Mixed-Use."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        object_schema(&[FieldSpec::required(
            "property_type",
            "Property Type",
            ParamType::String,
        )
        .with_description(
            "Type of property required, property types are: Apartment, \
             Commercial, Single Family Home and Mixed-Use.",
        )])
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolOutput, ToolError> {
        let start = std::time::Instant::now();
        let property_type = require_str(&params, "property_type")?.to_string();

        let records = fetch_records(&self.client).await?;
        let matches = of_property_type(&records, &property_type);

        let output = serde_json::json!({
            "matches": matches,
            "count": matches.len(),
        });

        Ok(ToolOutput::success(output, start.elapsed()))
    }
}
