//! Whole-dataset lookup tool.

use std::sync::Arc;

use async_trait::async_trait;

use crate::listings::ListingsClient;
use crate::tools::builtin::fetch_records;
use crate::tools::schema::{object_schema, FieldSpec, ParamType};
use crate::tools::tool::{require_str, Tool, ToolError, ToolOutput};

/// Returns the full listing set for a property-number lookup.
///
/// The declared intent is a by-id lookup, but the upstream behavior this
/// reproduces has always returned the complete dataset no matter which
/// `prop_no` is supplied, and downstream prompts rely on that to answer
/// "show me all properties". The argument is validated but otherwise unused.
///
/// TODO: filter on `Property_ID == prop_no` once the dataset's id format is
/// confirmed and the hosting prompts stop depending on the full listing.
pub struct PropertyFinderTool {
    client: Arc<ListingsClient>,
}

impl PropertyFinderTool {
    pub fn new(client: Arc<ListingsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for PropertyFinderTool {
    fn name(&self) -> &str {
        "property_finder"
    }

    fn description(&self) -> &str {
        "Takes a property number and returns the property listing. When users \
         ask about all properties, check the returned list and report them all."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        object_schema(&[FieldSpec::required("prop_no", "Properties", ParamType::String)
            .with_description(
                "If users ask about all properties, you should check the \
                 properties list and return all properties",
            )])
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolOutput, ToolError> {
        let start = std::time::Instant::now();
        let _prop_no = require_str(&params, "prop_no")?;

        let records = fetch_records(&self.client).await?;

        let output = serde_json::json!({
            "properties": records,
            "count": records.len(),
        });

        Ok(ToolOutput::success(output, start.elapsed()))
    }
}
