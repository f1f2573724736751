//! Unit-count query tool.

use std::sync::Arc;

use async_trait::async_trait;

use crate::listings::{with_unit_count, ListingsClient};
use crate::tools::builtin::fetch_records;
use crate::tools::schema::{object_schema, FieldSpec, ParamType};
use crate::tools::tool::{require_i64, Tool, ToolError, ToolOutput};

/// Finds properties with an exact number of units.
pub struct UnitFinderTool {
    client: Arc<ListingsClient>,
}

impl UnitFinderTool {
    pub fn new(client: Arc<ListingsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for UnitFinderTool {
    fn name(&self) -> &str {
        "unit_finder"
    }

    fn description(&self) -> &str {
        "Takes a number of units and returns every property that has exactly \
         that many units."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        object_schema(&[FieldSpec::required(
            "number_of_units",
            "Number of Units",
            ParamType::Integer,
        )
        .with_description("Number of units required")])
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolOutput, ToolError> {
        let start = std::time::Instant::now();
        let units = require_i64(&params, "number_of_units")?;

        let records = fetch_records(&self.client).await?;
        let matches = with_unit_count(&records, units);

        let output = serde_json::json!({
            "matches": matches,
            "count": matches.len(),
        });

        Ok(ToolOutput::success(output, start.elapsed()))
    }
}
