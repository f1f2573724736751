//! Occupancy-status query tool.

use std::sync::Arc;

use async_trait::async_trait;

use crate::listings::{with_occupancy, ListingsClient};
use crate::tools::builtin::fetch_records;
use crate::tools::schema::{object_schema, FieldSpec, ParamType};
use crate::tools::tool::{require_str, Tool, ToolError, ToolOutput};

/// Finds properties by occupancy status, matched case-insensitively.
pub struct OccupancyFinderTool {
    client: Arc<ListingsClient>,
}

impl OccupancyFinderTool {
    pub fn new(client: Arc<ListingsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for OccupancyFinderTool {
    fn name(&self) -> &str {
        "occupancy_finder"
    }

    fn description(&self) -> &str {
        "Takes an occupancy status and returns every property with that \
         status. Statuses: Occupied, Vacant and Under Renovation. Occupied \
         and Under Renovation mean busy, Vacant means available."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        object_schema(&[FieldSpec::required(
            "occupancy_status",
            "Occupancy Status",
            ParamType::String,
        )
        .with_description(
            "Occupancy status required, statuses are: Occupied, Vacant and \
             Under Renovation. Occupied and Under Renovation is busy, Vacant \
             is available.",
        )])
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolOutput, ToolError> {
        let start = std::time::Instant::now();
        let occupancy_status = require_str(&params, "occupancy_status")?.to_string();

        let records = fetch_records(&self.client).await?;
        let matches = with_occupancy(&records, &occupancy_status);

        let output = serde_json::json!({
            "matches": matches,
            "count": matches.len(),
        });

        Ok(ToolOutput::success(output, start.elapsed()))
    }
}
