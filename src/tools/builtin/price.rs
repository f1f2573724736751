//! Price-range query tool.

use std::sync::Arc;

use async_trait::async_trait;

use crate::listings::{in_price_range, ListingsClient};
use crate::tools::builtin::fetch_records;
use crate::tools::schema::{object_schema, FieldSpec, ParamType};
use crate::tools::tool::{require_i64, Tool, ToolError, ToolOutput};

/// Finds properties whose rental price falls in an inclusive range.
pub struct PriceFinderTool {
    client: Arc<ListingsClient>,
}

impl PriceFinderTool {
    pub fn new(client: Arc<ListingsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for PriceFinderTool {
    fn name(&self) -> &str {
        "price_finder"
    }

    fn description(&self) -> &str {
        "Takes a minimum and maximum rental price and returns every property \
         whose rental price falls inside that range, with its location."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        object_schema(&[
            FieldSpec::required("minPrice", "Minprice", ParamType::Integer),
            FieldSpec::required("maxPrice", "Maxprice", ParamType::Integer),
        ])
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolOutput, ToolError> {
        let start = std::time::Instant::now();
        let min_price = require_i64(&params, "minPrice")?;
        let max_price = require_i64(&params, "maxPrice")?;

        // min > max is not rejected; it simply matches nothing.
        let records = fetch_records(&self.client).await?;
        let matches = in_price_range(&records, min_price, max_price);

        let output = serde_json::json!({
            "matches": matches,
            "count": matches.len(),
        });

        Ok(ToolOutput::success(output, start.elapsed()))
    }
}
