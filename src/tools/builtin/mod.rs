//! Built-in listing tools, one per query shape.

mod occupancy;
mod price;
mod property;
mod property_type;
mod units;

pub use occupancy::OccupancyFinderTool;
pub use price::PriceFinderTool;
pub use property::PropertyFinderTool;
pub use property_type::TypeFinderTool;
pub use units::UnitFinderTool;

use crate::listings::{ListingsClient, PropertyRecord};
use crate::tools::tool::ToolError;

/// Fetch the full record set, logging one diagnostic on failure.
///
/// Every tool fetches independently; failures come back as a structured
/// error so the caller can tell "fetch failed" from "zero matches".
pub(crate) async fn fetch_records(
    client: &ListingsClient,
) -> Result<Vec<PropertyRecord>, ToolError> {
    client.fetch_all().await.map_err(|err| {
        tracing::warn!(endpoint = %client.endpoint(), error = %err, "listing fetch failed");
        ToolError::from(err)
    })
}
