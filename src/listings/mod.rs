//! Remote property-listing dataset: records, fetch client, filters.

mod client;
mod filter;
mod record;

pub use client::{ListingsClient, ListingsError};
pub use filter::{
    in_price_range, of_property_type, with_occupancy, with_unit_count, OccupancyMatch, PriceMatch,
    TypeMatch, UnitMatch,
};
pub use record::{keys, PropertyRecord};
