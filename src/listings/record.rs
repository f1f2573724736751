//! Property records as open JSON mappings.
//!
//! The remote dataset carries no schema contract, so a record is whatever
//! object the endpoint returned. Field access goes through the safe
//! accessors here; a missing or mistyped field reads as `None` and the
//! caller decides whether that excludes the record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Well-known record keys referenced by the filter adapters.
pub mod keys {
    pub const PROPERTY_ID: &str = "Property_ID";
    pub const NUMBER_OF_UNITS: &str = "Number_of_Units";
    pub const PROPERTY_TYPE: &str = "Property_Type";
    pub const OCCUPANCY_STATUS: &str = "Occupancy_Status";
    pub const LOCATION: &str = "Location";
    pub const RENTAL_PRICE: &str = "Rental_Price";
}

/// One entry in the remote dataset, kept verbatim as an open mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyRecord(pub Map<String, Value>);

impl PropertyRecord {
    /// Raw field access.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Field as a string, `None` if absent, null, or not a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Field as an integer.
    ///
    /// The live dataset stores numeric fields inconsistently (sometimes a
    /// JSON number, sometimes a numeric string like `"1000"`), so both
    /// shapes parse. Anything else reads as `None`.
    pub fn int_field(&self, key: &str) -> Option<i64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for PropertyRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: Value) -> PropertyRecord {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn str_field_reads_strings_only() {
        let r = record(serde_json::json!({"Location": "Nicosia", "Number_of_Units": 4}));
        assert_eq!(r.str_field(keys::LOCATION), Some("Nicosia"));
        assert_eq!(r.str_field(keys::NUMBER_OF_UNITS), None);
        assert_eq!(r.str_field("missing"), None);
    }

    #[test]
    fn int_field_accepts_numbers_and_numeric_strings() {
        let r = record(serde_json::json!({
            "Rental_Price": "1000",
            "Number_of_Units": 4,
            "Property_Type": "Apartment",
        }));
        assert_eq!(r.int_field(keys::RENTAL_PRICE), Some(1000));
        assert_eq!(r.int_field(keys::NUMBER_OF_UNITS), Some(4));
        assert_eq!(r.int_field(keys::PROPERTY_TYPE), None);
    }

    #[test]
    fn int_field_rejects_null_and_garbage() {
        let r = record(serde_json::json!({"Rental_Price": null, "Number_of_Units": "four"}));
        assert_eq!(r.int_field(keys::RENTAL_PRICE), None);
        assert_eq!(r.int_field(keys::NUMBER_OF_UNITS), None);
    }

    #[test]
    fn record_round_trips_transparently() {
        let json = serde_json::json!({"Property_ID": "P-001", "Location": "Kyrenia"});
        let r = record(json.clone());
        assert_eq!(serde_json::to_value(&r).unwrap(), json);
    }
}
