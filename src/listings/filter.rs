//! Pure filters over the fetched record set.
//!
//! Each filter walks the records once and returns matches in source order.
//! Records missing the queried field (or holding a value that does not
//! parse) are excluded, never an error.

use serde::Serialize;

use crate::listings::record::{keys, PropertyRecord};

/// A price-range match: where the property is and what it rents for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceMatch {
    pub location: String,
    pub rental_price: i64,
}

/// A unit-count match: the full record plus the matched count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitMatch {
    pub record: PropertyRecord,
    pub units: i64,
}

/// A property-type match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeMatch {
    pub record: PropertyRecord,
    pub property_type: String,
    /// Unit count when the record carries one.
    pub units: Option<i64>,
}

/// An occupancy-status match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyMatch {
    pub record: PropertyRecord,
    pub status: String,
}

/// Properties whose rental price lies in `[min_price, max_price]`,
/// inclusive on both ends. An inverted range matches nothing.
pub fn in_price_range(records: &[PropertyRecord], min_price: i64, max_price: i64) -> Vec<PriceMatch> {
    records
        .iter()
        .filter_map(|r| {
            let price = r.int_field(keys::RENTAL_PRICE)?;
            if price < min_price || price > max_price {
                return None;
            }
            Some(PriceMatch {
                location: r.str_field(keys::LOCATION).unwrap_or_default().to_string(),
                rental_price: price,
            })
        })
        .collect()
}

/// Properties with exactly `units` units.
pub fn with_unit_count(records: &[PropertyRecord], units: i64) -> Vec<UnitMatch> {
    records
        .iter()
        .filter_map(|r| {
            let count = r.int_field(keys::NUMBER_OF_UNITS)?;
            (count == units).then(|| UnitMatch {
                record: r.clone(),
                units: count,
            })
        })
        .collect()
}

/// Properties of the given type, compared case-insensitively.
pub fn of_property_type(records: &[PropertyRecord], property_type: &str) -> Vec<TypeMatch> {
    let wanted = property_type.to_lowercase();
    records
        .iter()
        .filter_map(|r| {
            let ty = r.str_field(keys::PROPERTY_TYPE)?;
            (ty.to_lowercase() == wanted).then(|| TypeMatch {
                record: r.clone(),
                property_type: ty.to_string(),
                units: r.int_field(keys::NUMBER_OF_UNITS),
            })
        })
        .collect()
}

/// Properties with the given occupancy status, compared case-insensitively.
///
/// Statuses in the live dataset: Occupied, Vacant, Under Renovation.
pub fn with_occupancy(records: &[PropertyRecord], occupancy_status: &str) -> Vec<OccupancyMatch> {
    let wanted = occupancy_status.to_lowercase();
    records
        .iter()
        .filter_map(|r| {
            let status = r.str_field(keys::OCCUPANCY_STATUS)?;
            (status.to_lowercase() == wanted).then(|| OccupancyMatch {
                record: r.clone(),
                status: status.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Vec<PropertyRecord> {
        serde_json::from_value(serde_json::json!([
            {
                "Property_ID": "P-001",
                "Location": "A",
                "Rental_Price": "1000",
                "Number_of_Units": 4,
                "Property_Type": "Apartment",
                "Occupancy_Status": "Occupied"
            },
            {
                "Property_ID": "P-002",
                "Location": "B",
                "Rental_Price": "2500",
                "Number_of_Units": "12",
                "Property_Type": "Commercial",
                "Occupancy_Status": "Vacant"
            },
            {
                "Property_ID": "P-003",
                "Location": "C",
                "Property_Type": "apartment",
                "Occupancy_Status": "Under Renovation"
            },
            {
                "Property_ID": "P-004",
                "Rental_Price": "n/a",
                "Number_of_Units": null
            }
        ]))
        .unwrap()
    }

    #[test]
    fn price_range_is_inclusive_and_in_bounds() {
        let matches = in_price_range(&dataset(), 1000, 2500);
        assert_eq!(matches.len(), 2);
        for m in &matches {
            assert!((1000..=2500).contains(&m.rental_price));
        }
        // Source order preserved.
        assert_eq!(matches[0].location, "A");
        assert_eq!(matches[1].location, "B");
    }

    #[test]
    fn price_range_excludes_missing_and_unparseable() {
        let matches = in_price_range(&dataset(), 0, 1_000_000);
        // P-003 has no price, P-004's is not numeric.
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn inverted_price_range_matches_nothing() {
        assert!(in_price_range(&dataset(), 2000, 500).is_empty());
    }

    #[test]
    fn price_scenario_from_dataset_sample() {
        let records: Vec<PropertyRecord> = serde_json::from_value(serde_json::json!([
            {"Location": "A", "Rental_Price": "1000"},
            {"Location": "B", "Rental_Price": "2500"}
        ]))
        .unwrap();

        let matches = in_price_range(&records, 500, 1500);
        assert_eq!(
            matches,
            vec![PriceMatch {
                location: "A".to_string(),
                rental_price: 1000
            }]
        );
    }

    #[test]
    fn unit_count_matches_exactly() {
        let matches = with_unit_count(&dataset(), 12);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].units, 12);
        assert_eq!(matches[0].record.str_field("Property_ID"), Some("P-002"));

        assert!(with_unit_count(&dataset(), 5).is_empty());
    }

    #[test]
    fn property_type_is_case_insensitive() {
        let lower = of_property_type(&dataset(), "apartment");
        let upper = of_property_type(&dataset(), "Apartment");
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 2);
        // Matched value is returned as stored, not as queried.
        assert_eq!(lower[0].property_type, "Apartment");
        assert_eq!(lower[1].property_type, "apartment");
        // Unit count rides along when present.
        assert_eq!(lower[0].units, Some(4));
        assert_eq!(lower[1].units, None);
    }

    #[test]
    fn occupancy_is_case_insensitive_and_skips_missing() {
        let matches = with_occupancy(&dataset(), "under renovation");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].status, "Under Renovation");

        // P-004 has no status field at all; no panic, no match.
        assert!(with_occupancy(&dataset(), "Leased").is_empty());
    }
}
