//! Validates that every registered tool schema conforms to the simplified
//! object shape the hosting framework consumes.
//!
//! This catches the class of bugs where `required` keys aren't in
//! `properties` or a property loses its `title`/`type` pair.

use std::sync::Arc;

use propfinder::config::ListingsConfig;
use propfinder::listings::ListingsClient;
use propfinder::tools::{validate_tool_schema, ToolRegistry};

fn registry() -> ToolRegistry {
    let client = ListingsClient::new(&ListingsConfig::default()).expect("client");
    ToolRegistry::builtin(Arc::new(client))
}

/// Every descriptor's schema passes the structural validator.
#[test]
fn all_builtin_tool_schemas_are_valid() {
    let registry = registry();
    assert!(!registry.all().is_empty());

    let mut all_errors = Vec::new();
    for descriptor in registry.all() {
        let errors = validate_tool_schema(&descriptor.parameters, &descriptor.name);
        if !errors.is_empty() {
            all_errors.push(format!(
                "Tool '{}' has schema errors:\n  {}",
                descriptor.name,
                errors.join("\n  ")
            ));
        }
    }

    assert!(
        all_errors.is_empty(),
        "Tool schema validation failures:\n{}",
        all_errors.join("\n\n")
    );
}

/// Guard the exact registered set so a new tool cannot slip in without
/// schema coverage.
#[test]
fn builtin_registration_covers_expected_tools() {
    let registry = registry();
    let mut names = registry.names();
    names.sort_unstable();

    let expected = [
        "occupancy_finder",
        "price_finder",
        "property_finder",
        "type_finder",
        "unit_finder",
    ];

    assert_eq!(
        names, expected,
        "Built-in tool set changed. Update this test and ensure new tools have valid schemas."
    );
}

/// The price finder keeps the exact simplified shape the framework expects.
#[test]
fn price_finder_schema_matches_framework_shape() {
    let registry = registry();
    let descriptor = registry.get("price_finder").expect("price_finder");

    assert_eq!(
        descriptor.parameters,
        serde_json::json!({
            "type": "object",
            "default": {},
            "properties": {
                "minPrice": {"title": "Minprice", "type": "integer"},
                "maxPrice": {"title": "Maxprice", "type": "integer"},
            },
            "required": ["minPrice", "maxPrice"],
        })
    );
}

/// Every descriptor carries the fixed invocation metadata.
#[test]
fn descriptors_share_backend_metadata() {
    for descriptor in registry().all() {
        let value = serde_json::to_value(descriptor).expect("serialize");
        assert_eq!(value["functionType"], "backend", "{}", descriptor.name);
        assert_eq!(value["isDangerous"], false, "{}", descriptor.name);
        assert_eq!(value["isLongRunningTool"], false, "{}", descriptor.name);
        assert_eq!(value["rerun"], true, "{}", descriptor.name);
        assert_eq!(value["rerunWithDifferentParameters"], true, "{}", descriptor.name);
    }
}
