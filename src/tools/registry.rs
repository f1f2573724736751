//! Closed registry of the listing tools.

use std::sync::Arc;

use crate::listings::ListingsClient;
use crate::tools::builtin::{
    OccupancyFinderTool, PriceFinderTool, PropertyFinderTool, TypeFinderTool, UnitFinderTool,
};
use crate::tools::descriptor::ToolDescriptor;

/// Fixed, ordered set of tool descriptors.
///
/// Built once at startup; there is no registration API after construction.
/// Lookup is a linear scan, fine for the handful of tools here.
#[derive(Debug)]
pub struct ToolRegistry {
    descriptors: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Build the registry of the five built-in listing tools, all sharing
    /// one client.
    pub fn builtin(client: Arc<ListingsClient>) -> Self {
        let descriptors = vec![
            ToolDescriptor::backend(Arc::new(PriceFinderTool::new(client.clone()))),
            ToolDescriptor::backend(Arc::new(UnitFinderTool::new(client.clone()))),
            ToolDescriptor::backend(Arc::new(TypeFinderTool::new(client.clone()))),
            ToolDescriptor::backend(Arc::new(OccupancyFinderTool::new(client.clone()))),
            ToolDescriptor::backend(Arc::new(PropertyFinderTool::new(client))),
        ];

        Self { descriptors }
    }

    /// All descriptors, in registration order.
    pub fn all(&self) -> &[ToolDescriptor] {
        &self.descriptors
    }

    /// Look up a descriptor by tool name.
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// Registered tool names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListingsConfig;

    fn registry() -> ToolRegistry {
        let client = ListingsClient::new(&ListingsConfig::default()).unwrap();
        ToolRegistry::builtin(Arc::new(client))
    }

    #[test]
    fn builtin_registry_holds_five_tools_in_order() {
        let registry = registry();
        assert_eq!(
            registry.names(),
            vec![
                "price_finder",
                "unit_finder",
                "type_finder",
                "occupancy_finder",
                "property_finder",
            ]
        );
    }

    #[test]
    fn lookup_by_name() {
        let registry = registry();
        assert!(registry.get("occupancy_finder").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn descriptors_carry_unique_names() {
        let registry = registry();
        let mut names = registry.names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), registry.all().len());
    }
}
