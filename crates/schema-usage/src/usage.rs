//! Aggregate usage statistics over a content-type registry.

use tracing::debug;

use crate::registry::ContentTypeRegistry;

/// Count the dynamic-zone attributes declared across all content types.
///
/// Flattens every schema's attribute map and counts the definitions whose
/// kind is `dynamiczone`. Iteration order is irrelevant since only a count
/// is produced; an empty registry yields 0. The registry is only read.
pub fn count_dynamic_zones(registry: &ContentTypeRegistry) -> usize {
    let count = registry
        .schemas()
        .flat_map(|schema| schema.attributes.values())
        .filter(|attribute| attribute.kind.is_dynamic_zone())
        .count();

    debug!(count, "counted dynamic-zone attributes");
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeDefinition, AttributeKind, ContentTypeSchema};

    #[test]
    fn test_empty_registry_counts_zero() {
        assert_eq!(count_dynamic_zones(&ContentTypeRegistry::new()), 0);
    }

    #[test]
    fn test_unknown_kinds_are_not_counted() {
        let registry: ContentTypeRegistry = [ContentTypeSchema::new("api::page.page")
            .attribute("extra", AttributeDefinition::new(AttributeKind::Unknown))]
        .into_iter()
        .collect();

        assert_eq!(count_dynamic_zones(&registry), 0);
    }

    #[test]
    fn test_counts_across_schemas() {
        let zone = || {
            AttributeDefinition::new(AttributeKind::DynamicZone {
                components: vec!["blocks.text".to_string()],
            })
        };

        let registry: ContentTypeRegistry = [
            ContentTypeSchema::new("api::article.article")
                .attribute("title", AttributeDefinition::new(AttributeKind::String))
                .attribute("body", zone()),
            ContentTypeSchema::new("api::page.page")
                .attribute("header", zone())
                .attribute("footer", zone()),
        ]
        .into_iter()
        .collect();

        assert_eq!(count_dynamic_zones(&registry), 3);
    }
}
