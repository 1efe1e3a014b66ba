//! Prometheus metrics for schema usage.
//!
//! Exposes registry aggregates in Prometheus format for the host
//! framework's telemetry exporter.

use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;

use crate::registry::ContentTypeRegistry;
use crate::usage::count_dynamic_zones;

/// Schema usage metrics.
pub struct UsageMetrics {
    registry: Registry,

    /// Number of registered content types.
    pub content_types: Gauge,

    /// Number of dynamic-zone attributes across all content types.
    pub dynamic_zone_attributes: Gauge,
}

impl UsageMetrics {
    /// Create a new metrics registry.
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let content_types = Gauge::default();
        registry.register(
            "content_types",
            "Registered content types",
            content_types.clone(),
        );

        let dynamic_zone_attributes = Gauge::default();
        registry.register(
            "dynamic_zone_attributes",
            "Dynamic-zone attributes across all content types",
            dynamic_zone_attributes.clone(),
        );

        Self {
            registry,
            content_types,
            dynamic_zone_attributes,
        }
    }

    /// Snapshot the usage gauges from a registry.
    pub fn observe(&self, types: &ContentTypeRegistry) {
        self.content_types.set(types.len() as i64);
        self.dynamic_zone_attributes
            .set(count_dynamic_zones(types) as i64);
    }

    /// Encode metrics in Prometheus text format.
    ///
    /// # Panics
    ///
    /// Panics if metric encoding to a `String` buffer fails. The
    /// `fmt::Write` impl for `String` is infallible and these gauges carry
    /// no label sets that could produce `fmt::Error`.
    pub fn encode(&self) -> String {
        let mut buffer = String::new();
        // Prometheus encoding to String buffer is infallible
        #[allow(clippy::expect_used)]
        encode(&mut buffer, &self.registry).expect("encoding metrics");
        buffer
    }
}

impl Default for UsageMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UsageMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsageMetrics").finish()
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::schema::{AttributeDefinition, AttributeKind, ContentTypeSchema};

    #[test]
    fn test_metrics_new() {
        let metrics = UsageMetrics::new();
        let output = metrics.encode();
        assert!(output.contains("content_types"));
        assert!(output.contains("dynamic_zone_attributes"));
    }

    #[test]
    fn test_observe_sets_gauges() {
        let registry: ContentTypeRegistry = [ContentTypeSchema::new("api::page.page")
            .attribute(
                "sections",
                AttributeDefinition::new(AttributeKind::DynamicZone { components: vec![] }),
            )]
        .into_iter()
        .collect();

        let metrics = UsageMetrics::new();
        metrics.observe(&registry);

        assert_eq!(metrics.content_types.get(), 1);
        assert_eq!(metrics.dynamic_zone_attributes.get(), 1);
    }
}
