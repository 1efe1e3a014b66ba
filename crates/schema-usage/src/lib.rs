//! Schema usage statistics.
//!
//! Aggregate analytics over a content-management framework's registry of
//! content-type schemas. The framework owns schema storage, registration,
//! and lifecycle; this crate models the read-only registry, ingests it from
//! the framework's JSON schema documents, and computes usage aggregates —
//! chiefly the number of dynamic-zone attributes declared across all
//! content types, exposed for the framework's telemetry reporter.

pub mod error;
pub mod metrics;
pub mod registry;
pub mod schema;
pub mod usage;

pub use error::{SchemaError, SchemaResult};
pub use metrics::UsageMetrics;
pub use registry::ContentTypeRegistry;
pub use schema::{AttributeDefinition, AttributeKind, ContentTypeSchema};
pub use usage::count_dynamic_zones;
