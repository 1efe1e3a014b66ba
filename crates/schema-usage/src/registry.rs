//! Content-type registry.
//!
//! A read-only mapping from content-type identifier to schema. The host
//! framework owns registration and lifecycle; this crate ingests a
//! snapshot and aggregates over it.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{SchemaError, SchemaResult};
use crate::schema::ContentTypeSchema;

/// Registry of content-type schemas, keyed by uid.
///
/// Immutable once built. Shared references can be read from any number of
/// threads without coordination.
#[derive(Debug, Clone, Default)]
pub struct ContentTypeRegistry {
    types: HashMap<String, ContentTypeSchema>,
}

impl ContentTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest a registry document of shape `{ "<uid>": { ...schema... } }`.
    pub fn from_json_str(document: &str) -> SchemaResult<Self> {
        let value: serde_json::Value = serde_json::from_str(document)?;
        Self::from_json_value(value)
    }

    /// Ingest an already-parsed registry document.
    ///
    /// The document itself must be a JSON object. A schema body that does
    /// not parse is ingested with an empty attribute map and logged, so a
    /// single malformed definition never poisons the aggregate.
    pub fn from_json_value(value: serde_json::Value) -> SchemaResult<Self> {
        let serde_json::Value::Object(entries) = value else {
            return Err(SchemaError::NotAnObject);
        };

        let mut types = HashMap::with_capacity(entries.len());
        for (uid, body) in entries {
            let mut schema = match serde_json::from_value::<ContentTypeSchema>(body) {
                Ok(schema) => schema,
                Err(e) => {
                    warn!(uid = %uid, error = %e, "malformed content-type schema body, ingesting as empty");
                    ContentTypeSchema::new(uid.clone())
                }
            };
            // The registry key is authoritative for the identifier.
            schema.uid = uid.clone();
            types.insert(uid, schema);
        }

        Ok(Self { types })
    }

    /// Insert a schema, keyed by its uid.
    pub fn insert(&mut self, schema: ContentTypeSchema) {
        self.types.insert(schema.uid.clone(), schema);
    }

    /// Get a schema by uid.
    pub fn get(&self, uid: &str) -> Option<&ContentTypeSchema> {
        self.types.get(uid)
    }

    /// Check if a content type exists.
    pub fn exists(&self, uid: &str) -> bool {
        self.types.contains_key(uid)
    }

    /// Get the number of registered content types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// List registered content-type identifiers.
    pub fn uids(&self) -> Vec<String> {
        self.types.keys().cloned().collect()
    }

    /// Iterate over all schemas.
    pub fn schemas(&self) -> impl Iterator<Item = &ContentTypeSchema> {
        self.types.values()
    }
}

impl FromIterator<ContentTypeSchema> for ContentTypeRegistry {
    fn from_iter<I: IntoIterator<Item = ContentTypeSchema>>(iter: I) -> Self {
        let mut registry = Self::new();
        for schema in iter {
            registry.insert(schema);
        }
        registry
    }
}
