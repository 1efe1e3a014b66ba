//! Content-type schema model.
//!
//! Mirrors the schema documents the host framework registers for each
//! content type: an attribute map keyed by field name, each attribute
//! tagged with its kind.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The declared kind of an attribute, tagged by the `type` key in schema
/// documents.
///
/// Kind-specific options are carried on the variant. A tag this crate does
/// not recognize deserializes to [`AttributeKind::Unknown`] so a newer
/// schema document never fails ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AttributeKind {
    String,
    Text,
    RichText,
    Integer,
    BigInteger,
    Float,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Time,
    Email,
    Password,
    Uid,
    Json,
    Enumeration {
        #[serde(rename = "enum", default)]
        values: Vec<String>,
    },
    Media {
        #[serde(default)]
        multiple: bool,
    },
    Relation {
        #[serde(default)]
        relation: String,
        #[serde(default)]
        target: Option<String>,
    },
    Component {
        component: String,
        #[serde(default)]
        repeatable: bool,
    },
    DynamicZone {
        #[serde(default)]
        components: Vec<String>,
    },
    #[serde(other)]
    Unknown,
}

impl AttributeKind {
    /// Whether this is the dynamic-zone kind.
    pub fn is_dynamic_zone(&self) -> bool {
        matches!(self, AttributeKind::DynamicZone { .. })
    }
}

/// A single attribute definition within a content type.
///
/// Only the kind and the kind-independent flags matter for aggregation;
/// any other per-attribute options in the source document are ignored on
/// ingest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// The attribute kind, flattened so a definition serializes as one
    /// object carrying the `type` tag.
    #[serde(flatten)]
    pub kind: AttributeKind,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub private: bool,
}

impl AttributeDefinition {
    pub fn new(kind: AttributeKind) -> Self {
        Self {
            kind,
            required: false,
            private: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }
}

/// One content type as registered with the host framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeSchema {
    /// Unique identifier (e.g. "api::article.article"). When a schema is
    /// ingested from a registry document the map key is authoritative and
    /// overwrites this field.
    #[serde(default)]
    pub uid: String,

    /// Human-readable name.
    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub description: String,

    /// Attribute name → definition. Names are unique within a schema.
    #[serde(default)]
    pub attributes: HashMap<String, AttributeDefinition>,
}

impl ContentTypeSchema {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            label: String::new(),
            description: String::new(),
            attributes: HashMap::new(),
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = label.into();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.into();
        self
    }

    pub fn attribute(mut self, name: &str, definition: AttributeDefinition) -> Self {
        self.attributes.insert(name.to_string(), definition);
        self
    }
}
