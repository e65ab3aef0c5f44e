//! Typed view of the parts of an OpenAPI document the route catalog reads.
//!
//! Only `paths` and `components` are modelled; every other top-level key is
//! ignored so a bare `paths:` document is accepted. Field types are checked
//! when the YAML is parsed, so a `summary: [1, 2]` is a parse failure rather
//! than a silently misread value.

use crate::error::CatalogError;
use crate::http_method::HttpMethod;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;

#[derive(Debug, Default, Deserialize)]
pub struct OpenApiDocument {
    #[serde(default)]
    pub paths: Option<IndexMap<String, PathItem>>,
    #[serde(default)]
    pub components: Option<Components>,
}

impl OpenApiDocument {
    /// Iterates paths in document order; an absent or null `paths` is empty
    pub fn paths(&self) -> impl Iterator<Item = (&String, &PathItem)> {
        self.paths.iter().flat_map(|paths| paths.iter())
    }
}

/// `$ref` or an inline item
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReferenceOr<T> {
    Reference {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Item(T),
}

/// A path item kept as raw entries so key order and key casing survive
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PathItem {
    entries: IndexMap<String, Value>,
}

impl PathItem {
    /// Operations in document order.
    ///
    /// Keys that are not HTTP methods (`parameters`, `summary`, `servers`,
    /// extensions) are skipped. Method keys differing only in case (`get`
    /// and `GET`) name the same operation and are rejected.
    pub fn operations(&self) -> Result<Vec<(HttpMethod, Operation)>, CatalogError> {
        let mut operations: Vec<(HttpMethod, Operation)> = Vec::new();
        for (key, value) in &self.entries {
            match key.parse::<HttpMethod>() {
                Ok(method) => {
                    if operations.iter().any(|(seen, _)| *seen == method) {
                        return Err(CatalogError::DuplicateOperation {
                            method: method.as_str(),
                        });
                    }
                    let operation: Operation = serde_yaml::from_value(value.clone())?;
                    operations.push((method, operation));
                }
                Err(()) => {
                    tracing::debug!(key = %key, "Skipping non-operation path item key");
                }
            }
        }
        Ok(operations)
    }

    /// Parameters declared on the path item itself
    pub fn parameters(&self) -> Result<Vec<ReferenceOr<Parameter>>, CatalogError> {
        match self.entries.get("parameters") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => Ok(serde_yaml::from_value(value.clone())?),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub parameters: Option<Vec<ReferenceOr<Parameter>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schema: Option<ReferenceOr<Schema>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(default, rename = "type")]
    pub schema_type: Option<SchemaType>,
}

/// `type: string` or, in OpenAPI 3.1, `type: [string, "null"]`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Multiple(Vec<String>),
}

impl SchemaType {
    /// The first non-null type name
    pub fn primary(&self) -> Option<&str> {
        match self {
            Self::Single(name) => Some(name.as_str()),
            Self::Multiple(names) => names
                .iter()
                .map(String::as_str)
                .find(|name| *name != "null"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub parameters: IndexMap<String, ReferenceOr<Parameter>>,
    #[serde(default)]
    pub schemas: IndexMap<String, ReferenceOr<Schema>>,
}
