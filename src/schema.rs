//! Schema node model
//!
//! A tagged representation of one JSON-Schema node. The five relations the
//! pipeline traverses (`properties`, `definitions`, `items` and the three
//! combinator lists) are typed fields, so traversal logic is exhaustive and
//! checked at compile time instead of guarded by presence checks. Every
//! other schema keyword rides along untouched in `rest` and round-trips to
//! the compiler verbatim.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive instance type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceType {
    Boolean,
    Number,
    Integer,
    String,
    Object,
    Array,
    Null,
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstanceType::Boolean => "boolean",
            InstanceType::Number => "number",
            InstanceType::Integer => "integer",
            InstanceType::String => "string",
            InstanceType::Object => "object",
            InstanceType::Array => "array",
            InstanceType::Null => "null",
        };
        write!(f, "{}", name)
    }
}

/// The `type` keyword: a single tag, or a union of tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeKeyword {
    Single(InstanceType),
    Union(Vec<InstanceType>),
}

/// The `items` keyword: a single nested schema, or a tuple of schemas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Items {
    Node(Box<SchemaNode>),
    Tuple(Vec<SchemaNode>),
}

/// One JSON-Schema node
///
/// Trees are transient: loaded from a schema file, mutated in place by the
/// transform passes, handed to the compiler, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TypeKeyword>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, SchemaNode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<BTreeMap<String, SchemaNode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,

    #[serde(rename = "allOf", default, skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<SchemaNode>>,

    #[serde(rename = "anyOf", default, skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<SchemaNode>>,

    #[serde(rename = "oneOf", default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<SchemaNode>>,

    /// Every other schema keyword, preserved verbatim
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

impl SchemaNode {
    /// Create a node with a single type tag
    pub fn of_type(kind: InstanceType) -> Self {
        Self {
            kind: Some(TypeKeyword::Single(kind)),
            ..Self::default()
        }
    }

    /// The single type tag, if the node declares exactly one
    pub fn single_type(&self) -> Option<InstanceType> {
        match &self.kind {
            Some(TypeKeyword::Single(kind)) => Some(*kind),
            _ => None,
        }
    }

    /// The `$ref` keyword, if present
    pub fn reference(&self) -> Option<&str> {
        self.rest.get("$ref").and_then(Value::as_str)
    }

    /// The `enum` keyword, if present
    pub fn enum_values(&self) -> Option<&Vec<Value>> {
        match self.rest.get("enum") {
            Some(Value::Array(values)) => Some(values),
            _ => None,
        }
    }

    /// The `description` keyword, if present
    pub fn description(&self) -> Option<&str> {
        self.rest.get("description").and_then(Value::as_str)
    }

    /// Property names listed under the `required` keyword
    pub fn required_properties(&self) -> Vec<&str> {
        match self.rest.get("required") {
            Some(Value::Array(names)) => names.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }
}
