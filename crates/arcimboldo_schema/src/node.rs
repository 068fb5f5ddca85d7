//! Schema tree representation.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// One JSON-Schema-shaped subtree.
///
/// Schemas arrive as arbitrary JSON, so the tree is a closed union: a keyed
/// mapping becomes [`SchemaNode::Schema`], the only shape the rewrite rules
/// inspect, and every other value (null, scalars, bare arrays) becomes
/// [`SchemaNode::Opaque`] and survives normalization untouched.
///
/// # Examples
///
/// ```
/// use arcimboldo_schema::SchemaNode;
/// use serde_json::json;
///
/// let node = SchemaNode::from(json!({"type": "string", "format": "date"}));
/// assert!(node.as_schema().is_some());
///
/// let scalar = SchemaNode::from(json!(42));
/// assert!(scalar.as_schema().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// A keyed mapping carrying recognized keywords plus passthrough extras.
    Schema(Box<SchemaMap>),
    /// A non-mapping value; the rewrite terminates here.
    Opaque(Value),
}

/// The keyword-level view of a mapping node.
///
/// Every keyword the rewrite recognizes is a typed optional field. Keys it
/// does not recognize, and recognized keys whose values have an unusable
/// shape, land in `extra` and round-trip unchanged. Property insertion
/// order is preserved end to end.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaMap {
    /// The `type` keyword, any shape (string in well-formed input).
    pub schema_type: Option<Value>,
    /// The `enum` keyword: ordered literal values.
    pub enum_values: Option<Vec<Value>>,
    /// The `properties` keyword: child schema per property name.
    pub properties: Option<IndexMap<String, SchemaNode>>,
    /// The `items` keyword: element schema of an array node.
    pub items: Option<Box<SchemaNode>>,
    /// The `required` keyword: property names (an object-only keyword,
    /// tolerated at array level and repaired by the rewrite).
    pub required: Option<Vec<Value>>,
    /// The `additionalProperties` keyword, any value.
    pub additional_properties: Option<Value>,
    /// The `not` keyword: negated sub-schema.
    pub not: Option<Box<SchemaNode>>,
    /// The `nullable` keyword of the target dialect.
    pub nullable: Option<bool>,
    /// Unrecognized keys, in encounter order.
    pub extra: Map<String, Value>,
}

impl SchemaMap {
    /// Builds the keyword view of a JSON object, in key encounter order.
    pub fn from_object(fields: Map<String, Value>) -> Self {
        let mut map = SchemaMap::default();
        for (key, value) in fields {
            match key.as_str() {
                "type" => map.schema_type = Some(value),
                "enum" => match value {
                    Value::Array(values) => map.enum_values = Some(values),
                    other => {
                        map.extra.insert(key.clone(), other);
                    }
                },
                "properties" => match value {
                    Value::Object(children) => {
                        map.properties = Some(
                            children
                                .into_iter()
                                .map(|(name, child)| (name, SchemaNode::from(child)))
                                .collect(),
                        );
                    }
                    other => {
                        map.extra.insert(key.clone(), other);
                    }
                },
                "items" => map.items = Some(Box::new(SchemaNode::from(value))),
                "required" => match value {
                    Value::Array(names) => map.required = Some(names),
                    other => {
                        map.extra.insert(key.clone(), other);
                    }
                },
                "additionalProperties" => map.additional_properties = Some(value),
                "not" => map.not = Some(Box::new(SchemaNode::from(value))),
                "nullable" => match value {
                    Value::Bool(flag) => map.nullable = Some(flag),
                    other => {
                        map.extra.insert(key.clone(), other);
                    }
                },
                _ => {
                    map.extra.insert(key.clone(), value);
                }
            }
        }
        map
    }

    /// Renders the node back to a JSON object.
    ///
    /// Recognized keywords come first in a fixed order, then unrecognized
    /// keys in their original encounter order.
    pub fn to_value(&self) -> Value {
        let mut fields = Map::new();
        if let Some(value) = &self.schema_type {
            fields.insert("type".to_string(), value.clone());
        }
        if let Some(values) = &self.enum_values {
            fields.insert("enum".to_string(), Value::Array(values.clone()));
        }
        if let Some(properties) = &self.properties {
            let children = properties
                .iter()
                .map(|(name, child)| (name.clone(), child.to_value()))
                .collect();
            fields.insert("properties".to_string(), Value::Object(children));
        }
        if let Some(items) = &self.items {
            fields.insert("items".to_string(), items.to_value());
        }
        if let Some(names) = &self.required {
            fields.insert("required".to_string(), Value::Array(names.clone()));
        }
        if let Some(value) = &self.additional_properties {
            fields.insert("additionalProperties".to_string(), value.clone());
        }
        if let Some(not) = &self.not {
            fields.insert("not".to_string(), not.to_value());
        }
        if let Some(flag) = self.nullable {
            fields.insert("nullable".to_string(), Value::Bool(flag));
        }
        for (key, value) in &self.extra {
            // A typed keyword written by the rewrite wins over a malformed
            // duplicate that was parked here.
            if !fields.contains_key(key) {
                fields.insert(key.clone(), value.clone());
            }
        }
        Value::Object(fields)
    }

    /// The `type` keyword when it is a plain string.
    pub fn type_str(&self) -> Option<&str> {
        self.schema_type.as_ref().and_then(Value::as_str)
    }

    /// True when this map asserts `type: "null"`.
    pub fn is_null_assertion(&self) -> bool {
        self.type_str() == Some("null")
    }
}

impl SchemaNode {
    /// The keyword view when this node is a mapping.
    pub fn as_schema(&self) -> Option<&SchemaMap> {
        match self {
            SchemaNode::Schema(map) => Some(map),
            SchemaNode::Opaque(_) => None,
        }
    }

    /// Mutable keyword view when this node is a mapping.
    pub fn as_schema_mut(&mut self) -> Option<&mut SchemaMap> {
        match self {
            SchemaNode::Schema(map) => Some(map),
            SchemaNode::Opaque(_) => None,
        }
    }

    /// Renders the node back to a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            SchemaNode::Schema(map) => map.to_value(),
            SchemaNode::Opaque(value) => value.clone(),
        }
    }
}

impl From<Value> for SchemaNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => SchemaNode::Schema(Box::new(SchemaMap::from_object(fields))),
            other => SchemaNode::Opaque(other),
        }
    }
}

impl From<SchemaNode> for Value {
    fn from(node: SchemaNode) -> Self {
        node.to_value()
    }
}

impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(SchemaNode::from(Value::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mapping_splits_known_keys_from_extras() {
        let node = SchemaNode::from(json!({
            "type": "object",
            "description": "a person",
            "properties": {"name": {"type": "string"}},
            "x-vendor": 7,
        }));

        let map = node.as_schema().expect("mapping node");
        assert_eq!(map.type_str(), Some("object"));
        assert_eq!(map.properties.as_ref().map(|p| p.len()), Some(1));
        assert_eq!(map.extra.get("description"), Some(&json!("a person")));
        assert_eq!(map.extra.get("x-vendor"), Some(&json!(7)));
    }

    #[test]
    fn malformed_keyword_shapes_fall_into_extras() {
        let node = SchemaNode::from(json!({
            "enum": "not-a-list",
            "required": "not-a-list",
            "nullable": "yes",
        }));

        let map = node.as_schema().expect("mapping node");
        assert!(map.enum_values.is_none());
        assert!(map.required.is_none());
        assert!(map.nullable.is_none());
        assert_eq!(map.extra.len(), 3);
    }

    #[test]
    fn value_round_trip_preserves_content() {
        let source = json!({
            "type": "object",
            "properties": {
                "zeta": {"type": "string"},
                "alpha": {"type": "integer"},
            },
            "required": ["zeta"],
            "format": "custom",
        });

        assert_eq!(SchemaNode::from(source.clone()).to_value(), source);
    }

    #[test]
    fn non_mapping_values_are_opaque() {
        assert_eq!(
            SchemaNode::from(json!(null)),
            SchemaNode::Opaque(Value::Null)
        );
        assert_eq!(SchemaNode::from(json!("x")).to_value(), json!("x"));
        assert_eq!(SchemaNode::from(json!([1, 2])).to_value(), json!([1, 2]));
    }
}
