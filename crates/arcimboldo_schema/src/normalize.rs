//! The schema dialect rewrite.

use crate::node::{SchemaMap, SchemaNode};
use serde_json::Value;

/// Rewrites a schema tree into the restricted dialect the backend accepts.
///
/// The rewrite is total and pure: it never fails, never mutates its input,
/// and returns a fresh tree sharing no structure with the argument. Rules
/// apply depth-first, parent before children, in a fixed order per node:
///
/// 1. Non-mapping values return unchanged.
/// 2. `type: "enum"` alongside an `enum` list becomes `type: "string"`.
/// 3. An `enum` list with no `type` at all gains `type: "string"`.
/// 4. `additionalProperties` is deleted outright; the dialect has no such
///    constraint, so dropping it only relaxes validation.
/// 5. `not: {type: "null"}` becomes `nullable: false`; any other `not`
///    sub-schema is itself normalized in place.
/// 6. A `required` list on an array node is unioned into `items.required`
///    and removed from the array, then `items` is normalized.
/// 7. Every schema under `properties` is normalized, names and order kept.
///
/// The enum rules assume string-valued enumerations; numeric or boolean
/// enums also coerce to `type: "string"`.
///
/// # Examples
///
/// ```
/// use arcimboldo_schema::{normalize, SchemaNode};
/// use serde_json::json;
///
/// let node = SchemaNode::from(json!({
///     "type": "object",
///     "additionalProperties": false,
///     "properties": {"color": {"enum": ["red", "green"]}},
/// }));
///
/// let normalized = normalize(&node);
/// assert_eq!(
///     normalized.to_value(),
///     json!({
///         "type": "object",
///         "properties": {"color": {"type": "string", "enum": ["red", "green"]}},
///     }),
/// );
/// ```
pub fn normalize(node: &SchemaNode) -> SchemaNode {
    match node {
        SchemaNode::Opaque(value) => SchemaNode::Opaque(value.clone()),
        SchemaNode::Schema(map) => SchemaNode::Schema(Box::new(normalize_map(map))),
    }
}

/// Value-level convenience over [`normalize`].
///
/// # Examples
///
/// ```
/// use arcimboldo_schema::normalize_value;
/// use serde_json::json;
///
/// assert_eq!(
///     normalize_value(&json!({"not": {"type": "null"}})),
///     json!({"nullable": false}),
/// );
/// ```
pub fn normalize_value(value: &Value) -> Value {
    normalize(&SchemaNode::from(value.clone())).to_value()
}

fn normalize_map(input: &SchemaMap) -> SchemaMap {
    let mut node = input.clone();

    // Enumerations are assumed to hold string literals: the pseudo-type tag
    // "enum" and a missing type both collapse to "string".
    if node.enum_values.is_some() {
        match node.schema_type.as_ref() {
            Some(Value::String(tag)) if tag == "enum" => {
                node.schema_type = Some(Value::String("string".to_string()));
            }
            None => {
                node.schema_type = Some(Value::String("string".to_string()));
            }
            _ => {}
        }
    }

    // The target dialect has no additionalProperties concept.
    node.additional_properties = None;

    if let Some(negated) = node.not.take() {
        let null_assertion = negated
            .as_schema()
            .is_some_and(SchemaMap::is_null_assertion);
        if null_assertion {
            // "must not be null", said in the dialect's own vocabulary.
            node.nullable = Some(false);
        } else {
            node.not = Some(Box::new(normalize(&negated)));
        }
    }

    if node.type_str() == Some("array") {
        if let Some(mut items) = node.items.take() {
            // required is an object-only keyword; at array level it is an
            // upstream tooling slip, repaired by hoisting into the item
            // schema before that schema is normalized.
            if let Some(names) = node.required.take() {
                match items.as_schema_mut() {
                    Some(item_map) => {
                        let merged = item_map.required.get_or_insert_with(Vec::new);
                        for name in names {
                            if !merged.contains(&name) {
                                merged.push(name);
                            }
                        }
                    }
                    None => {
                        // No item mapping to merge into; leave the keyword
                        // where it was found.
                        node.required = Some(names);
                    }
                }
            }
            node.items = Some(Box::new(normalize(&items)));
        }
    }

    if let Some(properties) = &mut node.properties {
        for child in properties.values_mut() {
            *child = normalize(child);
        }
    }

    node
}
