//! Default-value sanitizer
//!
//! Upstream schema generators occasionally emit string `default` values for
//! boolean and numeric properties, which makes type compilers produce
//! degenerate intersection types (e.g. `boolean & string`). This pass walks
//! the whole tree depth-first and repairs every such mismatch in place.

use serde_json::Value;

use crate::schema::{InstanceType, Items, SchemaNode, TypeKeyword};

/// One corrected default value
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultFix {
    /// Declared type of the node that was fixed
    pub kind: InstanceType,
    /// The textual value that was replaced
    pub old: Value,
    /// The coerced replacement
    pub new: Value,
}

/// Repair `type`/`default` mismatches everywhere in the tree.
///
/// Mutates `node` in place. The walk is total: it visits every node
/// reachable through `properties`, `definitions`, `items` (single node or
/// tuple) and the `allOf`/`anyOf`/`oneOf` lists, whether or not the current
/// node needed a fix. Coercion rules:
///
/// - `boolean` with a textual default: the text `"true"` becomes `true`,
///   any other text becomes `false`
/// - `number`/`integer` with a textual default: replaced only when the text
///   parses as a well-formed number; integral text stays an integer
/// - no other combinations are altered
pub fn sanitize_defaults(node: &mut SchemaNode) -> Vec<DefaultFix> {
    let mut fixes = Vec::new();
    walk(node, &mut fixes);
    fixes
}

fn walk(node: &mut SchemaNode, fixes: &mut Vec<DefaultFix>) {
    fix_default(node, fixes);

    if let Some(properties) = node.properties.as_mut() {
        for child in properties.values_mut() {
            walk(child, fixes);
        }
    }

    if let Some(definitions) = node.definitions.as_mut() {
        for child in definitions.values_mut() {
            walk(child, fixes);
        }
    }

    match node.items.as_mut() {
        Some(Items::Node(child)) => walk(child, fixes),
        Some(Items::Tuple(children)) => {
            for child in children {
                walk(child, fixes);
            }
        }
        None => {}
    }

    let combinators = [
        node.all_of.as_mut(),
        node.any_of.as_mut(),
        node.one_of.as_mut(),
    ];
    for list in combinators.into_iter().flatten() {
        for child in list {
            walk(child, fixes);
        }
    }
}

fn fix_default(node: &mut SchemaNode, fixes: &mut Vec<DefaultFix>) {
    let kind = match &node.kind {
        Some(TypeKeyword::Single(kind)) => *kind,
        _ => return,
    };
    let text = match &node.default {
        Some(Value::String(text)) => text.clone(),
        _ => return,
    };

    let replacement = match kind {
        InstanceType::Boolean => Some(Value::Bool(text == "true")),
        InstanceType::Number | InstanceType::Integer => {
            parse_number(&text).map(Value::Number)
        }
        _ => None,
    };

    let Some(new) = replacement else { return };
    let old = Value::String(text);
    tracing::debug!(%kind, %old, %new, "coerced mismatched default value");
    node.default = Some(new.clone());
    fixes.push(DefaultFix { kind, old, new });
}

/// Parse numeric text, keeping integral values as integers.
fn parse_number(text: &str) -> Option<serde_json::Number> {
    if let Ok(int) = text.parse::<i64>() {
        return Some(serde_json::Number::from(int));
    }
    text.parse::<f64>().ok().and_then(serde_json::Number::from_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> SchemaNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_boolean_coercion() {
        let mut schema = node(json!({ "type": "boolean", "default": "true" }));
        let fixes = sanitize_defaults(&mut schema);
        assert_eq!(schema.default, Some(json!(true)));
        assert_eq!(fixes.len(), 1);

        let mut schema = node(json!({ "type": "boolean", "default": "false" }));
        sanitize_defaults(&mut schema);
        assert_eq!(schema.default, Some(json!(false)));

        // Anything other than the text "true" maps to false
        let mut schema = node(json!({ "type": "boolean", "default": "yes" }));
        sanitize_defaults(&mut schema);
        assert_eq!(schema.default, Some(json!(false)));
    }

    #[test]
    fn test_numeric_coercion() {
        let mut schema = node(json!({ "type": "integer", "default": "42" }));
        sanitize_defaults(&mut schema);
        assert_eq!(schema.default, Some(json!(42)));

        let mut schema = node(json!({ "type": "number", "default": "3.5" }));
        sanitize_defaults(&mut schema);
        assert_eq!(schema.default, Some(json!(3.5)));
    }

    #[test]
    fn test_unparsable_numeric_default_is_untouched() {
        let mut schema = node(json!({ "type": "integer", "default": "abc" }));
        let fixes = sanitize_defaults(&mut schema);
        assert_eq!(schema.default, Some(json!("abc")));
        assert!(fixes.is_empty());
    }

    #[test]
    fn test_non_string_defaults_are_untouched() {
        let mut schema = node(json!({ "type": "boolean", "default": true }));
        let fixes = sanitize_defaults(&mut schema);
        assert_eq!(schema.default, Some(json!(true)));
        assert!(fixes.is_empty());
    }

    #[test]
    fn test_string_type_keeps_string_default() {
        let mut schema = node(json!({ "type": "string", "default": "true" }));
        let fixes = sanitize_defaults(&mut schema);
        assert_eq!(schema.default, Some(json!("true")));
        assert!(fixes.is_empty());
    }

    #[test]
    fn test_type_union_is_untouched() {
        let mut schema = node(json!({ "type": ["boolean", "string"], "default": "true" }));
        let fixes = sanitize_defaults(&mut schema);
        assert_eq!(schema.default, Some(json!("true")));
        assert!(fixes.is_empty());
    }

    #[test]
    fn test_idempotence() {
        let mut schema = node(json!({
            "type": "object",
            "properties": {
                "flag": { "type": "boolean", "default": true },
                "count": { "type": "integer", "default": 5 },
                "name": { "type": "string", "default": "on" }
            }
        }));
        let before = schema.clone();
        let fixes = sanitize_defaults(&mut schema);
        assert!(fixes.is_empty());
        assert_eq!(schema, before);
    }

    #[test]
    fn test_traversal_is_total() {
        // A mismatch buried five levels deep: allOf -> properties -> items
        // -> definitions must still be corrected.
        let mut schema = node(json!({
            "allOf": [{
                "type": "object",
                "properties": {
                    "steps": {
                        "type": "array",
                        "items": {
                            "definitions": {
                                "leaf": { "type": "boolean", "default": "true" }
                            }
                        }
                    }
                }
            }]
        }));

        let fixes = sanitize_defaults(&mut schema);
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].old, json!("true"));
        assert_eq!(fixes[0].new, json!(true));

        let tree = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            tree["allOf"][0]["properties"]["steps"]["items"]["definitions"]["leaf"]["default"],
            json!(true)
        );
    }

    #[test]
    fn test_tuple_items_are_visited() {
        let mut schema = node(json!({
            "type": "array",
            "items": [
                { "type": "integer", "default": "1" },
                { "type": "integer", "default": "2" }
            ]
        }));
        let fixes = sanitize_defaults(&mut schema);
        assert_eq!(fixes.len(), 2);
    }

    #[test]
    fn test_fix_records_do_not_alter_unrelated_nodes() {
        let mut schema = node(json!({
            "type": "object",
            "properties": {
                "a": { "type": "boolean", "default": "true" },
                "b": { "type": "string", "default": "keep" }
            }
        }));
        let fixes = sanitize_defaults(&mut schema);
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].kind, InstanceType::Boolean);
        let tree = serde_json::to_value(&schema).unwrap();
        assert_eq!(tree["properties"]["b"]["default"], json!("keep"));
    }
}
