//! Schema compiler boundary
//!
//! The schema→type compiler is a narrow, swappable seam: one method,
//! schema in, declaration source out, so tests can substitute a fake
//! without depending on real emitter behavior. [`DeclarationCompiler`] is
//! the built-in implementation producing TypeScript declaration text.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::error::Result;
use crate::schema::{InstanceType, Items, SchemaNode, TypeKeyword};

/// The compiler seam: one named schema in, source text out
pub trait SchemaCompiler {
    fn compile(&self, schema: &SchemaNode, name: &str) -> Result<String>;
}

/// Built-in TypeScript declaration emitter
///
/// Declarations are named after a schema's `title` when present, falling
/// back to the schema name or the final dot-segment of a definition key.
/// This is why the title annotator runs before compilation: untitled
/// nested definitions would otherwise collapse into duplicate names.
#[derive(Debug, Clone, Default)]
pub struct DeclarationCompiler;

impl SchemaCompiler for DeclarationCompiler {
    fn compile(&self, schema: &SchemaNode, name: &str) -> Result<String> {
        Ok(Emitter::new(schema).emit(name))
    }
}

struct Emitter<'a> {
    root: &'a SchemaNode,
    /// `$ref` pointer -> declared type name
    refs: HashMap<String, String>,
}

impl<'a> Emitter<'a> {
    fn new(root: &'a SchemaNode) -> Self {
        let mut refs = HashMap::new();
        if let Some(definitions) = &root.definitions {
            for (key, node) in definitions {
                refs.insert(
                    format!("#/definitions/{}", key),
                    declaration_name(key, node),
                );
            }
        }
        if let Some(Items::Node(items)) = &root.items {
            if let Some(definitions) = &items.definitions {
                for (key, node) in definitions {
                    refs.insert(
                        format!("#/items/definitions/{}", key),
                        declaration_name(key, node),
                    );
                }
            }
        }
        Self { root, refs }
    }

    fn emit(&self, name: &str) -> String {
        let mut out = String::from("/* Generated declarations. Do not edit. */\n\n");
        let root_name = match &self.root.title {
            Some(title) => pascal_case(title),
            None => pascal_case(name),
        };

        let mut seen = HashSet::new();
        seen.insert(root_name.clone());
        self.emit_declaration(&mut out, &root_name, self.root);

        if let Some(definitions) = &self.root.definitions {
            for (key, node) in definitions {
                self.emit_definition(&mut out, key, node, &mut seen);
            }
        }
        if let Some(Items::Node(items)) = &self.root.items {
            if let Some(definitions) = &items.definitions {
                for (key, node) in definitions {
                    self.emit_definition(&mut out, key, node, &mut seen);
                }
            }
        }
        out
    }

    fn emit_definition(
        &self,
        out: &mut String,
        key: &str,
        node: &SchemaNode,
        seen: &mut HashSet<String>,
    ) {
        let name = declaration_name(key, node);
        // Keep the first declaration when names collide
        if !seen.insert(name.clone()) {
            return;
        }
        self.emit_declaration(out, &name, node);
    }

    fn emit_declaration(&self, out: &mut String, name: &str, node: &SchemaNode) {
        if let Some(description) = node.description() {
            out.push_str(&format!("/** {} */\n", description.replace('\n', " ")));
        }
        if is_plain_object(node) {
            out.push_str(&format!("export interface {} {{\n", name));
            let required = node.required_properties();
            if let Some(properties) = &node.properties {
                for (field, child) in properties {
                    let marker = if required.contains(&field.as_str()) { "" } else { "?" };
                    out.push_str(&format!(
                        "  {}{}: {};\n",
                        field_key(field),
                        marker,
                        self.type_expr(child)
                    ));
                }
            }
            out.push_str("}\n\n");
        } else {
            out.push_str(&format!(
                "export type {} = {};\n\n",
                name,
                self.type_expr(node)
            ));
        }
    }

    fn type_expr(&self, node: &SchemaNode) -> String {
        if let Some(pointer) = node.reference() {
            return self
                .refs
                .get(pointer)
                .cloned()
                .unwrap_or_else(|| "unknown".to_string());
        }
        if let Some(values) = node.enum_values() {
            let literals: Vec<String> = values.iter().map(Value::to_string).collect();
            return literals.join(" | ");
        }
        if let Some(list) = &node.all_of {
            return self.combinator_expr(list, " & ");
        }
        if let Some(list) = &node.any_of {
            return self.combinator_expr(list, " | ");
        }
        if let Some(list) = &node.one_of {
            return self.combinator_expr(list, " | ");
        }
        match &node.kind {
            Some(TypeKeyword::Single(kind)) => self.primitive_expr(*kind, node),
            Some(TypeKeyword::Union(kinds)) => kinds
                .iter()
                .map(|kind| self.primitive_expr(*kind, node))
                .collect::<Vec<_>>()
                .join(" | "),
            None => "unknown".to_string(),
        }
    }

    fn combinator_expr(&self, list: &[SchemaNode], separator: &str) -> String {
        if list.len() == 1 {
            return self.type_expr(&list[0]);
        }
        list.iter()
            .map(|child| {
                let expr = self.type_expr(child);
                if expr.contains(' ') {
                    format!("({})", expr)
                } else {
                    expr
                }
            })
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn primitive_expr(&self, kind: InstanceType, node: &SchemaNode) -> String {
        match kind {
            InstanceType::String => "string".to_string(),
            InstanceType::Boolean => "boolean".to_string(),
            InstanceType::Number | InstanceType::Integer => "number".to_string(),
            InstanceType::Null => "null".to_string(),
            InstanceType::Array => match &node.items {
                Some(Items::Node(items)) => {
                    let expr = self.type_expr(items);
                    if expr.chars().all(|c| c.is_ascii_alphanumeric()) {
                        format!("{}[]", expr)
                    } else {
                        format!("({})[]", expr)
                    }
                }
                Some(Items::Tuple(items)) => {
                    let members: Vec<String> =
                        items.iter().map(|child| self.type_expr(child)).collect();
                    format!("[{}]", members.join(", "))
                }
                None => "unknown[]".to_string(),
            },
            InstanceType::Object => self.object_expr(node),
        }
    }

    fn object_expr(&self, node: &SchemaNode) -> String {
        let Some(properties) = &node.properties else {
            return "Record<string, unknown>".to_string();
        };
        if properties.is_empty() {
            return "Record<string, unknown>".to_string();
        }
        let required = node.required_properties();
        let fields: Vec<String> = properties
            .iter()
            .map(|(field, child)| {
                let marker = if required.contains(&field.as_str()) { "" } else { "?" };
                format!("{}{}: {}", field_key(field), marker, self.type_expr(child))
            })
            .collect();
        format!("{{ {} }}", fields.join("; "))
    }
}

/// An object schema with named properties and no combinators, refs, or
/// enum: rendered as an `interface` rather than a type alias.
fn is_plain_object(node: &SchemaNode) -> bool {
    node.single_type() == Some(InstanceType::Object)
        && node.properties.is_some()
        && node.all_of.is_none()
        && node.any_of.is_none()
        && node.one_of.is_none()
        && node.reference().is_none()
        && node.enum_values().is_none()
}

/// Declared name for a definition: its title when present, otherwise the
/// final dot-segment of its key.
fn declaration_name(key: &str, node: &SchemaNode) -> String {
    match &node.title {
        Some(title) => pascal_case(title),
        None => pascal_case(key.rsplit('.').next().unwrap_or(key)),
    }
}

fn pascal_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut upper_next = true;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if upper_next {
                out.extend(c.to_uppercase());
                upper_next = false;
            } else {
                out.push(c);
            }
        } else {
            upper_next = true;
        }
    }
    out
}

fn field_key(name: &str) -> String {
    let valid = !name.is_empty()
        && name
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if valid {
        name.to_string()
    } else {
        format!("{:?}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compile(value: serde_json::Value, name: &str) -> String {
        let schema: SchemaNode = serde_json::from_value(value).unwrap();
        DeclarationCompiler.compile(&schema, name).unwrap()
    }

    #[test]
    fn test_object_schema_becomes_interface() {
        let source = compile(
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string" },
                    "retries": { "type": "integer" }
                },
                "required": ["id"]
            }),
            "route",
        );

        assert!(source.contains("export interface Route {"));
        assert!(source.contains("  id: string;"));
        assert!(source.contains("  retries?: number;"));
    }

    #[test]
    fn test_title_wins_over_schema_name() {
        let source = compile(json!({ "title": "Named Thing", "type": "object" }), "other");
        assert!(source.contains("export type NamedThing"));
    }

    #[test]
    fn test_enum_becomes_literal_union() {
        let source = compile(
            json!({ "type": "string", "enum": ["direct", "seda"] }),
            "component",
        );
        assert!(source.contains("export type Component = \"direct\" | \"seda\";"));
    }

    #[test]
    fn test_combinators() {
        let source = compile(
            json!({
                "anyOf": [{ "type": "string" }, { "type": "number" }]
            }),
            "scalar",
        );
        assert!(source.contains("export type Scalar = string | number;"));
    }

    #[test]
    fn test_items_definitions_are_declared_and_referenced() {
        let source = compile(
            json!({
                "type": "array",
                "items": {
                    "$ref": "#/items/definitions/org.example.Step",
                    "definitions": {
                        "org.example.Step": {
                            "title": "Step",
                            "type": "object",
                            "properties": { "uri": { "type": "string" } }
                        }
                    }
                }
            }),
            "flow",
        );

        assert!(source.contains("export type Flow = Step[];"));
        assert!(source.contains("export interface Step {"));
    }

    #[test]
    fn test_untitled_definition_uses_last_key_segment() {
        let source = compile(
            json!({
                "type": "object",
                "definitions": {
                    "org.example.Bean": { "type": "object", "properties": { "name": { "type": "string" } } }
                }
            }),
            "config",
        );
        assert!(source.contains("export interface Bean {"));
    }

    #[test]
    fn test_tuple_items() {
        let source = compile(
            json!({
                "type": "array",
                "items": [{ "type": "string" }, { "type": "number" }]
            }),
            "pair",
        );
        assert!(source.contains("export type Pair = [string, number];"));
    }
}
