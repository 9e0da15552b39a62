//! Definition title annotator
//!
//! Type compilers name generated types after a definition's `title` when
//! one is present. Deeply nested definitions sharing a dotted key prefix
//! (e.g. `org.example.dsl.Bar`) would otherwise all collapse into
//! degenerate or duplicate names. This pass derives a title from the final
//! dot-separated key segment for every anonymous definition under an
//! array-items schema.

use crate::schema::{Items, SchemaNode};

/// One assigned definition title
#[derive(Debug, Clone, PartialEq)]
pub struct TitleFix {
    /// The full definition key (e.g. `"org.example.Bar"`)
    pub key: String,
    /// The derived title (e.g. `"Bar"`)
    pub title: String,
}

/// Assign a derived title to every untitled definition under
/// `schema.items.definitions`.
///
/// Mutates `schema` in place. Only the definitions of a single-node
/// `items` schema are inspected; the pass is a no-op when `items` is
/// absent, is a tuple, or has no definitions. Definitions that already
/// carry a `title` are left untouched.
pub fn annotate_definition_titles(schema: &mut SchemaNode) -> Vec<TitleFix> {
    let Some(Items::Node(items)) = schema.items.as_mut() else {
        return Vec::new();
    };
    let Some(definitions) = items.definitions.as_mut() else {
        return Vec::new();
    };

    let mut fixes = Vec::new();
    for (key, node) in definitions.iter_mut() {
        if node.title.is_some() {
            continue;
        }
        let title = key.rsplit('.').next().unwrap_or(key).to_string();
        tracing::debug!(%key, %title, "assigned definition title");
        node.title = Some(title.clone());
        fixes.push(TitleFix {
            key: key.clone(),
            title,
        });
    }
    fixes
}
