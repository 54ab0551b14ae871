//! Index of declared models.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ModelKind, ModelNode, context::ContextNamer};

/// All declared models of one processed document, keyed by identifier.
///
/// Insertion order is the order in which models are generated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputModel {
    #[serde(default)]
    pub models: IndexMap<String, ModelNode>,
}

impl InputModel {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model under its own identifier.
    ///
    /// Anonymous models are ignored; they can only be rendered through a
    /// declared parent.
    pub fn with_model(mut self, model: ModelNode) -> Self {
        self.insert(model);
        self
    }

    /// Add a model under its own identifier, returning `false` if it has none.
    pub fn insert(&mut self, model: ModelNode) -> bool {
        match model.id.clone() {
            Some(id) => {
                self.models.insert(id, model);
                true
            }
            None => false,
        }
    }

    /// Look up a declared model.
    pub fn get(&self, id: &str) -> Option<&ModelNode> {
        self.models.get(id)
    }

    /// Follow a reference node to its target, if the target is declared.
    pub fn resolve(&self, node: &ModelNode) -> Option<&ModelNode> {
        node.reference.as_deref().and_then(|id| self.get(id))
    }

    /// Number of declared models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// A copy of the index in which every anonymous nested struct or enum
    /// carries an identifier derived from its usage context.
    ///
    /// A `geo` object declared inline on `address` becomes `address_geo`.
    pub fn with_context_names(&self) -> InputModel {
        let mut namer = ContextNamer::new(self);
        let mut named = self.clone();
        for model in named.models.values_mut() {
            namer.name_children(model);
        }
        named
    }

    /// A copy of `model` with its anonymous nested structs and enums named
    /// the way [`with_context_names`](Self::with_context_names) names them.
    pub fn name_nested(&self, model: &ModelNode) -> ModelNode {
        let mut named = model.clone();
        ContextNamer::new(self).name_children(&mut named);
        named
    }

    /// Every model that should be rendered, in generation order.
    ///
    /// Walks each declared model depth-first. Nested nodes are included when
    /// they carry an identifier and render as a struct or an enum. Each
    /// identifier appears once; the index entry wins over a nested copy.
    pub fn reachable_models(&self) -> Vec<&ModelNode> {
        let mut seen: HashSet<&str> = self.models.keys().map(String::as_str).collect();
        let mut out = Vec::new();

        for model in self.models.values() {
            out.push(model);
            collect_nested(model, &mut seen, &mut out);
        }

        out
    }
}

fn collect_nested<'a>(
    node: &'a ModelNode,
    seen: &mut HashSet<&'a str>,
    out: &mut Vec<&'a ModelNode>,
) {
    for child in node.children() {
        if let Some(id) = child.id.as_deref() {
            if child.kind() != ModelKind::Other && seen.insert(id) {
                out.push(child);
            }
        }
        collect_nested(child, seen, out);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::TypeTag;

    fn ids<'a>(models: &[&'a ModelNode]) -> Vec<&'a str> {
        models.iter().filter_map(|m| m.id.as_deref()).collect()
    }

    #[test]
    fn test_insert_requires_identifier() {
        let mut input = InputModel::new();
        assert!(!input.insert(ModelNode::of_type(TypeTag::String)));
        assert!(input.insert(ModelNode::of_type(TypeTag::String).with_id("name")));
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn test_resolve_reference() {
        let input = InputModel::new()
            .with_model(ModelNode::of_type(TypeTag::String).with_id("status"));
        let node = ModelNode::reference_to("status");
        assert_eq!(input.resolve(&node).and_then(|m| m.id.as_deref()), Some("status"));
        assert!(input.resolve(&ModelNode::reference_to("missing")).is_none());
    }

    #[test]
    fn test_reachable_models_includes_nested_declared() {
        let other = ModelNode::of_type(TypeTag::Object)
            .with_id("OtherModel")
            .with_property("street_name", ModelNode::of_type(TypeTag::String));
        let address = ModelNode::of_type(TypeTag::Object)
            .with_id("Address")
            .with_property("other_model", other)
            .with_property(
                "alias",
                ModelNode::of_type(TypeTag::String).with_id("Alias"),
            );
        let input = InputModel::new().with_model(address);

        assert_eq!(ids(&input.reachable_models()), ["Address", "OtherModel"]);
    }

    #[test]
    fn test_reachable_models_includes_context_named() {
        let address = ModelNode::of_type(TypeTag::Object)
            .with_id("address")
            .with_property(
                "geo",
                ModelNode::of_type(TypeTag::Object)
                    .with_property("lat", ModelNode::of_type(TypeTag::Number)),
            );
        let input = InputModel::new().with_model(address);

        assert_eq!(ids(&input.reachable_models()), ["address"]);
        assert_eq!(
            ids(&input.with_context_names().reachable_models()),
            ["address", "address_geo"]
        );
    }

    #[test]
    fn test_reachable_models_deduplicates() {
        let status = ModelNode::of_type(TypeTag::String)
            .with_id("status")
            .with_enum_values([json!("pending")]);
        let a = ModelNode::of_type(TypeTag::Object)
            .with_id("a")
            .with_property("status", status.clone());
        let b = ModelNode::of_type(TypeTag::Object)
            .with_id("b")
            .with_property("status", status.clone());
        let input = InputModel::new().with_model(a).with_model(b).with_model(status);

        assert_eq!(ids(&input.reachable_models()), ["a", "b", "status"]);
    }

    #[test]
    fn test_deserialize_index() {
        let input: InputModel = serde_json::from_value(json!({
            "models": {
                "status": { "$id": "status", "type": "string", "enum": ["a", "b"] }
            }
        }))
        .unwrap();
        assert_eq!(input.get("status").map(ModelNode::kind), Some(ModelKind::Enum));
    }
}
