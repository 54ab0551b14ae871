//! Identifiers for anonymous nested models, derived from where they are used.

use std::collections::HashSet;

use crate::{InputModel, ModelNode};

/// Assigns identifiers to anonymous nested models.
///
/// The identifier of a nested node is its context joined with its position:
/// the property key, `additionalProperties`, `<pattern>PatternProperties`,
/// `item` for array elements, `item<n>` for tuple positions and
/// `variant<n>` for union alternatives. The context is the nearest
/// identified ancestor, extended by every anonymous container in between.
/// An identifier that is already taken gets a numeric suffix.
pub(crate) struct ContextNamer {
    taken: HashSet<String>,
}

impl ContextNamer {
    pub(crate) fn new(input: &InputModel) -> Self {
        let mut taken = HashSet::new();
        for model in input.models.values() {
            collect_ids(model, &mut taken);
        }
        Self { taken }
    }

    /// Name the anonymous descendants of an identified node.
    ///
    /// An anonymous node provides no context, so nothing below it is named.
    pub(crate) fn name_children(&mut self, node: &mut ModelNode) {
        if let Some(id) = node.id.clone() {
            self.taken.insert(id.clone());
            self.name_nested(&id, node);
        }
    }

    fn name_nested(&mut self, context: &str, node: &mut ModelNode) {
        for_each_position(node, |segment, child| {
            self.name_child(format!("{context}_{segment}"), child);
        });
    }

    fn name_child(&mut self, context: String, child: &mut ModelNode) {
        if child.id.is_none() && child.needs_declaration() {
            child.id = Some(self.claim(&context));
        }
        let context = child.id.clone().unwrap_or(context);
        self.name_nested(&context, child);
    }

    fn claim(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut suffix = 2;
        while !self.taken.insert(candidate.clone()) {
            candidate = format!("{base}{suffix}");
            suffix += 1;
        }
        candidate
    }
}

fn collect_ids(node: &ModelNode, taken: &mut HashSet<String>) {
    if let Some(id) = &node.id {
        taken.insert(id.clone());
    }
    for child in node.children() {
        collect_ids(child, taken);
    }
}

/// Visit direct children with their position segment, in `children()` order.
fn for_each_position(node: &mut ModelNode, mut f: impl FnMut(&str, &mut ModelNode)) {
    for (key, child) in node.properties.iter_mut() {
        f(key, child);
    }
    if let Some(child) = node.additional_properties.as_deref_mut() {
        f("additionalProperties", child);
    }
    for (pattern, child) in node.pattern_properties.iter_mut() {
        f(&format!("{pattern}PatternProperties"), child);
    }
    if let Some(child) = node.items.as_deref_mut() {
        f("item", child);
    }
    for (i, child) in node.tuple_items.iter_mut().enumerate() {
        f(&format!("item{i}"), child);
    }
    for (i, child) in node.variants.iter_mut().enumerate() {
        f(&format!("variant{i}"), child);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::TypeTag;

    fn point() -> ModelNode {
        ModelNode::of_type(TypeTag::Object)
            .with_property("lat", ModelNode::of_type(TypeTag::Number))
            .with_property("lng", ModelNode::of_type(TypeTag::Number))
    }

    fn named(model: ModelNode) -> ModelNode {
        let input = InputModel::new().with_model(model.clone());
        input.name_nested(&model)
    }

    #[test]
    fn test_names_anonymous_property() {
        let address = named(
            ModelNode::of_type(TypeTag::Object)
                .with_id("address")
                .with_property("geo", point()),
        );
        assert_eq!(address.properties["geo"].id.as_deref(), Some("address_geo"));
    }

    #[test]
    fn test_anonymous_containers_extend_context() {
        let route = named(
            ModelNode::of_type(TypeTag::Object).with_id("route").with_property(
                "stops",
                ModelNode::of_type(TypeTag::Array).with_items(point()),
            ),
        );
        let stops = &route.properties["stops"];
        assert!(stops.id.is_none());
        assert_eq!(
            stops.items.as_deref().and_then(|n| n.id.as_deref()),
            Some("route_stops_item")
        );
    }

    #[test]
    fn test_nested_anonymous_models_chain() {
        let address = named(
            ModelNode::of_type(TypeTag::Object).with_id("address").with_property(
                "geo",
                point().with_property(
                    "precision",
                    ModelNode::of_type(TypeTag::String).with_enum_values([json!("exact")]),
                ),
            ),
        );
        let geo = &address.properties["geo"];
        assert_eq!(
            geo.properties["precision"].id.as_deref(),
            Some("address_geo_precision")
        );
    }

    #[test]
    fn test_leaves_dictionaries_and_scalars_anonymous() {
        let extras = named(
            ModelNode::of_type(TypeTag::Object)
                .with_id("extras")
                .with_property("name", ModelNode::of_type(TypeTag::String))
                .with_property(
                    "labels",
                    ModelNode::of_type(TypeTag::Object)
                        .with_additional_properties(ModelNode::of_type(TypeTag::String)),
                ),
        );
        assert!(extras.properties.values().all(|n| n.id.is_none()));
    }

    #[test]
    fn test_taken_identifier_gets_suffix() {
        let address = ModelNode::of_type(TypeTag::Object)
            .with_id("address")
            .with_property("geo", point());
        let input = InputModel::new()
            .with_model(address.clone())
            .with_model(ModelNode::of_type(TypeTag::String).with_id("address_geo"));

        let named = input.name_nested(&address);
        assert_eq!(named.properties["geo"].id.as_deref(), Some("address_geo2"));
    }

    #[test]
    fn test_anonymous_parent_gives_no_context() {
        let input = InputModel::new();
        let anonymous = ModelNode::of_type(TypeTag::Object).with_property("geo", point());
        let named = input.name_nested(&anonymous);
        assert!(named.properties["geo"].id.is_none());
    }

    #[test]
    fn test_naming_is_idempotent() {
        let address = ModelNode::of_type(TypeTag::Object)
            .with_id("address")
            .with_property("geo", point());
        let once = InputModel::new().with_model(address).with_context_names();
        let twice = once.with_context_names();
        assert_eq!(once, twice);
    }
}
