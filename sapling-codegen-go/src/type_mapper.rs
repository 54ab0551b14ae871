//! Go type mapper implementation.

use sapling_codegen::TypeMapper;
use sapling_model::{InputModel, ModelKind, ModelNode, TypeTag};

use crate::GO_NAMING;

/// Go type mapper implementation.
///
/// Maps model nodes to Go type syntax. Declared structs and enums map to
/// their type name; anything without a Go equivalent maps to `interface{}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn any_type(&self) -> &'static str {
        "interface{}"
    }

    fn map_scalar(&self, tag: TypeTag) -> Option<&'static str> {
        match tag {
            TypeTag::String => Some("string"),
            TypeTag::Integer => Some("int"),
            TypeTag::Number => Some("float64"),
            TypeTag::Boolean => Some("bool"),
            _ => None,
        }
    }

    fn map_array(&self, element: &str) -> String {
        format!("[]{}", element)
    }

    fn map_dictionary(&self, value: &str) -> String {
        format!("map[string]{}", value)
    }

    fn map_optional(&self, inner: &str) -> String {
        format!("*{}", inner)
    }
}

impl GoTypeMapper {
    /// Render the Go type of a node, resolving references through `input`.
    pub fn render_type(&self, node: &ModelNode, input: &InputModel) -> String {
        self.render_node(node, input, &mut Vec::new())
    }

    fn render_node<'a>(
        &self,
        node: &'a ModelNode,
        input: &'a InputModel,
        visiting: &mut Vec<&'a str>,
    ) -> String {
        if node.reference.is_some() {
            return self.render_reference(node, input, visiting);
        }

        if node.kind() != ModelKind::Other {
            if let Some(name) = node.id.as_deref().map(|id| GO_NAMING.type_name(id)) {
                if !name.is_empty() {
                    return name;
                }
            }
        }

        match node.single_type() {
            Some(tag) => self.render_tag_inner(tag, node, input, visiting),
            None => self.any_type().to_string(),
        }
    }

    /// Render a reference node as the target's type name.
    fn render_reference<'a>(
        &self,
        node: &'a ModelNode,
        input: &'a InputModel,
        visiting: &mut Vec<&'a str>,
    ) -> String {
        let Some(target) = node.reference.as_deref() else {
            return self.any_type().to_string();
        };
        let name = GO_NAMING.type_name(target);

        match input.resolve(node) {
            // Aliases of non-struct, non-enum models render their type inline
            Some(model) if model.kind() == ModelKind::Other && !visiting.contains(&target) => {
                visiting.push(target);
                let rendered = self.render_node(model, input, visiting);
                visiting.pop();
                rendered
            }
            _ if name.is_empty() => self.any_type().to_string(),
            _ => name,
        }
    }

    fn render_tag_inner<'a>(
        &self,
        tag: TypeTag,
        node: &'a ModelNode,
        input: &'a InputModel,
        visiting: &mut Vec<&'a str>,
    ) -> String {
        if let Some(scalar) = self.map_scalar(tag) {
            return scalar.to_string();
        }

        match tag {
            TypeTag::Object => match node.additional_properties.as_deref() {
                Some(values) if node.properties.is_empty() => {
                    let value = self.render_node(values, input, visiting);
                    self.map_dictionary(&value)
                }
                _ => self.map_dictionary(self.any_type()),
            },
            TypeTag::Array => {
                let element = match node.items.as_deref() {
                    Some(items) => self.render_node(items, input, visiting),
                    None => self.any_type().to_string(),
                };
                self.map_array(&element)
            }
            TypeTag::Tuple => {
                let element = self.common_type(&node.tuple_items, input, visiting);
                self.map_array(&element)
            }
            TypeTag::Union => self.common_type(&node.variants, input, visiting),
            TypeTag::Reference => self.render_reference(node, input, visiting),
            _ => self.any_type().to_string(),
        }
    }

    /// The type shared by every node, or `interface{}` if they differ.
    fn common_type<'a>(
        &self,
        nodes: &'a [ModelNode],
        input: &'a InputModel,
        visiting: &mut Vec<&'a str>,
    ) -> String {
        let mut rendered = nodes.iter().map(|n| self.render_node(n, input, visiting));
        let Some(first) = rendered.next() else {
            return self.any_type().to_string();
        };
        let all_same = rendered.all(|ty| ty == first);
        if all_same {
            first
        } else {
            self.any_type().to_string()
        }
    }
}
