//! Model nodes of the intermediate tree.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ModelType, TypeTag};

/// How a model node is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Composite type with named fields.
    Struct,
    /// Enumerated type with named constants.
    Enum,
    /// Anything else (primitive aliases, arrays, unions).
    Other,
}

impl ModelKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Struct => "struct",
            ModelKind::Enum => "enum",
            ModelKind::Other => "other",
        }
    }
}

/// One declared or anonymous type in the intermediate tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelNode {
    /// Stable name; `None` for anonymous nodes.
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Type classification; `None` when the processor could not decide one.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<ModelType>,

    /// Declared fields, in output order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, ModelNode>,

    /// Names of required fields.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub required: BTreeSet<String>,

    /// Schema for keys not declared in `properties`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<ModelNode>>,

    /// Schemas for keys matching a pattern, keyed by the pattern.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub pattern_properties: IndexMap<String, ModelNode>,

    /// Element schema of an array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ModelNode>>,

    /// Positional element schemas of a tuple.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tuple_items: Vec<ModelNode>,

    /// Alternatives of a union.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ModelNode>,

    /// Identifier of the referenced model.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Allowed literal values, in declaration order.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<serde_json::Value>>,
}

impl ModelNode {
    /// Create an anonymous node of a single type.
    pub fn of_type(tag: TypeTag) -> Self {
        Self {
            ty: Some(ModelType::Single(tag)),
            ..Self::default()
        }
    }

    /// Create an anonymous reference to a declared model.
    pub fn reference_to(id: impl Into<String>) -> Self {
        Self {
            ty: Some(ModelType::Single(TypeTag::Reference)),
            reference: Some(id.into()),
            ..Self::default()
        }
    }

    /// Set the identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a declared field.
    pub fn with_property(mut self, name: impl Into<String>, node: ModelNode) -> Self {
        self.properties.insert(name.into(), node);
        self
    }

    /// Mark a field as required.
    pub fn with_required(mut self, name: impl Into<String>) -> Self {
        self.required.insert(name.into());
        self
    }

    /// Set the additional-properties schema.
    pub fn with_additional_properties(mut self, node: ModelNode) -> Self {
        self.additional_properties = Some(Box::new(node));
        self
    }

    /// Add a pattern-properties schema.
    pub fn with_pattern_property(mut self, pattern: impl Into<String>, node: ModelNode) -> Self {
        self.pattern_properties.insert(pattern.into(), node);
        self
    }

    /// Set the array element schema.
    pub fn with_items(mut self, node: ModelNode) -> Self {
        self.items = Some(Box::new(node));
        self
    }

    /// Set the enumerated values.
    pub fn with_enum_values(mut self, values: impl IntoIterator<Item = serde_json::Value>) -> Self {
        self.enum_values = Some(values.into_iter().collect());
        self
    }

    /// Decide how this node renders.
    ///
    /// Enum values take priority over the type tag, so a node carrying both
    /// `enum` and object properties is an enum.
    pub fn kind(&self) -> ModelKind {
        if self.enum_values.is_some() {
            ModelKind::Enum
        } else if self.is_object() {
            ModelKind::Struct
        } else {
            ModelKind::Other
        }
    }

    /// Check whether an anonymous occurrence of this node needs a declaration
    /// of its own.
    ///
    /// Enums always do. Objects do when they declare properties; objects
    /// without properties render inline as dictionaries.
    pub fn needs_declaration(&self) -> bool {
        match self.kind() {
            ModelKind::Enum => true,
            ModelKind::Struct => !self.properties.is_empty(),
            ModelKind::Other => false,
        }
    }

    /// Check whether the type includes `object`.
    pub fn is_object(&self) -> bool {
        self.ty.as_ref().is_some_and(|ty| ty.contains(TypeTag::Object))
    }

    /// Check whether a field is listed as required.
    pub fn is_required(&self, field: &str) -> bool {
        self.required.contains(field)
    }

    /// The single concrete type tag, if any.
    pub fn single_type(&self) -> Option<TypeTag> {
        self.ty.as_ref().and_then(ModelType::single)
    }

    /// Direct child nodes, in a stable order.
    pub fn children(&self) -> impl Iterator<Item = &ModelNode> {
        self.properties
            .values()
            .chain(self.additional_properties.as_deref())
            .chain(self.pattern_properties.values())
            .chain(self.items.as_deref())
            .chain(self.tuple_items.iter())
            .chain(self.variants.iter())
    }
}
