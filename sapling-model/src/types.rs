//! Type classification of model nodes.

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

/// Abstract type tag carried by a model node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
    Tuple,
    Union,
    Reference,
    Unconstrained,
}

impl TypeTag {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Integer => "integer",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Object => "object",
            TypeTag::Array => "array",
            TypeTag::Tuple => "tuple",
            TypeTag::Union => "union",
            TypeTag::Reference => "reference",
            TypeTag::Unconstrained => "unconstrained",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` of a model node: either one tag or a mixed set of tags.
///
/// Deserializes from either `"string"` or `["string", "number"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelType {
    Single(TypeTag),
    Mixed(BTreeSet<TypeTag>),
}

impl ModelType {
    /// Build a mixed type, collapsing a one-element set to [`ModelType::Single`].
    pub fn mixed(tags: impl IntoIterator<Item = TypeTag>) -> Self {
        let tags: BTreeSet<TypeTag> = tags.into_iter().collect();
        if tags.len() == 1 {
            if let Some(tag) = tags.first() {
                return ModelType::Single(*tag);
            }
        }
        ModelType::Mixed(tags)
    }

    /// The single concrete tag, if this is not a mixed type.
    pub fn single(&self) -> Option<TypeTag> {
        match self {
            ModelType::Single(tag) => Some(*tag),
            ModelType::Mixed(_) => None,
        }
    }

    /// Check whether the given tag is part of this type.
    pub fn contains(&self, tag: TypeTag) -> bool {
        match self {
            ModelType::Single(t) => *t == tag,
            ModelType::Mixed(tags) => tags.contains(&tag),
        }
    }
}

impl From<TypeTag> for ModelType {
    fn from(tag: TypeTag) -> Self {
        ModelType::Single(tag)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_type_tag_as_str() {
        assert_eq!(TypeTag::String.as_str(), "string");
        assert_eq!(TypeTag::Unconstrained.as_str(), "unconstrained");
        assert_eq!(TypeTag::Tuple.to_string(), "tuple");
    }

    #[test]
    fn test_model_type_deserialize_single_and_mixed() {
        let single: ModelType = serde_json::from_value(json!("string")).unwrap();
        assert_eq!(single, ModelType::Single(TypeTag::String));

        let mixed: ModelType = serde_json::from_value(json!(["string", "number"])).unwrap();
        assert!(mixed.contains(TypeTag::Number));
        assert!(mixed.single().is_none());
    }

    #[test]
    fn test_mixed_collapses_single_tag() {
        assert_eq!(
            ModelType::mixed([TypeTag::Boolean, TypeTag::Boolean]),
            ModelType::Single(TypeTag::Boolean)
        );
    }
}
