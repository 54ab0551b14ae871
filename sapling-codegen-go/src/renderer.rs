use std::cell::RefCell;

use sapling_codegen::{DependencyCollector, Indent, RenderError, Result, TypeMapper};
use sapling_core::{json_value_to_string, to_pascal_case};
use sapling_model::{InputModel, ModelNode};
use serde_json::Value;

use crate::{ConstantTyping, GO_NAMING, Generator, GoTypeMapper};

/// Services available to hooks while one model renders.
///
/// A renderer lives for a single render call and owns that call's
/// dependency collector, so concurrent renders never share mutable state.
pub struct GoRenderer<'a> {
    generator: &'a Generator,
    input: &'a InputModel,
    dependencies: RefCell<DependencyCollector>,
}

impl<'a> GoRenderer<'a> {
    pub(crate) fn new(generator: &'a Generator, input: &'a InputModel) -> Self {
        Self {
            generator,
            input,
            dependencies: RefCell::new(DependencyCollector::new()),
        }
    }

    /// Go type name of a model identifier.
    pub fn name_type(&self, id: &str) -> String {
        GO_NAMING.type_name(id)
    }

    /// Exported Go field name of a property key.
    ///
    /// Go derives the name from the key alone; `field` is available to
    /// presets that wrap this convention.
    pub fn name_field(&self, field_name: &str, _field: &ModelNode) -> String {
        GO_NAMING.field_name(field_name)
    }

    /// Go type syntax of a node, resolving references through the input.
    pub fn render_type(&self, node: &ModelNode) -> String {
        self.type_mapper().render_type(node, self.input)
    }

    /// Go type an enum is declared over.
    ///
    /// Scalar tags map to their Go type. Mixed, missing and composite tags
    /// fall back to `interface{}`, as does any enum with a `null` value.
    pub fn enum_backing_type(&self, model: &ModelNode) -> String {
        let mapper = self.type_mapper();
        let nullable = model
            .enum_values
            .as_deref()
            .is_some_and(|values| values.iter().any(Value::is_null));
        if nullable {
            return mapper.any_type().to_string();
        }
        model
            .single_type()
            .and_then(|tag| mapper.map_scalar(tag))
            .unwrap_or(mapper.any_type())
            .to_string()
    }

    /// Constant name of an enum value: the type name followed by the value
    /// in PascalCase.
    pub fn constant_name(&self, type_name: &str, value: &Value) -> String {
        let raw = json_value_to_string(value);
        let (prefix, digits) = match raw.strip_prefix('-') {
            Some(rest) if value.is_number() => ("Minus", rest),
            _ => ("", raw.as_str()),
        };
        let suffix = to_pascal_case(digits);

        if prefix.is_empty() && suffix.is_empty() {
            format!("{type_name}Empty")
        } else {
            format!("{type_name}{prefix}{suffix}")
        }
    }

    /// Record an import needed by the rendered text.
    ///
    /// Returns `false` if the identifier was already recorded.
    pub fn add_dependency(&self, identifier: impl Into<String>) -> bool {
        let added = self.dependencies.borrow_mut().add(identifier);
        if added {
            tracing::debug!(dependencies = self.dependencies.borrow().len(), "added dependency");
        }
        added
    }

    /// Indentation of struct bodies and constant blocks.
    pub fn indent(&self) -> Indent {
        self.generator.options().indent
    }

    pub fn constant_typing(&self) -> ConstantTyping {
        self.generator.options().constant_typing
    }

    pub fn type_mapper(&self) -> &GoTypeMapper {
        self.generator.type_mapper()
    }

    pub fn input(&self) -> &InputModel {
        self.input
    }

    /// Type name of the model being rendered.
    pub(crate) fn model_type_name(&self, model: &ModelNode) -> Result<String> {
        let Some(id) = model.id.as_deref() else {
            return Err(RenderError::UnnameableModel { identifier: None });
        };
        let name = self.name_type(id);
        if name.is_empty() {
            return Err(RenderError::UnnameableModel {
                identifier: Some(id.to_string()),
            });
        }
        Ok(name)
    }

    pub(crate) fn into_dependencies(self) -> Vec<String> {
        self.dependencies.into_inner().into_vec()
    }
}

#[cfg(test)]
mod tests {
    use sapling_model::TypeTag;
    use serde_json::json;

    use super::*;
    use crate::GoOptions;

    #[test]
    fn test_constant_names() {
        let generator = Generator::new(GoOptions::default());
        let input = InputModel::new();
        let renderer = GoRenderer::new(&generator, &input);

        assert_eq!(renderer.constant_name("Status", &json!("pending")), "StatusPending");
        assert_eq!(renderer.constant_name("Status", &json!("in-review")), "StatusInReview");
        assert_eq!(renderer.constant_name("Level", &json!(3)), "Level3");
        assert_eq!(renderer.constant_name("Level", &json!(-3)), "LevelMinus3");
        assert_eq!(renderer.constant_name("Level", &json!(1.5)), "Level15");
        assert_eq!(renderer.constant_name("Flag", &json!(true)), "FlagTrue");
        assert_eq!(renderer.constant_name("Sign", &json!("-")), "SignEmpty");
        assert_eq!(renderer.constant_name("Sign", &json!("")), "SignEmpty");
        assert_eq!(renderer.constant_name("Opt", &json!(null)), "OptNull");
    }

    #[test]
    fn test_name_field_takes_key_and_node() {
        let generator = Generator::default();
        let input = InputModel::new();
        let renderer = GoRenderer::new(&generator, &input);

        let street = ModelNode::of_type(TypeTag::String);
        assert_eq!(renderer.name_field("street_name", &street), "StreetName");
        let geo = ModelNode::of_type(TypeTag::Object).with_id("address_geo");
        assert_eq!(renderer.name_field("geo", &geo), "Geo");
    }

    #[test]
    fn test_enum_backing_type() {
        let generator = Generator::default();
        let input = InputModel::new();
        let renderer = GoRenderer::new(&generator, &input);

        assert_eq!(renderer.enum_backing_type(&ModelNode::of_type(TypeTag::String)), "string");
        assert_eq!(renderer.enum_backing_type(&ModelNode::of_type(TypeTag::Integer)), "int");
        assert_eq!(renderer.enum_backing_type(&ModelNode::of_type(TypeTag::Array)), "interface{}");
        assert_eq!(renderer.enum_backing_type(&ModelNode::default()), "interface{}");

        let nullable =
            ModelNode::of_type(TypeTag::String).with_enum_values([json!("a"), json!(null)]);
        assert_eq!(renderer.enum_backing_type(&nullable), "interface{}");
    }

    #[test]
    fn test_dependencies_deduplicate() {
        let generator = Generator::default();
        let input = InputModel::new();
        let renderer = GoRenderer::new(&generator, &input);

        assert!(renderer.add_dependency("time"));
        assert!(renderer.add_dependency("encoding/json"));
        assert!(!renderer.add_dependency("time"));
        assert_eq!(renderer.into_dependencies(), ["time", "encoding/json"]);
    }

    #[test]
    fn test_model_type_name() {
        let generator = Generator::default();
        let input = InputModel::new();
        let renderer = GoRenderer::new(&generator, &input);

        let named = ModelNode::of_type(TypeTag::Object).with_id("email_verification");
        assert_eq!(renderer.model_type_name(&named).unwrap(), "EmailVerification");

        let anonymous = ModelNode::of_type(TypeTag::Object);
        assert!(matches!(
            renderer.model_type_name(&anonymous),
            Err(RenderError::UnnameableModel { identifier: None })
        ));

        let symbols = ModelNode::of_type(TypeTag::Object).with_id("***");
        assert!(matches!(
            renderer.model_type_name(&symbols),
            Err(RenderError::UnnameableModel { identifier: Some(_) })
        ));
    }
}
