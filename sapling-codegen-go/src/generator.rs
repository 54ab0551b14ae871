use sapling_codegen::{
    CodeBuilder, CompleteModelsConfig, ModelGenerator, OutputModel, PresetStack, RenderError,
    RenderOutput, Result,
};
use sapling_model::{InputModel, ModelKind, ModelNode};

use crate::{
    EnumPreset, GO_NAMING, GoOptions, GoRenderer, GoTypeMapper, StructPreset, enum_renderer,
    render_imports, struct_renderer,
};

/// Go model generator.
///
/// Built once per configuration and shared by every render call; the preset
/// stacks are read-only after construction.
#[derive(Debug)]
pub struct Generator {
    options: GoOptions,
    type_mapper: GoTypeMapper,
    struct_presets: PresetStack<StructPreset>,
    enum_presets: PresetStack<EnumPreset>,
}

impl Generator {
    pub fn new(options: GoOptions) -> Self {
        let mut struct_presets = PresetStack::new(struct_renderer::default_preset());
        let mut enum_presets = PresetStack::new(enum_renderer::default_preset());

        for preset in &options.presets {
            if let Some(structure) = &preset.structure {
                struct_presets.push(structure.clone());
            }
            if let Some(enumeration) = &preset.enumeration {
                enum_presets.push(enumeration.clone());
            }
        }

        tracing::debug!(
            struct_stages = struct_presets.stage_count(),
            enum_stages = enum_presets.stage_count(),
            "built preset stacks"
        );

        Self {
            options,
            type_mapper: GoTypeMapper,
            struct_presets,
            enum_presets,
        }
    }

    pub fn options(&self) -> &GoOptions {
        &self.options
    }

    pub fn type_mapper(&self) -> &GoTypeMapper {
        &self.type_mapper
    }

    /// Render a model as a Go struct.
    ///
    /// Anonymous nested structs and enums are typed by their context name,
    /// e.g. `AddressGeo` for an inline `geo` object of `address`.
    #[tracing::instrument(skip_all, fields(model = model.id.as_deref().unwrap_or("<anonymous>")))]
    pub fn render_struct(&self, model: &ModelNode, input: &InputModel) -> Result<RenderOutput> {
        let model = input.name_nested(model);
        let renderer = GoRenderer::new(self, input);
        let text = struct_renderer::render(&renderer, &self.struct_presets, &model)?;
        Ok(RenderOutput::new(text, renderer.into_dependencies()))
    }

    /// Render a model as a Go named type with grouped constants.
    #[tracing::instrument(skip_all, fields(model = model.id.as_deref().unwrap_or("<anonymous>")))]
    pub fn render_enum(&self, model: &ModelNode, input: &InputModel) -> Result<RenderOutput> {
        let model = input.name_nested(model);
        let renderer = GoRenderer::new(self, input);
        let text = enum_renderer::render(&renderer, &self.enum_presets, &model)?;
        Ok(RenderOutput::new(text, renderer.into_dependencies()))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GoOptions::default())
    }
}

impl ModelGenerator for Generator {
    fn language(&self) -> &'static str {
        "go"
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn name_type(&self, id: &str) -> String {
        GO_NAMING.type_name(id)
    }

    fn file_stem(&self, type_name: &str) -> String {
        GO_NAMING.file_name(type_name)
    }

    fn render(&self, model: &ModelNode, input: &InputModel) -> Result<RenderOutput> {
        match model.kind() {
            ModelKind::Struct => self.render_struct(model, input),
            ModelKind::Enum => self.render_enum(model, input),
            kind @ ModelKind::Other => Err(RenderError::UnsupportedModelKind {
                model: model.id.clone().unwrap_or_else(|| "<anonymous>".to_string()),
                kind: kind.as_str(),
            }),
        }
    }

    fn wrap_complete_model(&self, output: &OutputModel, config: &CompleteModelsConfig) -> String {
        let mut builder = CodeBuilder::new(self.options.indent);
        builder
            .push_line(&format!("package {}", config.package_name))
            .push_blank();

        if !output.dependencies.is_empty() {
            builder
                .push_text(&render_imports(&output.dependencies, self.options.indent))
                .push_blank();
        }

        builder.push_text(&output.text);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use sapling_model::TypeTag;
    use serde_json::json;

    use super::*;
    use crate::{GoPreset, StructPreset};

    #[test]
    fn test_render_dispatches_by_kind() {
        let generator = Generator::default();
        let input = InputModel::new();

        let object = ModelNode::of_type(TypeTag::Object).with_id("pet");
        assert!(generator.render(&object, &input).unwrap().text.contains("type Pet struct"));

        let values = ModelNode::of_type(TypeTag::String)
            .with_id("color")
            .with_enum_values([json!("red")]);
        assert!(generator.render(&values, &input).unwrap().text.contains("type Color string"));
    }

    #[test]
    fn test_render_struct_names_anonymous_fields_by_context() {
        let address = ModelNode::of_type(TypeTag::Object).with_id("address").with_property(
            "geo",
            ModelNode::of_type(TypeTag::Object)
                .with_property("lat", ModelNode::of_type(TypeTag::Number)),
        );

        let text = Generator::default()
            .render_struct(&address, &InputModel::new())
            .unwrap()
            .text;
        assert!(text.contains("\tGeo *AddressGeo `json:\"geo,omitempty\"`"));
    }

    #[test]
    fn test_render_rejects_other_kind() {
        let generator = Generator::default();
        let alias = ModelNode::of_type(TypeTag::String).with_id("email");

        match generator.render(&alias, &InputModel::new()).unwrap_err() {
            RenderError::UnsupportedModelKind { model, kind } => {
                assert_eq!(model, "email");
                assert_eq!(kind, "other");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_presets_stack_per_kind() {
        let generator = Generator::new(
            GoOptions::new()
                .preset(GoPreset::new().with_struct(StructPreset::new()))
                .preset(GoPreset::new()),
        );
        assert_eq!(generator.struct_presets.stage_count(), 2);
        assert_eq!(generator.enum_presets.stage_count(), 1);
    }

    #[test]
    fn test_wrap_complete_model() {
        let generator = Generator::default();
        let output = OutputModel {
            model_id: "event".to_string(),
            model_name: "Event".to_string(),
            file_name: "event.go".to_string(),
            text: "type Event struct {\n\tAt time.Time\n}".to_string(),
            dependencies: vec!["time".to_string()],
        };

        assert_eq!(
            generator.wrap_complete_model(&output, &CompleteModelsConfig::new("events")),
            "package events\n\nimport (\n\t\"time\"\n)\n\ntype Event struct {\n\tAt time.Time\n}\n"
        );
    }

    #[test]
    fn test_wrap_complete_model_without_imports() {
        let generator = Generator::default();
        let output = OutputModel {
            model_id: "pet".to_string(),
            model_name: "Pet".to_string(),
            file_name: "pet.go".to_string(),
            text: "type Pet struct {\n}".to_string(),
            dependencies: Vec::new(),
        };

        assert_eq!(
            generator.wrap_complete_model(&output, &CompleteModelsConfig::new("pets")),
            "package pets\n\ntype Pet struct {\n}\n"
        );
    }
}
