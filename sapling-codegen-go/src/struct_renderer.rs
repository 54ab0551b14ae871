use std::collections::HashMap;

use sapling_codegen::{CodeBuilder, HookName, PresetStack, RenderError, Result, TypeMapper};
use sapling_model::ModelNode;

use crate::{FieldContext, FieldType, GoRenderer, RenderContext, StructPreset};

/// Name of the field synthesized from `additionalProperties`.
const ADDITIONAL_PROPERTIES: &str = "additionalProperties";

/// One field of the struct body, before any hook runs.
struct StructField<'a> {
    name: String,
    node: &'a ModelNode,
    field_type: FieldType,
}

/// Declared fields first, then the additional-properties field, then one
/// field per pattern.
fn classify_fields(model: &ModelNode) -> Vec<StructField<'_>> {
    let declared = model.properties.iter().map(|(name, node)| StructField {
        name: name.clone(),
        node,
        field_type: FieldType::Property,
    });
    let additional = model
        .additional_properties
        .as_deref()
        .map(|node| StructField {
            name: ADDITIONAL_PROPERTIES.to_string(),
            node,
            field_type: FieldType::AdditionalProperty,
        });
    let patterns = model.pattern_properties.iter().map(|(pattern, node)| StructField {
        name: format!("{pattern}PatternProperties"),
        node,
        field_type: FieldType::PatternProperties,
    });

    declared.chain(additional).chain(patterns).collect()
}

fn check_collisions(
    renderer: &GoRenderer<'_>,
    type_name: &str,
    fields: &[StructField<'_>],
) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(fields.len());

    for field in fields {
        let name = renderer.name_field(&field.name, field.node);
        if let Some(first) = seen.get(&name) {
            return Err(RenderError::FieldNameCollision {
                model: type_name.to_string(),
                name,
                first: first.to_string(),
                second: field.name.clone(),
            });
        }
        seen.insert(name, &field.name);
    }

    Ok(())
}

/// Render a struct model through the preset stack.
pub(crate) fn render(
    renderer: &GoRenderer<'_>,
    presets: &PresetStack<StructPreset>,
    model: &ModelNode,
) -> Result<String> {
    let type_name = renderer.model_type_name(model)?;
    let input = renderer.input();
    let fields = classify_fields(model);
    check_collisions(renderer, &type_name, &fields)?;

    let mut lines = Vec::with_capacity(fields.len() + 1);
    for field in &fields {
        let ctx = FieldContext {
            model,
            input,
            renderer,
            field_name: &field.name,
            field: field.node,
            field_type: field.field_type,
        };
        let line = presets.run_hook(
            HookName::Field,
            &type_name,
            String::new(),
            StructPreset::field_hook,
            |hook, content| hook(&ctx, content),
        )?;
        if !line.is_empty() {
            lines.push(line);
        }
    }

    let ctx = RenderContext {
        model,
        input,
        renderer,
        type_name: &type_name,
    };
    let additional = presets.run_hook(
        HookName::AdditionalContent,
        &type_name,
        String::new(),
        StructPreset::additional_content_hook,
        |hook, content| hook(&ctx, content),
    )?;
    if !additional.is_empty() {
        lines.push(additional);
    }

    let body = renderer.indent().apply(&lines.join("\n"));
    presets.run_hook(
        HookName::SelfHook,
        &type_name,
        body,
        StructPreset::self_hook,
        |hook, content| hook(&ctx, content),
    )
}

/// The built-in struct preset.
pub(crate) fn default_preset() -> StructPreset {
    StructPreset::new()
        .on_self(|ctx, content| {
            let name = ctx.type_name;
            Ok(CodeBuilder::new(ctx.renderer.indent())
                .comment(&format!("{name} represents a {name} model."))
                .line(&format!("type {name} struct {{"))
                .text(&content)
                .line("}")
                .build_trimmed())
        })
        .on_field(|ctx, _| {
            let renderer = ctx.renderer;
            let mapper = renderer.type_mapper();
            let name = renderer.name_field(ctx.field_name, ctx.field);
            let ty = renderer.render_type(ctx.field);

            let line = if ctx.field_type.is_synthetic() {
                format!("{name} {}", mapper.map_dictionary(&ty))
            } else {
                let ty = if ctx.is_required() {
                    ty
                } else {
                    mapper.map_optional(&ty)
                };
                format!("{name} {ty} `json:\"{},omitempty\"`", ctx.field_name)
            };
            Ok(line)
        })
}
