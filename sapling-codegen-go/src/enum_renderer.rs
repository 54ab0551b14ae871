use std::collections::HashMap;

use sapling_codegen::{CodeBuilder, HookName, PresetStack, RenderError, Result, TypeMapper};
use sapling_model::ModelNode;
use serde_json::Value;

use crate::{ConstantTyping, EnumContext, EnumPreset, GoRenderer, ItemContext};

/// Go literal of an enum value.
///
/// Strings are quoted, `null` is `nil`, and arrays and objects become the
/// quoted JSON text.
fn go_literal(value: &Value) -> String {
    match value {
        Value::Null => "nil".to_string(),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => Value::String(value.to_string()).to_string(),
    }
}

fn constant_names(
    renderer: &GoRenderer<'_>,
    type_name: &str,
    values: &[Value],
) -> Result<Vec<String>> {
    let mut seen: HashMap<String, &Value> = HashMap::with_capacity(values.len());
    let mut names = Vec::with_capacity(values.len());

    for value in values {
        let name = renderer.constant_name(type_name, value);
        if let Some(first) = seen.get(&name) {
            return Err(RenderError::EnumConstantCollision {
                model: type_name.to_string(),
                name,
                first: first.to_string(),
                second: value.to_string(),
            });
        }
        seen.insert(name.clone(), value);
        names.push(name);
    }

    Ok(names)
}

/// Render an enum model through the preset stack.
pub(crate) fn render(
    renderer: &GoRenderer<'_>,
    presets: &PresetStack<EnumPreset>,
    model: &ModelNode,
) -> Result<String> {
    let type_name = renderer.model_type_name(model)?;
    let backing_type = renderer.enum_backing_type(model);
    let input = renderer.input();
    let values = model.enum_values.as_deref().unwrap_or_default();
    let names = constant_names(renderer, &type_name, values)?;

    let mut items = Vec::with_capacity(values.len());
    for (index, (value, constant_name)) in values.iter().zip(&names).enumerate() {
        let ctx = ItemContext {
            model,
            input,
            renderer,
            type_name: &type_name,
            backing_type: &backing_type,
            constant_name,
            value,
            index,
        };
        items.push(presets.run_hook(
            HookName::Item,
            &type_name,
            String::new(),
            EnumPreset::item_hook,
            |hook, content| hook(&ctx, content),
        )?);
    }

    let described = if backing_type == renderer.type_mapper().any_type() {
        "mixed types"
    } else {
        backing_type.as_str()
    };
    let declaration = CodeBuilder::new(renderer.indent())
        .comment(&format!("{type_name} represents an enum of {described}."))
        .line(&format!("type {type_name} {backing_type}"))
        .build_trimmed();

    let ctx = EnumContext {
        model,
        input,
        renderer,
        type_name: &type_name,
        backing_type: &backing_type,
        items: &items,
    };
    presets.run_hook(
        HookName::SelfHook,
        &type_name,
        declaration,
        EnumPreset::self_hook,
        |hook, content| hook(&ctx, content),
    )
}

/// The built-in enum preset.
pub(crate) fn default_preset() -> EnumPreset {
    EnumPreset::new()
        .on_self(|ctx, content| {
            let constants: Vec<&String> = ctx.items.iter().filter(|i| !i.is_empty()).collect();
            if constants.is_empty() {
                return Ok(content);
            }

            // Go constants cannot have interface type
            let keyword = if ctx.backing_type == ctx.renderer.type_mapper().any_type() {
                "var"
            } else {
                "const"
            };

            let mut builder = CodeBuilder::new(ctx.renderer.indent());
            builder
                .push_text(&content)
                .push_blank()
                .push_line(&format!("{keyword} ("))
                .push_indent();
            for item in constants {
                builder.push_text(item);
            }
            builder.push_dedent().push_line(")");
            Ok(builder.build_trimmed())
        })
        .on_item(|ctx, _| {
            let literal = go_literal(ctx.value);
            // untyped nil is not a valid initializer
            let typed = ctx.index == 0
                || ctx.value.is_null()
                || ctx.renderer.constant_typing() == ConstantTyping::Every;
            Ok(if typed {
                format!("{} {} = {}", ctx.constant_name, ctx.type_name, literal)
            } else {
                format!("{} = {}", ctx.constant_name, literal)
            })
        })
}
