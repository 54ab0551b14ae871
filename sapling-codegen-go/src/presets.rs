//! Hook contexts and presets of the Go renderer.
//!
//! A struct model runs the `field` hook once per field, then
//! `additionalContent`, then `self` with the indented body as seed. An enum
//! model runs the `item` hook once per value, then `self` with the
//! declaration as seed.
//!
//! ```
//! use sapling_codegen_go::{Generator, GoOptions, GoPreset, StructPreset};
//! use sapling_model::{InputModel, ModelNode, TypeTag};
//!
//! let tagged = StructPreset::new().on_field(|ctx, content| {
//!     Ok(format!("{content} // from {}", ctx.field_name))
//! });
//! let generator = Generator::new(GoOptions::new().preset(GoPreset::new().with_struct(tagged)));
//!
//! let pet = ModelNode::of_type(TypeTag::Object)
//!     .with_id("pet")
//!     .with_property("name", ModelNode::of_type(TypeTag::String))
//!     .with_required("name");
//! let output = generator.render_struct(&pet, &InputModel::new()).unwrap();
//! assert!(output.text.contains("Name string `json:\"name,omitempty\"` // from name"));
//! ```

use std::{fmt, sync::Arc};

use sapling_model::{InputModel, ModelNode};
use serde_json::Value;

use crate::GoRenderer;

/// How a struct field came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Declared in `properties`.
    Property,
    /// Synthesized from `additionalProperties`.
    AdditionalProperty,
    /// Synthesized from one `patternProperties` entry.
    PatternProperties,
}

impl FieldType {
    /// Synthetic fields collect extra keys into a map.
    pub fn is_synthetic(&self) -> bool {
        !matches!(self, FieldType::Property)
    }
}

/// Context of the struct `self` and `additionalContent` hooks.
pub struct RenderContext<'a> {
    pub model: &'a ModelNode,
    pub input: &'a InputModel,
    pub renderer: &'a GoRenderer<'a>,
    /// Go type name of the model.
    pub type_name: &'a str,
}

/// Context of the struct `field` hook.
pub struct FieldContext<'a> {
    pub model: &'a ModelNode,
    pub input: &'a InputModel,
    pub renderer: &'a GoRenderer<'a>,
    /// Property key, or the synthetic name of an additional/pattern field.
    pub field_name: &'a str,
    pub field: &'a ModelNode,
    pub field_type: FieldType,
}

impl FieldContext<'_> {
    /// Whether the field is listed in the model's `required` set.
    pub fn is_required(&self) -> bool {
        self.field_type == FieldType::Property && self.model.is_required(self.field_name)
    }
}

/// Context of the enum `self` hook.
pub struct EnumContext<'a> {
    pub model: &'a ModelNode,
    pub input: &'a InputModel,
    pub renderer: &'a GoRenderer<'a>,
    pub type_name: &'a str,
    /// Go type the enum is declared over; `interface{}` for mixed values.
    pub backing_type: &'a str,
    /// Output of the `item` hook for each value, in value order.
    pub items: &'a [String],
}

/// Context of the enum `item` hook.
pub struct ItemContext<'a> {
    pub model: &'a ModelNode,
    pub input: &'a InputModel,
    pub renderer: &'a GoRenderer<'a>,
    pub type_name: &'a str,
    pub backing_type: &'a str,
    /// Constant name derived from the type name and the value.
    pub constant_name: &'a str,
    pub value: &'a Value,
    pub index: usize,
}

pub type StructSelfHook = dyn Fn(&RenderContext<'_>, String) -> eyre::Result<String> + Send + Sync;
pub type FieldHook = dyn Fn(&FieldContext<'_>, String) -> eyre::Result<String> + Send + Sync;
pub type EnumSelfHook = dyn Fn(&EnumContext<'_>, String) -> eyre::Result<String> + Send + Sync;
pub type ItemHook = dyn Fn(&ItemContext<'_>, String) -> eyre::Result<String> + Send + Sync;

/// Hooks for struct models. Unset hooks pass content through.
#[derive(Clone, Default)]
pub struct StructPreset {
    self_hook: Option<Arc<StructSelfHook>>,
    field: Option<Arc<FieldHook>>,
    additional_content: Option<Arc<StructSelfHook>>,
}

impl StructPreset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `self` hook; its seed is the indented struct body.
    pub fn on_self(
        mut self,
        hook: impl Fn(&RenderContext<'_>, String) -> eyre::Result<String> + Send + Sync + 'static,
    ) -> Self {
        self.self_hook = Some(Arc::new(hook));
        self
    }

    /// Set the `field` hook; the default stage's seed is empty.
    pub fn on_field(
        mut self,
        hook: impl Fn(&FieldContext<'_>, String) -> eyre::Result<String> + Send + Sync + 'static,
    ) -> Self {
        self.field = Some(Arc::new(hook));
        self
    }

    /// Set the `additionalContent` hook; its output follows the fields.
    pub fn on_additional_content(
        mut self,
        hook: impl Fn(&RenderContext<'_>, String) -> eyre::Result<String> + Send + Sync + 'static,
    ) -> Self {
        self.additional_content = Some(Arc::new(hook));
        self
    }

    pub fn self_hook(&self) -> Option<&StructSelfHook> {
        self.self_hook.as_deref()
    }

    pub fn field_hook(&self) -> Option<&FieldHook> {
        self.field.as_deref()
    }

    pub fn additional_content_hook(&self) -> Option<&StructSelfHook> {
        self.additional_content.as_deref()
    }
}

impl fmt::Debug for StructPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructPreset")
            .field("self", &self.self_hook.is_some())
            .field("field", &self.field.is_some())
            .field("additional_content", &self.additional_content.is_some())
            .finish()
    }
}

/// Hooks for enum models. Unset hooks pass content through.
#[derive(Clone, Default)]
pub struct EnumPreset {
    self_hook: Option<Arc<EnumSelfHook>>,
    item: Option<Arc<ItemHook>>,
}

impl EnumPreset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `self` hook; its seed is the doc comment and `type` line.
    pub fn on_self(
        mut self,
        hook: impl Fn(&EnumContext<'_>, String) -> eyre::Result<String> + Send + Sync + 'static,
    ) -> Self {
        self.self_hook = Some(Arc::new(hook));
        self
    }

    /// Set the `item` hook, run once per enum value.
    pub fn on_item(
        mut self,
        hook: impl Fn(&ItemContext<'_>, String) -> eyre::Result<String> + Send + Sync + 'static,
    ) -> Self {
        self.item = Some(Arc::new(hook));
        self
    }

    pub fn self_hook(&self) -> Option<&EnumSelfHook> {
        self.self_hook.as_deref()
    }

    pub fn item_hook(&self) -> Option<&ItemHook> {
        self.item.as_deref()
    }
}

impl fmt::Debug for EnumPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumPreset")
            .field("self", &self.self_hook.is_some())
            .field("item", &self.item.is_some())
            .finish()
    }
}

/// A caller preset covering both model kinds.
#[derive(Debug, Clone, Default)]
pub struct GoPreset {
    pub structure: Option<StructPreset>,
    pub enumeration: Option<EnumPreset>,
}

impl GoPreset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_struct(mut self, preset: StructPreset) -> Self {
        self.structure = Some(preset);
        self
    }

    pub fn with_enum(mut self, preset: EnumPreset) -> Self {
        self.enumeration = Some(preset);
        self
    }
}
