//! Go model renderer.
//!
//! Renders object models as Go structs and enumerated models as named types
//! with grouped constants. Every rendering decision goes through a preset
//! stack, so callers can wrap or replace the default output without forking
//! the renderer.
//!
//! ```
//! use sapling_codegen_go::{Generator, GoOptions};
//! use sapling_model::{InputModel, ModelNode, TypeTag};
//!
//! let pet = ModelNode::of_type(TypeTag::Object)
//!     .with_id("pet")
//!     .with_property("name", ModelNode::of_type(TypeTag::String))
//!     .with_required("name");
//! let input = InputModel::new().with_model(pet.clone());
//!
//! let output = Generator::new(GoOptions::default()).render_struct(&pet, &input).unwrap();
//! assert_eq!(
//!     output.text,
//!     "// Pet represents a Pet model.\ntype Pet struct {\n\tName string `json:\"name,omitempty\"`\n}"
//! );
//! ```

mod enum_renderer;
mod generator;
mod naming;
mod options;
mod presets;
mod render;
mod renderer;
mod struct_renderer;
mod type_mapper;

pub mod files;

pub use generator::Generator;
pub use naming::GO_NAMING;
pub use options::{ConstantTyping, GoOptions};
pub use presets::{
    EnumContext, EnumPreset, EnumSelfHook, FieldContext, FieldHook, FieldType, GoPreset,
    ItemContext, ItemHook, RenderContext, StructPreset, StructSelfHook,
};
pub use render::render_imports;
pub use renderer::GoRenderer;
pub use sapling_codegen::{ModelGenerator, OutputModel, RenderError, RenderOutput};
pub use type_mapper::GoTypeMapper;
