//! Language-agnostic rendering traits.

use rayon::prelude::*;
use sapling_model::{InputModel, ModelNode, TypeTag};

use crate::{CompleteModelsConfig, OutputModel, RenderOutput, Result};

/// Trait for language-specific model generators.
///
/// Implement [`render`](ModelGenerator::render) and
/// [`wrap_complete_model`](ModelGenerator::wrap_complete_model) to add a
/// target language; document-level generation is provided.
pub trait ModelGenerator: Sync {
    /// Language identifier (e.g., "go", "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "go", "ts")
    fn file_extension(&self) -> &'static str;

    /// Derive the target type name of a model identifier
    fn name_type(&self, id: &str) -> String;

    /// Derive the file stem for a target type name
    fn file_stem(&self, type_name: &str) -> String;

    /// Render one model, dispatching on its kind
    fn render(&self, model: &ModelNode, input: &InputModel) -> Result<RenderOutput>;

    /// Wrap a rendered model into a complete source file
    fn wrap_complete_model(&self, output: &OutputModel, config: &CompleteModelsConfig) -> String;

    /// Render every model reachable from the document.
    ///
    /// Anonymous nested structs and enums are named after their usage
    /// context first (see [`InputModel::with_context_names`]), so they get
    /// declarations of their own. Models are rendered in parallel; the result
    /// keeps [`InputModel::reachable_models`] order. A failed model yields an
    /// `Err` entry and does not affect its siblings.
    fn generate(&self, input: &InputModel) -> Vec<Result<OutputModel>> {
        let input = input.with_context_names();
        let models = input.reachable_models();
        models
            .par_iter()
            .map(|model| -> Result<OutputModel> {
                let output = self.render(model, &input).inspect_err(|err| {
                    tracing::warn!(
                        language = self.language(),
                        model = model.id.as_deref().unwrap_or("<anonymous>"),
                        error = %err,
                        "failed to render model"
                    );
                })?;
                Ok(self.output_model(model, output))
            })
            .collect()
    }

    /// Render every reachable model as a complete source file.
    fn generate_complete_models(
        &self,
        input: &InputModel,
        config: &CompleteModelsConfig,
    ) -> Vec<Result<OutputModel>> {
        self.generate(input)
            .into_iter()
            .map(|result| {
                result.map(|mut output| {
                    output.text = self.wrap_complete_model(&output, config);
                    output
                })
            })
            .collect()
    }

    /// Attach naming metadata to a render output.
    fn output_model(&self, model: &ModelNode, output: RenderOutput) -> OutputModel {
        let model_id = model.id.clone().unwrap_or_default();
        let model_name = self.name_type(&model_id);
        let file_name = format!("{}.{}", self.file_stem(&model_name), self.file_extension());
        OutputModel {
            model_id,
            model_name,
            file_name,
            text: output.text,
            dependencies: output.dependencies,
        }
    }
}

/// Trait for mapping model type tags to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// The universal type that accepts any value
    fn any_type(&self) -> &'static str;

    /// Map a scalar tag; `None` for tags that need the owning node
    fn map_scalar(&self, tag: TypeTag) -> Option<&'static str>;

    /// Map a sequence of `element`
    fn map_array(&self, element: &str) -> String;

    /// Map a string-keyed dictionary of `value`
    fn map_dictionary(&self, value: &str) -> String;

    /// Map an optional `inner`
    fn map_optional(&self, inner: &str) -> String;
}
