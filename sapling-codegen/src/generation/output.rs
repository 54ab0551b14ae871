/// Text and collected dependencies of one render call.
///
/// Created fresh per call and never mutated after it is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
    pub text: String,
    /// De-duplicated dependency identifiers, in registration order.
    pub dependencies: Vec<String>,
}

impl RenderOutput {
    pub fn new(text: impl Into<String>, dependencies: Vec<String>) -> Self {
        Self {
            text: text.into(),
            dependencies,
        }
    }
}

/// A rendered model together with its naming metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputModel {
    /// Identifier of the model in the input index.
    pub model_id: String,
    /// Target type name.
    pub model_name: String,
    /// Suggested file name, with extension.
    pub file_name: String,
    pub text: String,
    pub dependencies: Vec<String>,
}
