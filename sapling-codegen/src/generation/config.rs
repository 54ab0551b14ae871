use serde::Deserialize;

/// Settings for wrapping rendered models into complete source files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompleteModelsConfig {
    /// Package or namespace the generated files belong to.
    pub package_name: String,
}

impl CompleteModelsConfig {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
        }
    }
}
