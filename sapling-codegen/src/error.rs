use miette::Diagnostic;
use thiserror::Error;

use crate::HookName;

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Boxed error raised by a caller-supplied hook.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure to render one model.
///
/// Every variant is local to the model being rendered; batch operations
/// report it for that model and keep rendering the others.
#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("cannot derive a type name for model {}", .identifier.as_deref().map(|id| format!("'{id}'")).unwrap_or_else(|| "<anonymous>".to_string()))]
    #[diagnostic(
        code(sapling::unnameable_model),
        help("give the model an `$id` made of letters or digits")
    )]
    UnnameableModel { identifier: Option<String> },

    #[error("fields '{first}' and '{second}' of model '{model}' both render as '{name}'")]
    #[diagnostic(
        code(sapling::field_name_collision),
        help("rename one of the properties, or drop the conflicting additional/pattern properties")
    )]
    FieldNameCollision {
        model: String,
        name: String,
        first: String,
        second: String,
    },

    #[error("values {first} and {second} of enum '{model}' both render as constant '{name}'")]
    #[diagnostic(
        code(sapling::enum_constant_collision),
        help("enum values must stay distinct after normalization")
    )]
    EnumConstantCollision {
        model: String,
        name: String,
        first: String,
        second: String,
    },

    #[error("'{hook}' hook of preset {stage} failed while rendering '{model}'")]
    #[diagnostic(code(sapling::hook_failure))]
    HookFailure {
        model: String,
        hook: HookName,
        /// Position in the preset stack; 0 is the built-in default.
        stage: usize,
        #[source]
        source: HookError,
    },

    #[error("model '{model}' is neither a struct nor an enum ({kind})")]
    #[diagnostic(
        code(sapling::unsupported_model_kind),
        help("only object models and models with `enum` values are rendered")
    )]
    UnsupportedModelKind { model: String, kind: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unnameable_message() {
        let anonymous = RenderError::UnnameableModel { identifier: None };
        assert_eq!(
            anonymous.to_string(),
            "cannot derive a type name for model <anonymous>"
        );

        let symbols = RenderError::UnnameableModel {
            identifier: Some("???".to_string()),
        };
        assert_eq!(
            symbols.to_string(),
            "cannot derive a type name for model '???'"
        );
    }

    #[test]
    fn test_hook_failure_keeps_source() {
        let err = RenderError::HookFailure {
            model: "Pet".to_string(),
            hook: HookName::Field,
            stage: 1,
            source: eyre::eyre!("lookup failed").into(),
        };

        assert_eq!(
            err.to_string(),
            "'field' hook of preset 1 failed while rendering 'Pet'"
        );
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("lookup failed"));
    }
}
