use serde_json::error::Category;
use thiserror::Error;

/// Errors raised while moving models between Rust values and JSON.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("no value given for required property {}", .0.join(", "))]
    MissingRequiredField(Vec<String>),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl ModelError {
    /// Sorts a serde_json decode failure into a syntax or a shape problem.
    pub fn from_json(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof | Category::Io => {
                ModelError::MalformedPayload(err.to_string())
            }
            Category::Data => ModelError::TypeMismatch(err.to_string()),
        }
    }

    pub fn missing<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ModelError::MissingRequiredField(keys.into_iter().map(Into::into).collect())
    }
}

/// Helper for mapping a serializer fault into an encoding error
pub fn encoding_error<E: ToString>(err: E) -> ModelError {
    ModelError::Encoding(err.to_string())
}
