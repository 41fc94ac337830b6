/// Crate-wide result alias.
pub type ShapeflowResult<T> = Result<T, ShapeflowError>;

/// Crate-wide error type.
///
/// The per-frame contract is total: once a configuration passes validation,
/// frame advancement cannot fail.
#[derive(thiserror::Error, Debug)]
pub enum ShapeflowError {
    /// Invalid configuration rejected by the once-per-frame validation pass.
    #[error("validation error: {0}")]
    Validation(String),

    /// Inconsistent per-frame inputs.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped external error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShapeflowError {
    /// Build a [`ShapeflowError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShapeflowError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
