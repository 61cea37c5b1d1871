//! Field rendering error types.

/// Field rendering error.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),
}
