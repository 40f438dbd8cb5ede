//! Template rendering errors

use thiserror::Error;

/// Errors that can occur while rendering a notification template
#[derive(Debug, Error)]
pub enum TemplateRenderError {
    /// No template is registered under the requested id
    #[error("Template '{0}' was not found")]
    TemplateNotFound(String),

    /// The template failed to render against the supplied context
    #[error("Failed to render template '{template_id}': {reason}")]
    RenderError {
        /// The template that failed
        template_id: String,

        /// The engine's failure description
        reason: String,
    },

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}
