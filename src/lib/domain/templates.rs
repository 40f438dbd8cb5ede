//! Template rendering capability

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

pub mod errors;

pub use errors::TemplateRenderError;

/// The key→value mapping substituted into notification templates
pub type TemplateContext = serde_json::Map<String, serde_json::Value>;

/// Template renderer
///
/// Templates are owned and registered by the host; this bridge only refers to
/// them by id.
#[async_trait]
pub trait TemplateRenderer: Clone + Send + Sync + 'static {
    /// Render the named template against the given context
    async fn render(
        &self,
        template_id: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateRenderError>;
}

#[cfg(test)]
mock! {
    pub TemplateRenderer {}

    impl Clone for TemplateRenderer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl TemplateRenderer for TemplateRenderer {
        async fn render(
            &self,
            template_id: &str,
            context: &TemplateContext,
        ) -> Result<String, TemplateRenderError>;
    }
}
