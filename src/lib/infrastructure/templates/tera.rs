//! Tera template renderer implementation

use std::sync::Arc;

use async_trait::async_trait;
use tera::Tera;

use crate::domain::templates::{TemplateContext, TemplateRenderError, TemplateRenderer};

/// Template renderer backed by a [`Tera`] instance
///
/// Templates are addressed by the id they were registered under, which for
/// glob loading is the path relative to the glob root.
#[derive(Debug, Clone)]
pub struct TeraTemplateRenderer {
    templates: Arc<Tera>,
}

impl TeraTemplateRenderer {
    /// Load every template matching the given glob
    pub fn from_glob(glob: &str) -> Result<Self, TemplateRenderError> {
        let templates = Tera::new(glob).map_err(|e| TemplateRenderError::UnknownError(e.into()))?;

        Ok(Self {
            templates: Arc::new(templates),
        })
    }

    /// Register raw templates by id
    pub fn with_templates<'a>(
        templates: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, TemplateRenderError> {
        let mut tera = Tera::default();

        for (id, content) in templates {
            tera.add_raw_template(id, content)
                .map_err(|e| TemplateRenderError::UnknownError(e.into()))?;
        }

        Ok(Self {
            templates: Arc::new(tera),
        })
    }
}

#[async_trait]
impl TemplateRenderer for TeraTemplateRenderer {
    async fn render(
        &self,
        template_id: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateRenderError> {
        let context = tera::Context::from_serialize(context)
            .map_err(|e| TemplateRenderError::UnknownError(e.into()))?;

        self.templates
            .render(template_id, &context)
            .map_err(|e| match e.kind {
                tera::ErrorKind::TemplateNotFound(name) => {
                    TemplateRenderError::TemplateNotFound(name)
                }
                _ => TemplateRenderError::RenderError {
                    template_id: template_id.to_string(),
                    reason: e.to_string(),
                },
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_render_substitutes_context_values() -> TestResult {
        let renderer = TeraTemplateRenderer::with_templates([(
            "emails/subject.txt",
            "New {{ eventType }} for {{ toFullName }}",
        )])?;

        let mut context = TemplateContext::new();
        context.insert("eventType".to_string(), json!("comment"));
        context.insert("toFullName".to_string(), json!("Alice A."));

        let rendered = renderer.render("emails/subject.txt", &context).await?;

        assert_eq!(rendered, "New comment for Alice A.");

        Ok(())
    }

    #[tokio::test]
    async fn test_render_unknown_template_id() -> TestResult {
        let renderer = TeraTemplateRenderer::with_templates(std::iter::empty::<(&str, &str)>())?;

        let result = renderer.render("emails/missing.txt", &TemplateContext::new()).await;

        assert!(matches!(
            result,
            Err(TemplateRenderError::TemplateNotFound(name)) if name == "emails/missing.txt"
        ));

        Ok(())
    }
}
