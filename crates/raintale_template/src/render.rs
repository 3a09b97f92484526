//! Template rendering over minijinja.

use minijinja::value::Value;
use minijinja::{context, Environment, UndefinedBehavior};
use raintale_core::{MementoData, StoryData};
use raintale_error::{TemplateError, TemplateErrorKind};

/// Renders multipart sub-templates against story and surrogate data.
///
/// Undefined template variables render as blanks rather than erroring, so
/// absent surrogate fields degrade output instead of aborting an element.
///
/// # Examples
///
/// ```
/// use raintale_core::StoryData;
/// use raintale_template::TemplateRenderer;
///
/// let story = StoryData::from_json_str(r#"{
///     "title": "My Story",
///     "elements": []
/// }"#).unwrap();
///
/// let renderer = TemplateRenderer::new();
/// let title = renderer.render_title("{{ title }}", &story).unwrap();
/// assert_eq!(title, "My Story");
/// ```
#[derive(Debug)]
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Create a renderer with lenient undefined-variable behavior.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        Self { env }
    }

    /// Render the title template against the story's top-level attributes.
    pub fn render_title(
        &self,
        template: &str,
        story: &StoryData,
    ) -> Result<String, TemplateError> {
        self.env
            .render_str(
                template,
                context! {
                    title => story.title(),
                    generated_by => story.generated_by(),
                    collection_url => story.collection_url(),
                    metadata => story.metadata(),
                },
            )
            .map_err(|e| TemplateError::new(TemplateErrorKind::Render(e.to_string())))
    }

    /// Render an element or media template against fetched surrogate data.
    ///
    /// The data is exposed to the template as `element.surrogate`.
    pub fn render_element(
        &self,
        template: &str,
        data: &MementoData,
    ) -> Result<String, TemplateError> {
        self.env
            .render_str(
                template,
                context! {
                    element => context! {
                        surrogate => Value::from_serialize(data),
                    },
                },
            )
            .map_err(|e| TemplateError::new(TemplateErrorKind::Render(e.to_string())))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
