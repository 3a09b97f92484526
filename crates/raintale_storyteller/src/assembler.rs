//! The per-element story assembly loop.

use raintale_core::{CommentPost, MementoData, RenderedStory, StoryData, StoryElement};
use raintale_error::RaintaleResult;
use raintale_surrogate::SurrogateClient;
use raintale_template::{surrogate_fields, MultipartTemplate, TemplateRenderer};
use tracing::instrument;

/// Assembles a thread-style [`RenderedStory`] from a story and a multipart
/// template.
///
/// Template structure violations are fatal. Everything that goes wrong with
/// a single element (missing value, failed render) is logged with the
/// element's contents and skipped, and assembly continues with the next
/// element.
#[derive(Debug, Default)]
pub struct StoryAssembler {
    renderer: TemplateRenderer,
}

impl StoryAssembler {
    /// Create an assembler with a fresh template renderer.
    pub fn new() -> Self {
        Self {
            renderer: TemplateRenderer::new(),
        }
    }

    /// Render a story against a raw multipart template document.
    ///
    /// Surrogate lookups for one element are independent; media-field
    /// fetches run concurrently and are reassembled in the media templates'
    /// declared order.
    ///
    /// # Errors
    ///
    /// Fails only on structural problems: a malformed multipart template or
    /// a title template that does not render.
    #[instrument(skip_all, fields(title = %story.title(), elements = story.elements().len()))]
    pub async fn render(
        &self,
        story: &StoryData,
        client: &dyn SurrogateClient,
        story_template: &str,
    ) -> RaintaleResult<RenderedStory> {
        let template = MultipartTemplate::parse(story_template)?;

        let element_fields = surrogate_fields(template.element_template());

        // Each media template is expected to reference exactly one field;
        // only the first is used if more are present.
        let media_plan: Vec<(&str, Option<String>)> = template
            .media_templates()
            .iter()
            .map(|media_template| {
                let field = surrogate_fields(media_template).into_iter().next();
                (media_template.as_str(), field)
            })
            .collect();

        let main_post = self
            .renderer
            .render_title(template.title_template(), story)?;

        let mut comment_posts = Vec::new();

        tracing::info!(
            "preparing to iterate through {} story elements",
            story.elements().len()
        );

        for element in story.elements() {
            tracing::debug!(?element, "working on story element");

            match element {
                StoryElement::Link(urim) => {
                    match self
                        .render_link(client, &template, &element_fields, &media_plan, urim)
                        .await
                    {
                        Some(post) => comment_posts.push(post),
                        None => {
                            tracing::error!(?element, "cannot process story element, skipping");
                        }
                    }
                }
                StoryElement::Text(text) => {
                    comment_posts.push(CommentPost::text_only(text.clone()));
                }
                StoryElement::Unknown { kind, value } => match kind.as_str() {
                    "link" | "text" => {
                        tracing::error!(
                            kind,
                            ?value,
                            "cannot process story element data, skipping"
                        );
                    }
                    _ => {
                        tracing::warn!("element of type {} is unsupported, skipping...", kind);
                    }
                },
            }
        }

        let rendered = RenderedStory {
            main_post,
            comment_posts,
        };
        tracing::debug!(comment_posts = rendered.comment_posts.len(), "story assembled");
        Ok(rendered)
    }

    /// Render one link element; None means "skip this element".
    async fn render_link(
        &self,
        client: &dyn SurrogateClient,
        template: &MultipartTemplate,
        element_fields: &[String],
        media_plan: &[(&str, Option<String>)],
        urim: &str,
    ) -> Option<CommentPost> {
        let memento_data = client.memento_data(urim, element_fields).await;
        tracing::debug!(urim, supplied = memento_data.len(), "fetched memento data");

        let text = match self
            .renderer
            .render_element(template.element_template(), &memento_data)
        {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(urim, "element template failed to render: {}", e);
                return None;
            }
        };

        // Independent single-field lookups, reassembled in declared order.
        let media_futures = media_plan.iter().map(|(media_template, field)| async move {
            let field_data = match field {
                Some(field) => {
                    client
                        .memento_data(urim, std::slice::from_ref(field))
                        .await
                }
                None => MementoData::default(),
            };
            self.renderer.render_element(media_template, &field_data)
        });

        let mut media = Vec::with_capacity(media_plan.len());
        for rendered in futures::future::join_all(media_futures).await {
            match rendered {
                Ok(uri) => media.push(uri),
                Err(e) => {
                    tracing::error!(urim, "media template failed to render: {}", e);
                    return None;
                }
            }
        }

        Some(CommentPost { text, media })
    }
}
