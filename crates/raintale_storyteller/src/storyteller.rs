//! The storyteller protocol.

use raintale_core::StoryData;
use raintale_error::RaintaleResult;

/// A renderer that turns a story and a template into publishable output.
///
/// `tell_story` is the whole pipeline: generate, then publish. Renderers
/// differ in their output type (a rendered post set, a video file path) and
/// in where `publish_story` delivers it; delivery guarantees are the
/// publisher's concern, not the pipeline's.
#[async_trait::async_trait]
pub trait Storyteller {
    /// The renderer-specific output handed to `publish_story`.
    type Output: Send;

    /// Generate renderer-specific output from a story and a raw multipart
    /// template document.
    async fn generate_story(
        &self,
        story: &StoryData,
        story_template: &str,
    ) -> RaintaleResult<Self::Output>;

    /// Deliver previously generated output to this storyteller's
    /// destination.
    async fn publish_story(&self, output: &Self::Output) -> RaintaleResult<()>;

    /// Generate and publish in one step, returning the generated output.
    async fn tell_story(
        &self,
        story: &StoryData,
        story_template: &str,
    ) -> RaintaleResult<Self::Output> {
        let output = self.generate_story(story, story_template).await?;
        self.publish_story(&output).await?;
        Ok(output)
    }
}
