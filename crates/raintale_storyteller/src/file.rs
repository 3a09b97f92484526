//! File-backed storyteller.

use crate::{StoryAssembler, Storyteller};
use raintale_core::{RenderedStory, StoryData};
use raintale_error::{RaintaleResult, StoryError, StoryErrorKind};
use raintale_surrogate::SurrogateClient;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::instrument;

/// A storyteller that assembles a thread-style story and publishes it as a
/// JSON document on disk.
///
/// # Examples
///
/// ```ignore
/// use raintale_storyteller::{FileStoryteller, Storyteller};
/// use raintale_surrogate::{MementoEmbedClient, SurrogateConfig};
/// use std::sync::Arc;
///
/// let client = Arc::new(MementoEmbedClient::new(
///     SurrogateConfig::new("http://mementoembed.example:5550"),
/// )?);
/// let teller = FileStoryteller::new(client, "story-output.json");
/// let output = teller.tell_story(&story, &template_text).await?;
/// ```
pub struct FileStoryteller {
    client: Arc<dyn SurrogateClient>,
    assembler: StoryAssembler,
    output_filename: PathBuf,
}

impl FileStoryteller {
    /// Create a storyteller writing to the given output path.
    pub fn new(client: Arc<dyn SurrogateClient>, output_filename: impl Into<PathBuf>) -> Self {
        let output_filename = output_filename.into();
        tracing::info!("output filename set to {}", output_filename.display());
        Self {
            client,
            assembler: StoryAssembler::new(),
            output_filename,
        }
    }

    /// The configured output path.
    pub fn output_filename(&self) -> &Path {
        &self.output_filename
    }
}

#[async_trait::async_trait]
impl Storyteller for FileStoryteller {
    type Output = RenderedStory;

    #[instrument(skip_all, fields(title = %story.title()))]
    async fn generate_story(
        &self,
        story: &StoryData,
        story_template: &str,
    ) -> RaintaleResult<RenderedStory> {
        self.assembler
            .render(story, self.client.as_ref(), story_template)
            .await
    }

    #[instrument(skip_all)]
    async fn publish_story(&self, output: &RenderedStory) -> RaintaleResult<()> {
        let body = serde_json::to_string_pretty(output)
            .map_err(|e| StoryError::new(StoryErrorKind::FileWrite(e.to_string())))?;

        tokio::fs::write(&self.output_filename, body)
            .await
            .map_err(|e| StoryError::new(StoryErrorKind::FileWrite(e.to_string())))?;

        tracing::info!(
            "story has been saved to {}",
            self.output_filename.display()
        );
        Ok(())
    }
}
