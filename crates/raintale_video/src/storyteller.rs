//! The video storyteller.

use crate::{FrameComposer, FrameWriter, VideoConfig, VideoEncoder};
use raintale_core::{StoryData, StoryElement};
use raintale_error::{RaintaleResult, VideoError, VideoErrorKind};
use raintale_storyteller::Storyteller;
use raintale_surrogate::MementoGatherer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::instrument;

/// One slide of the storyboard: text to draw, an image to composite, or
/// both (each fades independently).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slide {
    /// Sentence text for a text slide
    pub text: Option<String>,
    /// URI of an image to fetch and composite
    pub image_uri: Option<String>,
}

impl Slide {
    /// A slide carrying only text.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            image_uri: None,
        }
    }

    /// A slide carrying only an image reference.
    pub fn image_only(uri: Option<String>) -> Self {
        Self {
            text: None,
            image_uri: uri,
        }
    }
}

/// The video renderer's intermediate output: story attributes plus
/// pre-resolved slides, ready for frame composition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoStoryboard {
    /// Story title stamped onto the base frame
    pub title: String,
    /// Attribution stamped onto the base frame
    pub generated_by: String,
    /// Ordered slides, one or two per valid story element
    pub slides: Vec<Slide>,
}

/// A storyteller that renders a story as a slideshow video.
///
/// Link elements are pre-resolved into text and image slides by the
/// gatherer's five-endpoint pass; composition then emits a numbered
/// cross-fade frame sequence inside a scoped temporary workspace, hands it
/// to ffmpeg, and removes the workspace on every exit path.
pub struct VideoStoryteller {
    gatherer: Arc<dyn MementoGatherer>,
    config: VideoConfig,
    output_filename: PathBuf,
}

impl VideoStoryteller {
    /// Create a video storyteller writing to the given output path.
    pub fn new(
        gatherer: Arc<dyn MementoGatherer>,
        config: VideoConfig,
        output_filename: impl Into<PathBuf>,
    ) -> Self {
        let output_filename = output_filename.into();
        tracing::info!("output filename set to {}", output_filename.display());
        Self {
            gatherer,
            config,
            output_filename,
        }
    }

    /// The configured output path.
    pub fn output_filename(&self) -> &Path {
        &self.output_filename
    }

    /// The video configuration.
    pub fn config(&self) -> &VideoConfig {
        &self.config
    }
}

#[async_trait::async_trait]
impl Storyteller for VideoStoryteller {
    type Output = VideoStoryboard;

    /// Pre-resolve story elements into slides.
    ///
    /// The multipart template does not apply to video output and is
    /// ignored. Element skip semantics match the thread-style assembler:
    /// unknown types are logged and dropped, and one bad element never
    /// aborts the story.
    #[instrument(skip_all, fields(title = %story.title()))]
    async fn generate_story(
        &self,
        story: &StoryData,
        _story_template: &str,
    ) -> RaintaleResult<VideoStoryboard> {
        let mut storyboard = VideoStoryboard {
            title: story.title().clone(),
            generated_by: story.generated_by().clone(),
            slides: Vec::new(),
        };

        for element in story.elements() {
            match element {
                StoryElement::Link(urim) => {
                    let snapshot = self.gatherer.snapshot(urim).await;

                    storyboard.slides.push(Slide {
                        text: snapshot.slide_text(),
                        image_uri: None,
                    });
                    storyboard
                        .slides
                        .push(Slide::image_only(snapshot.top_image_uri));
                }
                StoryElement::Text(text) => {
                    storyboard.slides.push(Slide::text_only(text.clone()));
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

        tracing::debug!(slides = storyboard.slides.len(), "storyboard assembled");
        Ok(storyboard)
    }

    /// Compose frames, encode the video, and clean up the workspace.
    ///
    /// The temporary workspace is removed on success, on failure, and on
    /// cancellation: it lives in a `TempDir` whose drop deletes it.
    #[instrument(skip_all, fields(output = %self.output_filename.display()))]
    async fn publish_story(&self, storyboard: &VideoStoryboard) -> RaintaleResult<()> {
        let composer = FrameComposer::new(&self.config)?;

        let workspace = tempfile::Builder::new()
            .prefix(&self.config.workdir_prefix)
            .suffix(".tmp")
            .tempdir()
            .map_err(|e| VideoError::new(VideoErrorKind::Workspace(e.to_string())))?;

        let frames_dir = workspace.path().join("videoframes");
        std::fs::create_dir_all(&frames_dir)
            .map_err(|e| VideoError::new(VideoErrorKind::Workspace(e.to_string())))?;

        let base = composer.base_frame(&storyboard.title, &storyboard.generated_by);
        let mut writer = FrameWriter::new(&frames_dir);

        for slide in &storyboard.slides {
            if let Some(uri) = &slide.image_uri
                && let Some(bytes) = self.gatherer.fetch_media(uri).await
            {
                match image::load_from_memory(&bytes) {
                    Ok(decoded) => {
                        let fitted = composer.fit_image(&decoded.to_rgba8());
                        let content = composer.composite_centered(&base, &fitted);
                        writer.save_fading_frames(&base, &content)?;
                    }
                    Err(e) => {
                        let err = VideoError::new(VideoErrorKind::ImageDecode {
                            uri: uri.clone(),
                            message: e.to_string(),
                        });
                        tracing::warn!(%err, "skipping image slide");
                    }
                }
            }

            if let Some(text) = &slide.text {
                let content = composer.text_frame(text);
                writer.save_fading_frames(&base, &content)?;
            }
        }

        writer.write(&composer.end_frame(&base))?;

        let encoder = VideoEncoder::new(self.config.framerate);
        encoder.encode(&frames_dir, &self.output_filename).await?;

        workspace
            .close()
            .map_err(|e| VideoError::new(VideoErrorKind::Workspace(e.to_string())))?;

        Ok(())
    }
}
