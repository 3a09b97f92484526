//! Raintale - stories from archived web pages
//!
//! Raintale turns a story document (a title plus an ordered sequence of
//! elements referencing archived web resources or free text) into
//! publishable output, guided by a pluggable multipart template and metadata
//! fetched from a MementoEmbed service.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use raintale::{
//!     FileStoryteller, MementoEmbedClient, StoryData, Storyteller, SurrogateConfig,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     raintale::init_telemetry()?;
//!
//!     let story = StoryData::from_json_str(&std::fs::read_to_string("story.json")?)?;
//!     let template = std::fs::read_to_string("template.mpt")?;
//!
//!     let client = Arc::new(MementoEmbedClient::new(SurrogateConfig::new(
//!         "http://mementoembed.example:5550",
//!     ))?);
//!
//!     let teller = FileStoryteller::new(client, "story-output.json");
//!     teller.tell_story(&story, &template).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Raintale is organized as a workspace with focused crates:
//!
//! - `raintale_core` - Story documents, elements, and rendered output
//! - `raintale_error` - Error types
//! - `raintale_template` - Multipart template parsing and rendering
//! - `raintale_surrogate` - MementoEmbed surrogate data client
//! - `raintale_storyteller` - Story assembly and the storyteller protocol
//! - `raintale_video` - Slideshow video renderer
//!
//! This crate (`raintale`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use raintale_core::{
    init_telemetry, CommentPost, MementoData, RenderedStory, StoryData, StoryElement,
};
pub use raintale_error::{
    ConfigError, HttpError, RaintaleError, RaintaleErrorKind, RaintaleResult, StoryError,
    StoryErrorKind, TemplateError, TemplateErrorKind, VideoError, VideoErrorKind,
};
pub use raintale_storyteller::{FileStoryteller, StoryAssembler, Storyteller};
pub use raintale_surrogate::{
    MementoEmbedClient, MementoGatherer, MementoSnapshot, ResponseCache, ResponseCacheConfig,
    SurrogateClient, SurrogateConfig, SurrogateEndpoint,
};
pub use raintale_template::{surrogate_fields, MultipartTemplate, TemplateRenderer};
pub use raintale_video::{
    blend_frames, FrameComposer, FrameWriter, Slide, VideoConfig, VideoEncoder, VideoStoryboard,
    VideoStoryteller,
};
