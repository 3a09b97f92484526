//! Core data types for the Raintale storytelling library.
//!
//! This crate provides the foundation data types used across all Raintale
//! renderers: story documents, story elements, surrogate data, and rendered
//! output.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod memento;
mod rendered;
mod story;
mod telemetry;

pub use memento::MementoData;
pub use rendered::{CommentPost, RenderedStory};
pub use story::{StoryData, StoryElement};
pub use telemetry::init_telemetry;
