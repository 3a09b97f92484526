//! Slideshow video storyteller for Raintale.
//!
//! Turns story elements into a numbered sequence of image frames with
//! deterministic cross-fade transitions, then hands the frame sequence to
//! ffmpeg to produce a video file. All frame work happens inside a scoped
//! temporary workspace that is removed on every exit path.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compose;
mod config;
mod encoder;
mod frames;
mod storyteller;

pub use compose::{blend_frames, FrameComposer};
pub use config::VideoConfig;
pub use encoder::VideoEncoder;
pub use frames::{FrameWriter, FADE_STEPS, HOLD_FRAMES};
pub use storyteller::{Slide, VideoStoryboard, VideoStoryteller};
