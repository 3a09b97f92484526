//! Numbered frame emission with cross-fade sequencing.

use crate::compose::blend_frames;
use image::RgbaImage;
use raintale_error::{VideoError, VideoErrorKind};
use std::path::{Path, PathBuf};

/// Number of frames in each fade-in and each fade-out.
pub const FADE_STEPS: u64 = 10;
/// Number of frames holding the new content at full opacity.
pub const HOLD_FRAMES: u64 = 30;

// Opacity percentages 1, 11, ..., 91 for the fade steps.
fn fade_opacities() -> impl Iterator<Item = f32> {
    (1..99).step_by(10).map(|percent| percent as f32 / 100.0)
}

/// Writes sequentially numbered frame files into the workspace's frames
/// directory.
///
/// The frame counter starts at 0 and increases monotonically with no gaps,
/// and filenames zero-pad it to ten digits, so the encoder's glob-ordered
/// input reproduces playback order.
pub struct FrameWriter {
    frames_dir: PathBuf,
    counter: u64,
}

impl FrameWriter {
    /// Create a writer emitting into the given directory.
    pub fn new(frames_dir: impl Into<PathBuf>) -> Self {
        Self {
            frames_dir: frames_dir.into(),
            counter: 0,
        }
    }

    /// The current frame counter.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// The directory frames are written into.
    pub fn frames_dir(&self) -> &Path {
        &self.frames_dir
    }

    /// Write one frame, advancing the counter.
    pub fn write(&mut self, frame: &RgbaImage) -> Result<u64, VideoError> {
        self.counter += 1;
        let path = self
            .frames_dir
            .join(format!("img{:010}.png", self.counter));
        frame.save(&path).map_err(|e| {
            VideoError::new(VideoErrorKind::FrameWrite {
                frame: self.counter,
                message: e.to_string(),
            })
        })?;
        Ok(self.counter)
    }

    /// Emit the cross-fade sequence for one piece of content against the
    /// base frame: a 10-frame fade-in at opacities 1%..91%, 30 frames held
    /// at full opacity, and a 10-frame fade-out back toward the base.
    ///
    /// Exactly 50 frames per call. The base frame is the caller's and never
    /// advances here: every piece of content fades from and back to the
    /// same base.
    pub fn save_fading_frames(
        &mut self,
        base: &RgbaImage,
        content: &RgbaImage,
    ) -> Result<u64, VideoError> {
        for opacity in fade_opacities() {
            self.write(&blend_frames(base, content, opacity))?;
        }

        for _ in 0..HOLD_FRAMES {
            self.write(content)?;
        }

        for opacity in fade_opacities() {
            self.write(&blend_frames(content, base, opacity))?;
        }

        Ok(self.counter)
    }
}
