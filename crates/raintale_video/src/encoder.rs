//! External video encoder invocation.

use raintale_error::{VideoError, VideoErrorKind};
use std::path::Path;
use tokio::process::Command;
use tracing::instrument;

/// Invokes ffmpeg over a glob of numbered frame files to produce one video
/// file.
///
/// Pixel format and codec are fixed by policy: `yuv420p` and `libx264`. Any
/// pre-existing file at the output path is overwritten.
#[derive(Debug, Clone)]
pub struct VideoEncoder {
    framerate: u32,
}

impl VideoEncoder {
    /// Create an encoder for the given frame rate.
    pub fn new(framerate: u32) -> Self {
        Self { framerate }
    }

    /// Encode `frames_dir/img*.png` into a video at `output`.
    ///
    /// # Errors
    ///
    /// Fails when ffmpeg cannot be spawned or exits nonzero; the error
    /// carries ffmpeg's stderr.
    #[instrument(skip(self))]
    pub async fn encode(&self, frames_dir: &Path, output: &Path) -> Result<(), VideoError> {
        let pattern = frames_dir.join("img*.png");

        tracing::info!("generating movie from frames");

        let result = Command::new("ffmpeg")
            .arg("-y")
            .arg("-framerate")
            .arg(self.framerate.to_string())
            .arg("-pattern_type")
            .arg("glob")
            .arg("-i")
            .arg(&pattern)
            .arg("-pix_fmt")
            .arg("yuv420p")
            .arg("-c:v")
            .arg("libx264")
            .arg(output)
            .output()
            .await
            .map_err(|e| {
                VideoError::new(VideoErrorKind::Encode(format!(
                    "failed to spawn ffmpeg: {}",
                    e
                )))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(VideoError::new(VideoErrorKind::Encode(format!(
                "ffmpeg exited with {}: {}",
                result.status, stderr
            ))));
        }

        tracing::info!("movie has been saved to {}", output.display());
        Ok(())
    }
}
