//! Video storyteller configuration.

use raintale_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the video storyteller.
///
/// The defaults produce 864x480 SD output at 10 frames per second, matching
/// the frame geometry the compositor's layout constants assume.
///
/// # Examples
///
/// ```
/// use raintale_video::VideoConfig;
///
/// let config: VideoConfig = toml::from_str(r#"
///     font_path = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"
/// "#).unwrap();
/// assert_eq!(config.width, 864);
/// assert_eq!(config.framerate, 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Output video width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Output video height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Frames per second handed to the encoder
    #[serde(default = "default_framerate")]
    pub framerate: u32,

    /// Path to the TTF font used for all frame text
    pub font_path: PathBuf,

    /// Prefix for the scoped temporary workspace directory
    #[serde(default = "default_workdir_prefix")]
    pub workdir_prefix: String,
}

fn default_width() -> u32 {
    864
}

fn default_height() -> u32 {
    480
}

fn default_framerate() -> u32 {
    10
}

fn default_workdir_prefix() -> String {
    "raintale-".to_string()
}

impl VideoConfig {
    /// Create a configuration with default geometry for the given font.
    pub fn new(font_path: impl Into<PathBuf>) -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            framerate: default_framerate(),
            font_path: font_path.into(),
            workdir_prefix: default_workdir_prefix(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Content frames are scaled to fit within this fraction of the video
    /// dimensions.
    pub fn content_box(&self) -> (f32, f32) {
        (self.width as f32 * 0.7, self.height as f32 * 0.7)
    }
}
