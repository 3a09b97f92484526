//! Video composition and encoding error types.

/// Specific error conditions for the video storyteller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum VideoErrorKind {
    /// Failed to create the scoped frame workspace
    #[display("Failed to create video workspace: {}", _0)]
    Workspace(String),
    /// Failed to load the configured font file
    #[display("Failed to load font from {}: {}", path, message)]
    FontLoad {
        /// Configured font path
        path: String,
        /// Underlying error message
        message: String,
    },
    /// Failed to decode a fetched image
    #[display("Failed to decode image from {}: {}", uri, message)]
    ImageDecode {
        /// Source URI of the image
        uri: String,
        /// Underlying error message
        message: String,
    },
    /// Failed to write a frame file
    #[display("Failed to write frame {}: {}", frame, message)]
    FrameWrite {
        /// Frame index that failed to write
        frame: u64,
        /// Underlying error message
        message: String,
    },
    /// The external encoder could not be spawned or exited nonzero
    #[display("Video encoder failed: {}", _0)]
    Encode(String),
}

/// Error type for video storyteller operations.
///
/// # Examples
///
/// ```
/// use raintale_error::{VideoError, VideoErrorKind};
///
/// let err = VideoError::new(VideoErrorKind::Encode("ffmpeg exited with 1".into()));
/// assert!(format!("{}", err).contains("encoder"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Video Error: {} at line {} in {}", kind, line, file)]
pub struct VideoError {
    /// The specific error condition
    pub kind: VideoErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl VideoError {
    /// Create a new VideoError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: VideoErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
