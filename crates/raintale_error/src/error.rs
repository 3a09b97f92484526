//! Top-level error wrapper types.

use crate::{ConfigError, HttpError, StoryError, TemplateError, VideoError};

/// This is the foundation error enum. Each raintale crate contributes a
/// variant for its own failure domain.
///
/// # Examples
///
/// ```
/// use raintale_error::{RaintaleError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: RaintaleError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum RaintaleErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Story document error
    #[from(StoryError)]
    Story(StoryError),
    /// Multipart template error
    #[from(TemplateError)]
    Template(TemplateError),
    /// Video composition or encoding error
    #[from(VideoError)]
    Video(VideoError),
}

/// Raintale error with kind discrimination.
///
/// # Examples
///
/// ```
/// use raintale_error::{RaintaleResult, ConfigError};
///
/// fn might_fail() -> RaintaleResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Raintale Error: {}", _0)]
pub struct RaintaleError(Box<RaintaleErrorKind>);

impl RaintaleError {
    /// Create a new error from a kind.
    pub fn new(kind: RaintaleErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RaintaleErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to RaintaleErrorKind
impl<T> From<T> for RaintaleError
where
    T: Into<RaintaleErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Raintale operations.
///
/// # Examples
///
/// ```
/// use raintale_error::{RaintaleResult, HttpError};
///
/// fn fetch_data() -> RaintaleResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type RaintaleResult<T> = std::result::Result<T, RaintaleError>;
