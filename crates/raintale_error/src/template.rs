//! Multipart template error types.

/// Specific error conditions for multipart template parsing and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TemplateErrorKind {
    /// Document does not start with the multipart format marker
    #[display("Multipart Template required, but not submitted, cannot continue")]
    MissingMultipartMarker,
    /// Multipart marker present but title part marker missing
    #[display("Raintale Title Part required in Multipart Template, but not present, cannot continue")]
    MissingTitlePart,
    /// Element part marker missing
    #[display("Raintale Element Part required in Multipart Template, but not present, cannot continue")]
    MissingElementPart,
    /// Template fragment failed to compile or render
    #[display("Failed to render template: {}", _0)]
    Render(String),
}

/// Error type for multipart template operations.
///
/// # Examples
///
/// ```
/// use raintale_error::{TemplateError, TemplateErrorKind};
///
/// let err = TemplateError::new(TemplateErrorKind::MissingElementPart);
/// assert!(format!("{}", err).contains("Element Part"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at line {} in {}", kind, line, file)]
pub struct TemplateError {
    /// The specific error condition
    pub kind: TemplateErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new TemplateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
