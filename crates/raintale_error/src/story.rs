//! Story structure error types.

/// Specific error conditions for story documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// Failed to deserialize story document
    #[display("Failed to parse story document: {}", _0)]
    Parse(String),
    /// Story document has no elements key
    #[display("Cannot tell story. Story does not contain elements.")]
    MissingElements,
    /// Failed to write rendered story output
    #[display("Failed to write story output: {}", _0)]
    FileWrite(String),
}

/// Error type for story document operations.
///
/// # Examples
///
/// ```
/// use raintale_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::MissingElements);
/// assert!(format!("{}", err).contains("elements"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
