//! Story document types.
//!
//! A story is a title plus an ordered sequence of elements, each element
//! either a reference to an archived web resource (a memento URI) or literal
//! text. Story documents arrive as JSON or TOML.

use raintale_error::{StoryError, StoryErrorKind};
use serde::Deserialize;
use std::collections::HashMap;

/// One unit of story content.
///
/// Element dispatch is exhaustive: unsupported or incomplete elements land in
/// the `Unknown` arm so renderers can skip them without aborting the story.
///
/// # Examples
///
/// ```
/// use raintale_core::StoryElement;
///
/// let element: StoryElement = serde_json::from_str(
///     r#"{"type": "link", "value": "https://example.com/memento"}"#,
/// ).unwrap();
/// assert_eq!(element, StoryElement::Link("https://example.com/memento".to_string()));
///
/// // A declared link with no value is not fatal, it is skippable.
/// let element: StoryElement = serde_json::from_str(r#"{"type": "link"}"#).unwrap();
/// assert!(matches!(element, StoryElement::Unknown { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawStoryElement")]
pub enum StoryElement {
    /// A reference to an archived web resource, carrying its memento URI.
    Link(String),
    /// Literal text to publish verbatim.
    Text(String),
    /// Anything else: an unsupported type, or a link/text missing its value.
    /// Renderers log and skip these.
    Unknown {
        /// The declared element type
        kind: String,
        /// The declared value, if any
        value: Option<String>,
    },
}

impl StoryElement {
    /// True when a renderer can produce output for this element.
    pub fn is_supported(&self) -> bool {
        !matches!(self, StoryElement::Unknown { .. })
    }
}

/// Wire representation of a story element before dispatch.
#[derive(Debug, Clone, Deserialize)]
struct RawStoryElement {
    #[serde(rename = "type")]
    kind: String,
    value: Option<String>,
}

impl From<RawStoryElement> for StoryElement {
    fn from(raw: RawStoryElement) -> Self {
        match (raw.kind.as_str(), raw.value) {
            ("link", Some(value)) => StoryElement::Link(value),
            ("text", Some(value)) => StoryElement::Text(value),
            (_, value) => StoryElement::Unknown {
                kind: raw.kind,
                value,
            },
        }
    }
}

/// A story document: caller-supplied, read-only input to the pipeline.
///
/// # Examples
///
/// ```
/// use raintale_core::StoryData;
///
/// let story = StoryData::from_json_str(r#"{
///     "title": "My Story",
///     "generated_by": "raintale",
///     "collection_url": "https://archive.example/collection/1",
///     "metadata": {},
///     "elements": [ {"type": "text", "value": "hi"} ]
/// }"#).unwrap();
/// assert_eq!(story.title(), "My Story");
/// assert_eq!(story.elements().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, derive_getters::Getters)]
pub struct StoryData {
    /// Story title, rendered once into the title template
    title: String,
    /// Attribution line for the generating tool
    #[serde(default)]
    generated_by: String,
    /// URI of the collection the story was drawn from
    #[serde(default)]
    collection_url: String,
    /// Free-form story metadata available to the title template
    #[serde(default)]
    metadata: HashMap<String, String>,
    /// Ordered story elements
    elements: Vec<StoryElement>,
}

impl StoryData {
    /// Parse a story document from JSON.
    ///
    /// A document without an `elements` key is a fatal story structure error.
    pub fn from_json_str(raw: &str) -> Result<Self, StoryError> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| StoryError::new(StoryErrorKind::Parse(e.to_string())))?;
        Self::check_elements_present(value.get("elements").is_some())?;
        serde_json::from_value(value)
            .map_err(|e| StoryError::new(StoryErrorKind::Parse(e.to_string())))
    }

    /// Parse a story document from TOML.
    ///
    /// A document without an `elements` key is a fatal story structure error.
    pub fn from_toml_str(raw: &str) -> Result<Self, StoryError> {
        let value: toml::Value = toml::from_str(raw)
            .map_err(|e| StoryError::new(StoryErrorKind::Parse(e.to_string())))?;
        Self::check_elements_present(value.get("elements").is_some())?;
        value
            .try_into()
            .map_err(|e: toml::de::Error| StoryError::new(StoryErrorKind::Parse(e.to_string())))
    }

    fn check_elements_present(present: bool) -> Result<(), StoryError> {
        if present {
            Ok(())
        } else {
            tracing::error!("story document does not contain elements");
            Err(StoryError::new(StoryErrorKind::MissingElements))
        }
    }
}
