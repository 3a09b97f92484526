//! Multipart template marker protocol.

use raintale_error::{TemplateError, TemplateErrorKind};

/// Marker that must open every multipart template document.
pub const MULTIPART_MARKER: &str = "{# RAINTALE MULTIPART TEMPLATE #}\n";
/// Marker that must immediately follow the multipart marker.
pub const TITLE_MARKER: &str = "{# RAINTALE TITLE PART #}\n";
/// Marker separating the title template from the element template.
pub const ELEMENT_MARKER: &str = "{# RAINTALE ELEMENT PART #}\n";
/// Optional marker separating the element template from media templates.
pub const MEDIA_MARKER: &str = "{# RAINTALE ELEMENT MEDIA #}";

/// A parsed multipart template: title, element, and media sub-templates.
///
/// The sub-templates are opaque template-language strings; parsing here only
/// enforces the marker protocol.
///
/// # Examples
///
/// ```
/// use raintale_template::MultipartTemplate;
///
/// let doc = "{# RAINTALE MULTIPART TEMPLATE #}\n\
///            {# RAINTALE TITLE PART #}\n\
///            {{ title }}\n\
///            {# RAINTALE ELEMENT PART #}\n\
///            {{ element.surrogate.title }}\n";
/// let template = MultipartTemplate::parse(doc).unwrap();
/// assert_eq!(template.title_template(), "{{ title }}\n");
/// assert!(template.media_templates().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct MultipartTemplate {
    /// Template for the story title section
    title_template: String,
    /// Template applied once per link element
    element_template: String,
    /// Media templates, one per line of the media section, blank lines
    /// dropped
    media_templates: Vec<String>,
}

impl MultipartTemplate {
    /// Split a raw multipart document into its sub-templates.
    ///
    /// # Errors
    ///
    /// Fails with a structural error naming the missing marker when the
    /// document does not open with the multipart and title markers, or when
    /// the element marker does not occur exactly once. A missing media
    /// marker is not an error.
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        let rest = raw.strip_prefix(MULTIPART_MARKER).ok_or_else(|| {
            tracing::error!("template document does not open with the multipart marker");
            TemplateError::new(TemplateErrorKind::MissingMultipartMarker)
        })?;

        let rest = rest.strip_prefix(TITLE_MARKER).ok_or_else(|| {
            tracing::error!("template document does not declare a title part");
            TemplateError::new(TemplateErrorKind::MissingTitlePart)
        })?;

        let sections: Vec<&str> = rest.split(ELEMENT_MARKER).collect();
        let [title_template, element_section] = sections[..] else {
            tracing::error!(
                markers = sections.len() - 1,
                "template document must contain exactly one element part marker"
            );
            return Err(TemplateError::new(TemplateErrorKind::MissingElementPart));
        };

        let (element_template, media_templates) = match element_section.split_once(MEDIA_MARKER) {
            Some((element_template, media_section)) => {
                let media_templates: Vec<String> = media_section
                    .split('\n')
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect();
                tracing::debug!(count = media_templates.len(), "found media templates");
                (element_template, media_templates)
            }
            None => (element_section, Vec::new()),
        };

        Ok(Self {
            title_template: title_template.to_string(),
            element_template: element_template.to_string(),
            media_templates,
        })
    }
}
