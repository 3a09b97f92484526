//! Multipart template parsing and rendering for Raintale.
//!
//! A multipart template is a single document encoding three logical
//! sub-templates separated by fixed markers:
//!
//! ```text
//! {# RAINTALE MULTIPART TEMPLATE #}
//! {# RAINTALE TITLE PART #}
//! <title template>
//! {# RAINTALE ELEMENT PART #}
//! <element template>
//! {# RAINTALE ELEMENT MEDIA #}
//! <one media template per line>
//! ```
//!
//! The media section is optional. Markers are matched byte-for-byte; a
//! missing marker is a fatal structural error naming the marker.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fields;
mod multipart;
mod render;

pub use fields::surrogate_fields;
pub use multipart::{
    MultipartTemplate, ELEMENT_MARKER, MEDIA_MARKER, MULTIPART_MARKER, TITLE_MARKER,
};
pub use render::TemplateRenderer;
