//! Rendered story output for thread-style publishers.

use serde::{Deserialize, Serialize};

/// One comment-level post: rendered text plus ordered media references.
///
/// # Examples
///
/// ```
/// use raintale_core::CommentPost;
///
/// let post = CommentPost::text_only("hello");
/// assert_eq!(post.text, "hello");
/// assert!(post.media.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPost {
    /// Rendered post text
    pub text: String,
    /// Ordered rendered media references, matching the media templates'
    /// declared order
    pub media: Vec<String>,
}

impl CommentPost {
    /// A post with no media attachments.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            media: Vec::new(),
        }
    }
}

/// The assembled output of a thread-style story rendering.
///
/// `comment_posts` holds at most one entry per valid story element, in story
/// order. Skipped elements leave no trace here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedStory {
    /// The rendered title section
    pub main_post: String,
    /// Ordered comment posts, one per successfully rendered element
    pub comment_posts: Vec<CommentPost>,
}
