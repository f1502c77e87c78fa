//! Render Configuration
//!
//! Content types and the configuration value renderers consult when they
//! create a root buffer.

use std::fmt;

/// Escaping discipline attached to rendered text.
///
/// The buffer never escapes anything itself. It only checks that every chunk
/// it receives was produced for the same content type it was built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ContentType {
    /// Markup output; values are HTML-escaped before they reach the buffer.
    #[default]
    Html,

    /// Plain text output; values are passed through unchanged.
    Text,
}

impl ContentType {
    /// Returns `true` for [`ContentType::Html`].
    #[inline]
    pub fn is_html(self) -> bool {
        matches!(self, ContentType::Html)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Html => f.write_str("html"),
            ContentType::Text => f.write_str("text"),
        }
    }
}

/// Configuration shared by a render pass.
///
/// Only the default content type matters to the buffer layer; the rest of the
/// renderer's settings live with the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Content type of root buffers created for this configuration.
    /// Defaults to [`ContentType::Html`].
    pub content_type: ContentType,
}

impl Configuration {
    /// Create a configuration with the specified content type.
    pub fn with_content_type(content_type: ContentType) -> Self {
        Self { content_type }
    }
}
