//! Where a buffer sends committed text: the final sink, or a parent buffer.

use crate::input::ends_with_line_break;
use crate::{BufferError, InputKind, RenderBuffer, TextSink};

/// A buffer that accepts committed text from a nested buffer.
///
/// Implemented by [`RenderBuffer`] so that a child can hold its parent
/// behind a trait object and stay independent of the parent's own lifetime.
pub(super) trait Upstream {
    fn forward(&mut self, text: &str) -> Result<(), BufferError>;
}

impl Upstream for RenderBuffer<'_> {
    /// Committed text from a child always counts as content for the parent:
    /// the child has already dropped its own standalone lines.
    fn forward(&mut self, text: &str) -> Result<(), BufferError> {
        let kind = if ends_with_line_break(text) {
            InputKind::ContentEndOfLine
        } else {
            InputKind::Content
        };
        self.append(text, self.content_type(), kind).map(|_| ())
    }
}

pub(super) enum Target<'a> {
    Sink(&'a mut dyn TextSink),
    Parent(&'a mut dyn Upstream),
}

impl Target<'_> {
    pub(super) fn write(&mut self, text: &str) -> Result<(), BufferError> {
        match self {
            Target::Sink(sink) => {
                sink.write_text(text);
                Ok(())
            }
            Target::Parent(parent) => parent.forward(text),
        }
    }

    pub(super) fn is_nested(&self) -> bool {
        matches!(self, Target::Parent(_))
    }
}
