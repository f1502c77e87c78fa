//! Render Buffer
//!
//! Streaming, line-aware output buffer sitting between the tree-walking
//! renderer and the output sink.
//!
//! # Line Decisions
//!
//! The renderer appends one chunk per literal or tag fragment, in document
//! order, each tagged with an [`InputKind`]. The buffer tracks the current
//! line in one of three states:
//!
//! - **Undecided**: only whitespace (and tags that rendered nothing) so far.
//!   The whitespace is held back.
//! - **Held**: a whole whitespace-only line, terminator included, is held
//!   until the first chunk of the next line arrives.
//! - **Committed**: the line has real content; everything is written through.
//!
//! A held line followed by another blank run, or by the end of input, is a
//! standalone line and is discarded. Content arriving while whitespace is held
//! commits that whitespace first.
//!
//! Renderers open every line with its leading whitespace as a
//! [`InputKind::Blank`] chunk (empty when the line has no indentation), so a
//! held standalone line is resolved as soon as the next line starts.
//!
//! # Indentation
//!
//! A nested buffer writes its prefix before the first character of every line
//! it emits, then forwards the result to its parent as content. Prefixes
//! therefore compose outermost first.

mod target;

use crate::input::{ends_with_line_break, split_lines};
use crate::{BufferError, Configuration, ContentType, InputKind, TextSink};

use self::target::Target;

/// Decision state for the line currently being rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineState {
    /// Nothing but whitespace on this line so far.
    Undecided,
    /// A complete blank line is pending.
    Held,
    /// The line has confirmed content.
    Committed,
}

/// Line-aware output buffer for one nesting level of a render pass.
///
/// Root buffers write to a [`TextSink`]. Nested buffers write to a parent
/// buffer, indenting every line with their prefix.
///
/// # Example
///
/// ```
/// use stache_buffer::{ContentType, InputKind, RenderBuffer};
///
/// let mut out = String::new();
/// let mut buffer = RenderBuffer::new(ContentType::Text, &mut out);
/// // `{{#section}}` alone on its line, followed by a literal line.
/// buffer.append("", ContentType::Text, InputKind::Blank)?;
/// buffer.append("", ContentType::Text, InputKind::StrippableContent)?;
/// buffer.append("\n", ContentType::Text, InputKind::BlankEndOfLine)?;
/// buffer.append("", ContentType::Text, InputKind::Blank)?;
/// buffer.append("hello\n", ContentType::Text, InputKind::ContentEndOfLine)?;
/// buffer.flush()?;
/// assert_eq!(out, "hello\n");
/// # Ok::<(), stache_buffer::BufferError>(())
/// ```
pub struct RenderBuffer<'a> {
    content_type: ContentType,
    prefix: String,
    at_line_start: bool,
    pending: String,
    state: LineState,
    flushed: bool,
    target: Target<'a>,
}

impl<'a> RenderBuffer<'a> {
    /// Create a root buffer writing to `sink`.
    pub fn new(content_type: ContentType, sink: &'a mut dyn TextSink) -> Self {
        Self::with_target(content_type, String::new(), Target::Sink(sink))
    }

    /// Create a root buffer using the configuration's default content type.
    pub fn from_configuration(config: &Configuration, sink: &'a mut dyn TextSink) -> Self {
        Self::new(config.content_type, sink)
    }

    /// Create a buffer that indents every line with `prefix` and forwards it
    /// to `parent`.
    ///
    /// The nested buffer renders the parent's content type. It holds the
    /// parent borrowed until it is dropped, so it must be flushed before the
    /// parent sees any further input.
    pub fn nested(
        parent: &'a mut RenderBuffer<'_>,
        prefix: impl Into<String>,
    ) -> Result<Self, BufferError> {
        let prefix = prefix.into();
        if prefix.contains(['\n', '\r']) {
            return Err(BufferError::PrefixContainsLineBreak);
        }
        if parent.flushed {
            return Err(BufferError::AppendAfterFlush);
        }
        let content_type = parent.content_type;
        Ok(Self::with_target(
            content_type,
            prefix,
            Target::Parent(parent),
        ))
    }

    fn with_target(content_type: ContentType, prefix: String, target: Target<'a>) -> Self {
        Self {
            content_type,
            prefix,
            at_line_start: true,
            pending: String::new(),
            state: LineState::Undecided,
            flushed: false,
            target,
        }
    }

    /// Content type every appended chunk must carry.
    #[inline]
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Indentation written at the start of each line (empty for root buffers).
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Append a chunk and write whatever it makes final.
    ///
    /// Returns the whitespace still held back after this call, or `""` when
    /// nothing is pending. A non-empty result after a blank chunk means the
    /// current line may yet turn out to be standalone.
    ///
    /// Fails without side effects if `content_type` is not the buffer's, or
    /// if the buffer was already flushed. Errors from a parent buffer are
    /// propagated.
    pub fn append(
        &mut self,
        text: &str,
        content_type: ContentType,
        kind: InputKind,
    ) -> Result<&str, BufferError> {
        if self.flushed {
            return Err(BufferError::AppendAfterFlush);
        }
        if content_type != self.content_type {
            return Err(BufferError::ContentTypeMismatch {
                expected: self.content_type,
                found: content_type,
            });
        }

        tracing::trace!(?kind, len = text.len(), state = ?self.state, "append");

        match (self.state, kind) {
            (_, InputKind::StrippableContent) if text.is_empty() => {}
            (LineState::Committed, _) => self.write_content(text)?,
            (state, _) if kind.is_blank() => {
                // A held line followed by another blank run is standalone.
                if state == LineState::Held {
                    self.drop_standalone_line();
                }
                self.pending.push_str(text);
                if kind.ends_line() {
                    self.state = LineState::Held;
                }
            }
            (LineState::Undecided | LineState::Held, _) => {
                self.commit_pending()?;
                self.write_content(text)?;
            }
        }

        Ok(self.pending.as_str())
    }

    /// Resolve pending state at the end of this nesting level.
    ///
    /// A held blank line is standalone (nothing follows it) and is dropped.
    /// Pending whitespace without a terminator cannot be completed any more
    /// and is written out. Later `append` calls fail; a second `flush` does
    /// nothing.
    ///
    /// Does not flush the parent of a nested buffer.
    pub fn flush(&mut self) -> Result<(), BufferError> {
        if self.flushed {
            return Ok(());
        }
        match self.state {
            LineState::Held => self.drop_standalone_line(),
            LineState::Undecided => self.commit_pending()?,
            LineState::Committed => {}
        }
        self.flushed = true;
        tracing::debug!(
            nested = self.target.is_nested(),
            prefix_len = self.prefix.len(),
            "buffer flushed"
        );
        Ok(())
    }

    /// Discard the held whitespace of a standalone line and start a new one.
    fn drop_standalone_line(&mut self) {
        tracing::debug!(len = self.pending.len(), "dropping standalone line");
        self.pending.clear();
        self.state = LineState::Undecided;
    }

    /// Write held whitespace: the line it belongs to is not standalone.
    fn commit_pending(&mut self) -> Result<(), BufferError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let pending = std::mem::take(&mut self.pending);
        tracing::debug!(len = pending.len(), "committing pending whitespace");
        self.emit(&pending)
    }

    /// Write confirmed text and update the line state from its last line.
    fn write_content(&mut self, text: &str) -> Result<(), BufferError> {
        self.emit(text)?;
        self.state = if ends_with_line_break(text) {
            LineState::Undecided
        } else {
            LineState::Committed
        };
        Ok(())
    }

    /// Write text to the target, inserting the prefix at every line start.
    fn emit(&mut self, text: &str) -> Result<(), BufferError> {
        for line in split_lines(text) {
            if self.at_line_start && !self.prefix.is_empty() {
                self.target.write(&self.prefix)?;
            }
            self.target.write(line)?;
            self.at_line_start = ends_with_line_break(line);
        }
        Ok(())
    }
}
