//! Input Classification
//!
//! Every chunk handed to a [`RenderBuffer`](crate::RenderBuffer) carries an
//! [`InputKind`] saying whether it may still belong to a standalone line.
//! The renderer picks the kind; the helpers here cover the mechanical part of
//! that choice for literal text.

/// Classification of one appended chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Output produced by a tag whose line may still be standalone.
    ///
    /// Non-empty output confirms the line. Empty output (a section, comment
    /// or partial tag that rendered nothing) leaves it undecided.
    StrippableContent,

    /// Literal text, never subject to stripping. Confirms the line even when
    /// empty.
    Content,

    /// Literal text ending with a line terminator.
    ContentEndOfLine,

    /// Whitespace without a line terminator.
    Blank,

    /// Whitespace ending with a line terminator.
    BlankEndOfLine,
}

impl InputKind {
    /// Returns `true` for the whitespace kinds.
    #[inline]
    pub fn is_blank(self) -> bool {
        matches!(self, InputKind::Blank | InputKind::BlankEndOfLine)
    }

    /// Returns `true` for the kinds that carry a line terminator.
    #[inline]
    pub fn ends_line(self) -> bool {
        matches!(
            self,
            InputKind::ContentEndOfLine | InputKind::BlankEndOfLine
        )
    }

    /// Classify a literal line fragment from a standalone-candidate line.
    ///
    /// `text` is expected to hold at most one line terminator, at its end
    /// (see [`split_lines`]).
    ///
    /// # Example
    ///
    /// ```
    /// use stache_buffer::InputKind;
    ///
    /// assert_eq!(InputKind::classify_literal("  "), InputKind::Blank);
    /// assert_eq!(InputKind::classify_literal(" \r\n"), InputKind::BlankEndOfLine);
    /// assert_eq!(InputKind::classify_literal("x\n"), InputKind::ContentEndOfLine);
    /// ```
    pub fn classify_literal(text: &str) -> InputKind {
        let blank = text.chars().all(char::is_whitespace);
        match (blank, ends_with_line_break(text)) {
            (true, false) => InputKind::Blank,
            (true, true) => InputKind::BlankEndOfLine,
            (false, false) => InputKind::Content,
            (false, true) => InputKind::ContentEndOfLine,
        }
    }
}

/// Split `text` into line fragments, each keeping its terminator.
///
/// `\r\n` stays together with the fragment it ends. An empty input yields no
/// fragments.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
}

/// Returns `true` if `text` ends with `\n` (which covers `\r\n`).
#[inline]
pub(crate) fn ends_with_line_break(text: &str) -> bool {
    text.ends_with('\n')
}
