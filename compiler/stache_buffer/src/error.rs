//! Buffer contract errors.

use crate::ContentType;

/// Misuse of a [`RenderBuffer`](crate::RenderBuffer).
///
/// Every variant is a caller bug. The buffer rejects the offending call
/// without writing anything, so the renderer can abort the pass and report
/// it instead of producing half-escaped output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// A chunk was appended with a content type other than the buffer's.
    #[error("content type mismatch: buffer renders {expected}, chunk is {found}")]
    ContentTypeMismatch {
        expected: ContentType,
        found: ContentType,
    },

    /// `append` was called on a buffer that has already been flushed.
    #[error("append after flush")]
    AppendAfterFlush,

    /// A nested buffer prefix contained a line terminator.
    #[error("indentation prefix must not contain a line break")]
    PrefixContainsLineBreak,
}
