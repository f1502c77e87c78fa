//! Output Sinks
//!
//! Final destinations for rendered text. A root [`RenderBuffer`] writes into a
//! sink once its line decisions are made; nested buffers write into their
//! parent instead.
//!
//! [`RenderBuffer`]: crate::RenderBuffer

/// Append-only destination for fully resolved output.
///
/// Writes must take effect immediately: the buffer never reads back what it
/// wrote, and it assumes no further buffering happens below it.
pub trait TextSink {
    /// Append a text fragment.
    fn write_text(&mut self, text: &str);
}

impl TextSink for String {
    fn write_text(&mut self, text: &str) {
        self.push_str(text);
    }
}

/// Owned sink that keeps a whole render in memory.
///
/// Hand `&mut sink` to a root buffer, flush the buffer, then take the text
/// back with [`StringSink::output`].
#[derive(Debug, Default)]
pub struct StringSink {
    output: String,
}

impl StringSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// `true` until the first non-empty write.
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Consume the sink, returning the rendered text.
    pub fn output(self) -> String {
        self.output
    }
}

impl TextSink for StringSink {
    fn write_text(&mut self, text: &str) {
        self.output.push_str(text);
    }
}
