//! Stache Render Buffer
//!
//! Line-aware output buffering for the Stache template renderer.
//!
//! The renderer walks a template tree and streams output one fragment at a
//! time. Two whitespace rules need line-level decisions that cannot be made
//! fragment by fragment:
//!
//! 1. **Standalone lines**: a line holding only whitespace and a structural
//!    tag (section, partial, comment, pragma) disappears from the output,
//!    terminator included.
//! 2. **Partial indentation**: a partial referenced from an indented line has
//!    every line it produces indented the same way.
//!
//! [`RenderBuffer`] holds back whitespace until each line is decided, and
//! nested buffers apply one indentation prefix per partial level.
//!
//! # Modules
//!
//! - [`buffer`]: the buffer and its line decision state
//! - [`input`]: chunk classification
//! - [`sink`]: final output destinations
//! - [`config`]: content types and render configuration
//!
//! # Logging
//!
//! Decisions are reported through `tracing` (`trace` per chunk, `debug` per
//! dropped or committed line). Call [`init_tracing`] and set
//! `RUST_LOG=stache_buffer=debug` to see them.

pub mod buffer;
pub mod config;
mod error;
pub mod input;
pub mod sink;

pub use buffer::RenderBuffer;
pub use config::{Configuration, ContentType};
pub use error::BufferError;
pub use input::{split_lines, InputKind};
pub use sink::{StringSink, TextSink};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
