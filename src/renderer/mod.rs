//! Renderer Module
//!
//! Paints timelines into a [`FrameBuffer`] and writes buffers to a terminal.
//!
//! ```text
//! TimelineLayout + Theme → render_timeline → FrameBuffer → write_buffer → stdout
//! ```

mod buffer;
mod output;
mod timeline;

pub use buffer::FrameBuffer;
pub use output::{detect_terminal_width, to_color, write_buffer, InlineWriter, FALLBACK_WIDTH};
pub use timeline::{bullet_glyph, render_timeline};
