//! Inline output - writes a FrameBuffer to a terminal stream.
//!
//! Rows are written top to bottom with newlines, no cursor positioning, so a
//! timeline can be printed into normal scrollback. Styling goes through
//! crossterm commands; state is tracked so unchanged colors and attributes
//! are not re-emitted.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};

use super::buffer::FrameBuffer;
use crate::types::{Attr, Cell, Rgba};

/// Columns to fall back to when the terminal size cannot be queried.
pub const FALLBACK_WIDTH: u16 = 80;

/// Width of the attached terminal.
pub fn detect_terminal_width() -> u16 {
    match crossterm::terminal::size() {
        Ok((width, _)) if width > 0 => width,
        _ => FALLBACK_WIDTH,
    }
}

/// Convert our color to a crossterm color.
pub fn to_color(color: Rgba) -> Color {
    if color.is_terminal_default() || color.a == 0 {
        Color::Reset
    } else if color.is_ansi() {
        Color::AnsiValue(color.ansi_index())
    } else {
        Color::Rgb {
            r: color.r as u8,
            g: color.g as u8,
            b: color.b as u8,
        }
    }
}

fn attributes(attrs: Attr) -> impl Iterator<Item = Attribute> {
    [
        (Attr::BOLD, Attribute::Bold),
        (Attr::DIM, Attribute::Dim),
        (Attr::ITALIC, Attribute::Italic),
        (Attr::UNDERLINE, Attribute::Underlined),
    ]
    .into_iter()
    .filter(move |(flag, _)| attrs.contains(*flag))
    .map(|(_, attribute)| attribute)
}

/// Renders cells sequentially, emitting only changed style state.
#[derive(Debug, Default)]
pub struct InlineWriter {
    last_fg: Option<Rgba>,
    last_bg: Option<Rgba>,
    last_attrs: Attr,
}

impl InlineWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_cell<W: Write>(&mut self, out: &mut W, cell: &Cell) -> io::Result<()> {
        // Continuation of a wide character, already printed
        if cell.char == 0 {
            return Ok(());
        }

        if cell.attrs != self.last_attrs {
            queue!(out, SetAttribute(Attribute::Reset))?;
            for attribute in attributes(cell.attrs) {
                queue!(out, SetAttribute(attribute))?;
            }
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = cell.attrs;
        }

        if self.last_fg != Some(cell.fg) {
            queue!(out, SetForegroundColor(to_color(cell.fg)))?;
            self.last_fg = Some(cell.fg);
        }
        if self.last_bg != Some(cell.bg) {
            queue!(out, SetBackgroundColor(to_color(cell.bg)))?;
            self.last_bg = Some(cell.bg);
        }

        let ch = char::from_u32(cell.char).unwrap_or(' ');
        queue!(out, Print(ch))
    }

    /// Write every row of `buffer`, resetting style at the end of each line.
    pub fn write<W: Write>(&mut self, out: &mut W, buffer: &FrameBuffer) -> io::Result<()> {
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                if let Some(cell) = buffer.get(x, y) {
                    self.write_cell(out, cell)?;
                }
            }
            queue!(out, SetAttribute(Attribute::Reset), ResetColor, Print("\r\n"))?;
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = Attr::NONE;
        }
        out.flush()
    }
}

/// Write `buffer` to `out` in inline mode.
pub fn write_buffer<W: Write>(out: &mut W, buffer: &FrameBuffer) -> io::Result<()> {
    log::trace!("output: writing {}x{} buffer", buffer.width(), buffer.height());
    InlineWriter::new().write(out, buffer)
}
