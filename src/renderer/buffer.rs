//! FrameBuffer - a 2D grid of cells.
//!
//! Flat row-major storage: `index = y * width + x`. Wide characters occupy
//! two cells, the second holding a continuation marker (char = 0).

use crate::layout::char_width;
use crate::types::{Attr, Cell, Rgba};

#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a mutable cell reference (None if out of bounds).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Set one cell's glyph, foreground and attributes. Background is kept.
    ///
    /// Returns true if the cell was inside the buffer.
    pub fn set_char(&mut self, x: u16, y: u16, ch: char, fg: Rgba, attrs: Attr) -> bool {
        match self.get_mut(x, y) {
            Some(cell) => {
                cell.char = ch as u32;
                cell.fg = fg;
                cell.attrs = attrs;
                true
            }
            None => false,
        }
    }

    /// Draw text starting at (x, y), clipped to `max_x` (exclusive).
    ///
    /// Returns the number of columns written.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Rgba, attrs: Attr, max_x: u16) -> u16 {
        let limit = max_x.min(self.width);
        let mut col = x;

        for ch in text.chars() {
            let w = char_width(ch);
            if w == 0 {
                continue;
            }
            if col + w > limit {
                break;
            }

            self.set_char(col, y, ch, fg, attrs);
            if w == 2 {
                self.set_char(col + 1, y, '\0', fg, attrs);
            }
            col += w;
        }

        col.saturating_sub(x)
    }

    /// Plain text of one row (continuation cells skipped, trailing spaces kept).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| cell.char != 0)
            .filter_map(|cell| char::from_u32(cell.char))
            .collect()
    }

    /// All rows as plain text, trailing spaces trimmed.
    pub fn to_plain_string(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_blank() {
        let buf = FrameBuffer::new(4, 2);
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.row_text(1), "    ");
        assert!(buf.get(4, 0).is_none());
    }

    #[test]
    fn test_set_char_out_of_bounds() {
        let mut buf = FrameBuffer::new(2, 1);
        assert!(buf.set_char(1, 0, 'x', Rgba::RED, Attr::BOLD));
        assert!(!buf.set_char(2, 0, 'x', Rgba::RED, Attr::NONE));
        let cell = buf.get(1, 0).unwrap();
        assert_eq!(cell.char, 'x' as u32);
        assert_eq!(cell.fg, Rgba::RED);
        assert_eq!(cell.attrs, Attr::BOLD);
    }

    #[test]
    fn test_draw_text_clips() {
        let mut buf = FrameBuffer::new(10, 1);
        let written = buf.draw_text(2, 0, "hello", Rgba::WHITE, Attr::NONE, 5);
        assert_eq!(written, 3);
        assert_eq!(buf.row_text(0), "  hel     ");
    }

    #[test]
    fn test_draw_wide_text() {
        let mut buf = FrameBuffer::new(6, 1);
        let written = buf.draw_text(0, 0, "日本", Rgba::WHITE, Attr::NONE, 6);
        assert_eq!(written, 4);
        assert_eq!(buf.get(1, 0).unwrap().char, 0);
        assert_eq!(buf.to_plain_string(), "日本");
    }
}
