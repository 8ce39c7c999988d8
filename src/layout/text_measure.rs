//! Text Measurement
//!
//! Display widths of step titles and content in terminal cells, via
//! `unicode-width` (CJK and most emoji take 2 cells, control characters 0).

use unicode_width::UnicodeWidthChar;

/// Width of one character in cells.
#[inline]
pub fn char_width(c: char) -> u16 {
    c.width().unwrap_or(0) as u16
}

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    s.chars().fold(0u16, |w, c| w.saturating_add(char_width(c)))
}

/// Wrap text to a width, breaking at characters and on `\n`.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0u16;

    for c in text.chars() {
        if c == '\n' {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
            continue;
        }

        let w = char_width(c);
        if current_width + w > width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }

        current_line.push(c);
        current_width += w;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Number of lines `text` occupies when wrapped to `available_width`.
/// Saturates at `u16::MAX`.
pub fn measure_text_height(text: &str, available_width: u16) -> u16 {
    u16::try_from(wrap_text(text, available_width).len()).unwrap_or(u16::MAX)
}

/// Truncate text to a width, ending with an ellipsis when cut.
pub fn truncate_text(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }

    if string_width(text) <= width {
        return text.to_string();
    }

    let target_width = width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0u16;

    for c in text.chars() {
        let w = char_width(c);
        if current_width + w > target_width {
            break;
        }
        result.push(c);
        current_width += w;
    }

    result.push('…');
    result
}
