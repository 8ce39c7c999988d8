//! Timeline painter - draws a TimelineLayout into a FrameBuffer.
//!
//! Geometry comes from the layout module; this file only decides glyphs,
//! colors and attributes.

use crate::layout::{compute_geometry, string_width, truncate_text, wrap_text, TimelineGeometry};
use crate::primitives::{TimelineItemLayout, TimelineLayout, TimelineOffset};
use crate::theme::Theme;
use crate::types::{Attr, Rgba};

use super::buffer::FrameBuffer;

// =============================================================================
// Glyphs
// =============================================================================

/// Line weight switches to heavy above this width, in pixels.
const HEAVY_LINE_PX: u16 = 2;

/// Bullet glyph for an item.
///
/// Round when the resolved radius covers half the bullet, square otherwise.
pub fn bullet_glyph(item: &TimelineItemLayout, theme: &Theme) -> char {
    if let Some(custom) = item.bullet {
        return custom;
    }
    let step = &item.step;
    let round = u32::from(theme.resolve_radius(step.radius)) * 2 >= u32::from(step.bullet_size);
    match (round, step.active) {
        (true, true) => '●',
        (true, false) => '○',
        (false, true) => '■',
        (false, false) => '□',
    }
}

/// Accent color of a step: its own color, or the theme primary.
fn accent(item: &TimelineItemLayout, theme: &Theme) -> Rgba {
    match &item.step.color {
        Some(color) => theme.resolve_color(color),
        None => theme.resolve_color(&theme.primary),
    }
}

// =============================================================================
// Painting
// =============================================================================

struct Painter<'a> {
    buffer: FrameBuffer,
    geometry: &'a TimelineGeometry,
    theme: &'a Theme,
    right: bool,
}

impl Painter<'_> {
    /// Draw one line of text in the text region, honoring alignment.
    fn text_row(&mut self, y: u16, text: &str, fg: Rgba, attrs: Attr) {
        let g = self.geometry;
        let end = g.text_x + g.text_width;
        let line = truncate_text(text, g.text_width);
        let x = if self.right {
            end.saturating_sub(string_width(&line))
        } else {
            g.text_x
        };
        self.buffer.draw_text(x, y, &line, fg, attrs, end);
    }

    fn item(&mut self, item: &TimelineItemLayout, y: u16) {
        let theme = self.theme;
        let bullet_fg = if item.step.active {
            accent(item, theme)
        } else {
            theme.resolve_color(&theme.border)
        };
        let bullet_attrs = if item.step.active { Attr::BOLD } else { Attr::NONE };
        self.buffer.set_char(
            self.geometry.bullet_x,
            y,
            bullet_glyph(item, theme),
            bullet_fg,
            bullet_attrs,
        );

        if let Some(title) = &item.title {
            self.text_row(y, title, theme.resolve_color(&theme.text), Attr::BOLD);
        }

        let width = self.geometry.text_width;
        if let Some(content) = item.content.as_deref().filter(|_| width > 0) {
            let muted = theme.resolve_color(&theme.text_muted);
            let rows = (y.saturating_add(1)..self.buffer.height()).zip(wrap_text(content, width));
            for (row, line) in rows {
                self.text_row(row, &line, muted, Attr::NONE);
            }
        }
    }

    /// Connecting line from below `item` down to the row above `next_y`.
    fn line(&mut self, item: &TimelineItemLayout, from_y: u16, next_y: u16) {
        let glyph = item.line_variant.glyph(item.step.line_width > HEAVY_LINE_PX);
        let fg = if item.step.line_active {
            accent(item, self.theme)
        } else {
            self.theme.resolve_color(&self.theme.border)
        };
        for y in from_y..next_y {
            self.buffer.set_char(self.geometry.bullet_x, y, glyph, fg, Attr::NONE);
        }
    }
}

/// Paint `layout` into a buffer `width` columns wide, as tall as the timeline.
pub fn render_timeline(layout: &TimelineLayout, theme: &Theme, width: u16) -> FrameBuffer {
    let geometry = match compute_geometry(layout, width) {
        Ok(geometry) => geometry,
        Err(err) => {
            log::warn!("timeline: layout failed: {}", err);
            return FrameBuffer::new(width, 0);
        }
    };

    let mut painter = Painter {
        buffer: FrameBuffer::new(width, geometry.height),
        geometry: &geometry,
        theme,
        right: matches!(layout.offset, TimelineOffset::Right(_)),
    };

    for (index, (item, bounds)) in layout.items.iter().zip(&geometry.items).enumerate() {
        painter.item(item, bounds.y);
        if let Some(next) = geometry.items.get(index + 1) {
            painter.line(item, bounds.y.saturating_add(1), next.y);
        }
    }

    log::trace!(
        "timeline: painted {} items into {}x{} with theme '{}'",
        layout.items.len(),
        width,
        geometry.height,
        theme.name
    );

    painter.buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{timeline, PropValue, TimelineChild, TimelineItemProps, TimelineProps};
    use crate::theme::{terminal, ThemeColor};
    use crate::types::{Align, LineVariant, Radius};

    fn steps(titles: &[&str]) -> Vec<TimelineChild> {
        titles
            .iter()
            .map(|t| TimelineChild::item(TimelineItemProps::titled(*t)))
            .collect()
    }

    fn props(active: i32) -> TimelineProps {
        TimelineProps {
            active: Some(PropValue::Static(active)),
            ..Default::default()
        }
    }

    fn char_at(buf: &FrameBuffer, x: u16, y: u16) -> char {
        char::from_u32(buf.get(x, y).unwrap().char).unwrap()
    }

    #[test]
    fn test_render_marks_progress() {
        let layout = timeline(&props(1), &steps(&["Ordered", "Shipped", "Delivered"]));
        let buf = render_timeline(&layout, &terminal(), 20);

        // rows: item 0 at 0, item 1 at 2, item 2 at 4
        assert_eq!(buf.height(), 5);
        assert_eq!(buf.row_text(0).trim_end(), " ● Ordered");
        assert_eq!(buf.row_text(2).trim_end(), " ● Shipped");
        assert_eq!(buf.row_text(4).trim_end(), " ○ Delivered");
    }

    #[test]
    fn test_render_line_colors_follow_line_active() {
        let theme = terminal();
        let layout = timeline(&props(1), &steps(&["a", "b", "c"]));
        let buf = render_timeline(&layout, &theme, 20);

        // Default line width 4px is heavy
        assert_eq!(char_at(&buf, 1, 1), '┃');
        assert_eq!(char_at(&buf, 1, 3), '┃');

        // Step 0 leads into the active step, step 1 does not
        assert_eq!(buf.get(1, 1).unwrap().fg, theme.primary.resolve());
        assert_eq!(buf.get(1, 3).unwrap().fg, theme.border.resolve());
    }

    #[test]
    fn test_render_no_line_after_last_item() {
        let layout = timeline(&props(5), &steps(&["a", "b"]));
        let buf = render_timeline(&layout, &terminal(), 10);
        assert_eq!(buf.height(), 3);
        assert_eq!(char_at(&buf, 1, 1), '┃');
        assert_eq!(char_at(&buf, 1, 2), '●');
    }

    #[test]
    fn test_render_thin_dashed_line() {
        let p = TimelineProps {
            active: Some(PropValue::Static(0)),
            line_width: Some(PropValue::Static(2)),
            ..Default::default()
        };
        let children = vec![
            TimelineChild::item(TimelineItemProps {
                line_variant: Some(PropValue::Static(LineVariant::Dashed)),
                ..TimelineItemProps::titled("a")
            }),
            TimelineChild::item(TimelineItemProps::titled("b")),
        ];
        let layout = timeline(&p, &children);
        let buf = render_timeline(&layout, &terminal(), 10);
        assert_eq!(char_at(&buf, 1, 1), '╎');
    }

    #[test]
    fn test_render_active_bullet_uses_step_color() {
        let theme = terminal();
        let p = TimelineProps {
            active: Some(PropValue::Static(0)),
            color: Some("red".into()),
            ..Default::default()
        };
        let layout = timeline(&p, &steps(&["a", "b"]));
        let buf = render_timeline(&layout, &theme, 10);

        let active = buf.get(1, 0).unwrap();
        assert_eq!(active.fg, Rgba::ansi(1));
        assert!(active.attrs.contains(Attr::BOLD));

        let pending = buf.get(1, 2).unwrap();
        assert_eq!(pending.fg, theme.border.resolve());
        assert_eq!(pending.attrs, Attr::NONE);
    }

    #[test]
    fn test_render_item_color_override() {
        let children = vec![TimelineChild::item(TimelineItemProps {
            color: Some(PropValue::Static(ThemeColor::Ansi(2))),
            ..TimelineItemProps::titled("a")
        })];
        let layout = timeline(&props(0), &children);
        let buf = render_timeline(&layout, &terminal(), 10);
        assert_eq!(buf.get(1, 0).unwrap().fg, Rgba::ansi(2));
    }

    #[test]
    fn test_render_square_bullet_for_small_radius() {
        let p = TimelineProps {
            active: Some(PropValue::Static(0)),
            radius: Some(PropValue::Static(Radius::Px(2))),
            ..Default::default()
        };
        let layout = timeline(&p, &steps(&["a", "b"]));
        let buf = render_timeline(&layout, &terminal(), 10);
        assert_eq!(char_at(&buf, 1, 0), '■');
        assert_eq!(char_at(&buf, 1, 2), '□');
    }

    #[test]
    fn test_render_custom_bullet() {
        let children = vec![TimelineChild::item(TimelineItemProps {
            bullet: Some(PropValue::Static('✔')),
            ..TimelineItemProps::titled("done")
        })];
        let layout = timeline(&props(0), &children);
        let buf = render_timeline(&layout, &terminal(), 12);
        assert_eq!(char_at(&buf, 1, 0), '✔');
    }

    #[test]
    fn test_render_right_aligned() {
        let p = TimelineProps {
            active: Some(PropValue::Static(0)),
            align: Some(PropValue::Static(Align::Right)),
            ..Default::default()
        };
        let layout = timeline(&p, &steps(&["abc", "de"]));
        let buf = render_timeline(&layout, &terminal(), 10);

        // gutter 2 cells: bullet at column 8, text ends at column 7
        assert_eq!(buf.row_text(0), "    abc ● ");
        assert_eq!(buf.row_text(2), "     de ○ ");
        assert_eq!(char_at(&buf, 8, 1), '┃');
    }

    #[test]
    fn test_render_content_is_wrapped_and_muted() {
        let theme = terminal();
        let children = vec![TimelineChild::item(TimelineItemProps {
            content: Some("abcdefgh".into()),
            ..TimelineItemProps::titled("t")
        })];
        let layout = timeline(&props(0), &children);
        // text region: 8 - 3 = 5 columns
        let buf = render_timeline(&layout, &theme, 8);

        assert_eq!(buf.height(), 3);
        assert_eq!(buf.row_text(1).trim_end(), "   abcde");
        assert_eq!(buf.row_text(2).trim_end(), "   fgh");
        assert_eq!(buf.get(3, 1).unwrap().fg, theme.text_muted.resolve());
        assert!(buf.get(3, 0).unwrap().attrs.contains(Attr::BOLD));
    }

    #[test]
    fn test_render_empty_timeline() {
        let layout = timeline(&props(0), &[]);
        let buf = render_timeline(&layout, &terminal(), 10);
        assert_eq!(buf.height(), 0);
        assert_eq!(buf.to_plain_string(), "");
    }

    #[test]
    fn test_render_very_long_content_is_clipped() {
        let children = vec![TimelineChild::item(TimelineItemProps {
            content: Some("x\n".repeat(70_000).into()),
            ..TimelineItemProps::titled("long")
        })];
        let layout = timeline(&props(0), &children);
        let buf = render_timeline(&layout, &terminal(), 20);

        assert_eq!(buf.height(), u16::MAX);
        assert_eq!(buf.row_text(0).trim_end(), " ● long");
        assert_eq!(buf.row_text(u16::MAX - 1).trim_end(), "   x");
    }

    #[test]
    fn test_render_too_narrow_for_text() {
        let children = vec![
            TimelineChild::item(TimelineItemProps {
                content: Some("hidden".into()),
                ..TimelineItemProps::titled("a")
            }),
            TimelineChild::item(TimelineItemProps::titled("b")),
        ];
        let layout = timeline(&props(0), &children);
        let buf = render_timeline(&layout, &terminal(), 3);

        assert_eq!(buf.height(), 3);
        assert_eq!(buf.to_plain_string(), " ●\n ┃\n ○");
    }
}
