//! Core types for spark-timeline.
//!
//! Colors, cells and the small enums that timeline props are expressed in.
//! They flow from props through the resolver into the renderer.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Special values: r=-1 means "terminal default", r=-2 marks an ANSI palette
/// color whose index is stored in `g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    /// Transparent color.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Create an ANSI palette color (0-255).
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// Get ANSI palette index (only valid if is_ansi() returns true).
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }

    /// Create from an RGB integer (0xRRGGBB).
    ///
    /// ```
    /// use spark_timeline::types::Rgba;
    ///
    /// assert_eq!(Rgba::from_rgb_int(0x282a36), Rgba::rgb(40, 42, 54));
    /// ```
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Parse hex color string (#RGB, #RRGGBB, #RRGGBBAA). The `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        fn nibble(c: u8) -> Option<u8> {
            (c as char).to_digit(16).map(|d| d as u8)
        }

        fn byte(s: &[u8], i: usize) -> Option<u8> {
            Some((nibble(s[i])? << 4) | nibble(s[i + 1])?)
        }

        let bytes = hex.as_bytes();
        match bytes.len() {
            3 => {
                let r = nibble(bytes[0])?;
                let g = nibble(bytes[1])?;
                let b = nibble(bytes[2])?;
                Some(Self::rgb((r << 4) | r, (g << 4) | g, (b << 4) | b))
            }
            6 => Some(Self::rgb(byte(bytes, 0)?, byte(bytes, 2)?, byte(bytes, 4)?)),
            8 => Some(Self::new(
                byte(bytes, 0)?,
                byte(bytes, 2)?,
                byte(bytes, 4)?,
                byte(bytes, 6)?,
            )),
            _ => None,
        }
    }

    /// Parse a color string: hex, or one of the keywords `transparent`,
    /// `default`, `inherit`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        match input.to_lowercase().as_str() {
            "transparent" => Some(Self::TRANSPARENT),
            "default" | "inherit" => Some(Self::TERMINAL_DEFAULT),
            _ if input.starts_with('#') || input.chars().all(|c| c.is_ascii_hexdigit()) => {
                Self::from_hex(input)
            }
            _ => None,
        }
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::DIM`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// A single terminal cell. The painter produces these, the writer outputs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode codepoint (32 for space).
    pub char: u32,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// Timeline Enums
// =============================================================================

/// Side of the container the bullet/line gutter sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Align {
    #[default]
    Left = 0,
    Right = 1,
}

impl Align {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Bullet radius: a theme token or an explicit size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Radius {
    Xs,
    Sm,
    Md,
    Lg,
    /// Pill shape.
    #[default]
    Xl,
    Px(u16),
}

impl Radius {
    /// Parse a token (`xs`..`xl`) or a pixel count (`"12"`, `"12px"`).
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "xs" => Some(Self::Xs),
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            other => other
                .strip_suffix("px")
                .unwrap_or(other)
                .parse::<u16>()
                .ok()
                .map(Self::Px),
        }
    }
}

impl From<u16> for Radius {
    fn from(px: u16) -> Self {
        Self::Px(px)
    }
}

/// Stroke style of the line connecting a step to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum LineVariant {
    #[default]
    Solid = 0,
    Dashed = 1,
    Dotted = 2,
}

impl LineVariant {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "solid" => Some(Self::Solid),
            "dashed" => Some(Self::Dashed),
            "dotted" => Some(Self::Dotted),
            _ => None,
        }
    }

    /// Vertical glyph for this variant, light or heavy weight.
    pub const fn glyph(&self, heavy: bool) -> char {
        match (self, heavy) {
            (Self::Solid, false) => '│',
            (Self::Solid, true) => '┃',
            (Self::Dashed, false) => '╎',
            (Self::Dashed, true) => '╏',
            (Self::Dotted, false) => '┆',
            (Self::Dotted, true) => '┇',
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_ansi_marker() {
        let c = Rgba::ansi(12);
        assert!(c.is_ansi());
        assert!(!c.is_terminal_default());
        assert_eq!(c.ansi_index(), 12);
    }

    #[test]
    fn test_rgba_from_hex() {
        assert_eq!(Rgba::from_hex("#ff0000"), Some(Rgba::rgb(255, 0, 0)));
        assert_eq!(Rgba::from_hex("abc"), Some(Rgba::rgb(0xaa, 0xbb, 0xcc)));
        assert_eq!(Rgba::from_hex("#ff000080"), Some(Rgba::new(255, 0, 0, 128)));
        assert_eq!(Rgba::from_hex("  #AABBCC  "), Some(Rgba::rgb(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn test_rgba_from_hex_invalid() {
        assert!(Rgba::from_hex("#gg0000").is_none());
        assert!(Rgba::from_hex("#ff").is_none());
        assert!(Rgba::from_hex("").is_none());
        assert!(Rgba::from_hex("#").is_none());
    }

    #[test]
    fn test_rgba_parse_keywords() {
        assert_eq!(Rgba::parse("transparent"), Some(Rgba::TRANSPARENT));
        assert!(Rgba::parse("Default").unwrap().is_terminal_default());
        assert!(Rgba::parse("not-a-color").is_none());
        assert!(Rgba::parse("   ").is_none());
    }

    #[test]
    fn test_cell_default() {
        let cell = Cell::default();
        assert_eq!(cell.char, ' ' as u32);
        assert!(cell.fg.is_terminal_default());
        assert_eq!(cell.attrs, Attr::NONE);
    }

    #[test]
    fn test_align_from_str() {
        assert_eq!(Align::from_str("left"), Some(Align::Left));
        assert_eq!(Align::from_str("RIGHT"), Some(Align::Right));
        assert_eq!(Align::from_str("center"), None);
        assert_eq!(Align::default(), Align::Left);
    }

    #[test]
    fn test_radius_from_str() {
        assert_eq!(Radius::from_str("xl"), Some(Radius::Xl));
        assert_eq!(Radius::from_str("Sm"), Some(Radius::Sm));
        assert_eq!(Radius::from_str("12"), Some(Radius::Px(12)));
        assert_eq!(Radius::from_str("6px"), Some(Radius::Px(6)));
        assert_eq!(Radius::from_str("huge"), None);
        assert_eq!(Radius::default(), Radius::Xl);
    }

    #[test]
    fn test_line_variant_glyphs() {
        assert_eq!(LineVariant::from_str("dashed"), Some(LineVariant::Dashed));
        assert_eq!(LineVariant::Solid.glyph(false), '│');
        assert_eq!(LineVariant::Solid.glyph(true), '┃');
        assert_eq!(LineVariant::Dotted.glyph(false), '┆');
    }
}
