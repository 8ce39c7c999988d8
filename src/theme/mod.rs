//! Theme System for spark-timeline.
//!
//! Resolves the symbolic tokens timeline props are written in into concrete
//! terminal values:
//! - color tokens (`ThemeColor`) to `Rgba`, through the theme's semantic slots
//! - radius tokens (`Radius`) to pixels, through the theme's radius scale
//!
//! # Example
//!
//! ```rust
//! use spark_timeline::theme::{get_preset, ThemeColor};
//! use spark_timeline::types::Radius;
//!
//! let nord = get_preset("nord").unwrap();
//! let primary = nord.resolve_color(&ThemeColor::from("primary"));
//! assert_eq!(primary, nord.primary.resolve());
//! assert_eq!(nord.resolve_radius(Radius::Xl), 32);
//! ```

use crate::types::{Radius, Rgba};

pub mod presets;
pub mod state;

pub use presets::*;
pub use state::*;

// =============================================================================
// ThemeColor - A color that can be ANSI, RGB, or string
// =============================================================================

/// Theme color can be:
/// - `Default`: Terminal's default color
/// - `Ansi(n)`: ANSI palette index (0-255)
/// - `Rgb(rgba)`: Explicit RGB color
/// - `Str(s)`: A token (`"primary"`, `"teal"`) or a parseable color (`"#ff0000"`)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ThemeColor {
    #[default]
    Default,
    Ansi(u8),
    Rgb(Rgba),
    Str(String),
}

impl ThemeColor {
    /// Resolve to Rgba without a theme.
    ///
    /// `Str` values are parsed; unparseable strings (including tokens, which
    /// need a theme) come back magenta.
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
            Self::Str(s) => Rgba::parse(s).unwrap_or(Rgba::MAGENTA),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

/// `u8` is an ANSI index.
impl From<u8> for ThemeColor {
    fn from(index: u8) -> Self {
        Self::Ansi(index)
    }
}

impl From<Rgba> for ThemeColor {
    fn from(color: Rgba) -> Self {
        Self::Rgb(color)
    }
}

impl From<&str> for ThemeColor {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ThemeColor {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// `u32` is an RGB integer (0xRRGGBB).
impl From<u32> for ThemeColor {
    fn from(rgb: u32) -> Self {
        Self::Rgb(Rgba::from_rgb_int(rgb))
    }
}

// =============================================================================
// RadiusScale
// =============================================================================

/// Pixel values for the radius tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadiusScale {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self {
            xs: 2,
            sm: 4,
            md: 8,
            lg: 16,
            xl: 32,
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Theme definition: the semantic colors a timeline paints with and the
/// radius scale its bullets are shaped by.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme name (e.g., "dracula", "nord").
    pub name: String,
    pub description: String,

    /// Default accent for active steps without their own color.
    pub primary: ThemeColor,
    pub success: ThemeColor,
    pub warning: ThemeColor,
    pub error: ThemeColor,
    pub info: ThemeColor,

    /// Step titles.
    pub text: ThemeColor,
    /// Step content.
    pub text_muted: ThemeColor,

    /// Inactive bullets and lines.
    pub border: ThemeColor,
    pub background: ThemeColor,

    pub radius: RadiusScale,
}

impl Default for Theme {
    fn default() -> Self {
        terminal()
    }
}

impl Theme {
    /// Create a new theme with all default colors.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            primary: ThemeColor::Default,
            success: ThemeColor::Default,
            warning: ThemeColor::Default,
            error: ThemeColor::Default,
            info: ThemeColor::Default,
            text: ThemeColor::Default,
            text_muted: ThemeColor::Default,
            border: ThemeColor::Default,
            background: ThemeColor::Default,
            radius: RadiusScale::default(),
        }
    }

    /// Look up a semantic slot by name.
    pub fn slot(&self, name: &str) -> Option<&ThemeColor> {
        match name {
            "primary" => Some(&self.primary),
            "success" => Some(&self.success),
            "warning" => Some(&self.warning),
            "error" => Some(&self.error),
            "info" => Some(&self.info),
            "text" => Some(&self.text),
            "text_muted" | "dimmed" => Some(&self.text_muted),
            "border" => Some(&self.border),
            "background" => Some(&self.background),
            _ => None,
        }
    }

    /// Resolve a color token against this theme.
    ///
    /// Semantic slot names resolve through the theme, basic palette names to
    /// their ANSI index, anything else through [`ThemeColor::resolve`].
    pub fn resolve_color(&self, color: &ThemeColor) -> Rgba {
        let ThemeColor::Str(token) = color else {
            return color.resolve();
        };
        let token = token.trim().to_lowercase();

        if let Some(slot) = self.slot(&token) {
            return slot.resolve();
        }
        match palette_index(&token) {
            Some(index) => Rgba::ansi(index),
            None => color.resolve(),
        }
    }

    /// Resolve a radius token to pixels.
    pub fn resolve_radius(&self, radius: Radius) -> u16 {
        match radius {
            Radius::Xs => self.radius.xs,
            Radius::Sm => self.radius.sm,
            Radius::Md => self.radius.md,
            Radius::Lg => self.radius.lg,
            Radius::Xl => self.radius.xl,
            Radius::Px(px) => px,
        }
    }
}

/// ANSI index for a basic palette color name.
fn palette_index(name: &str) -> Option<u8> {
    match name {
        "dark" | "black" => Some(0),
        "red" => Some(1),
        "green" | "lime" => Some(2),
        "yellow" | "orange" => Some(3),
        "blue" | "indigo" => Some(4),
        "grape" | "violet" | "magenta" | "pink" => Some(5),
        "cyan" | "teal" => Some(6),
        "gray" | "grey" => Some(8),
        "white" => Some(15),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
