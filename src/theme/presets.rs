//! Theme presets for spark-timeline.
//!
//! - terminal (default - uses ANSI colors)
//! - dracula
//! - nord
//! - gruvbox

use super::{RadiusScale, Theme, ThemeColor};
use crate::types::Rgba;

// =============================================================================
// Terminal Theme (Default)
// =============================================================================

/// Terminal theme - uses ANSI colors to respect the user's terminal scheme.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        description: "Uses terminal default colors".to_string(),
        primary: ThemeColor::Ansi(12), // bright blue
        success: ThemeColor::Ansi(2),
        warning: ThemeColor::Ansi(3),
        error: ThemeColor::Ansi(1),
        info: ThemeColor::Ansi(6),
        text: ThemeColor::Default,
        text_muted: ThemeColor::Ansi(8),
        border: ThemeColor::Ansi(8),
        background: ThemeColor::Default,
        radius: RadiusScale::default(),
    }
}

// =============================================================================
// RGB Themes
// =============================================================================

/// Dracula - dark theme with vivid colors.
pub fn dracula() -> Theme {
    Theme {
        name: "dracula".to_string(),
        description: "Dracula dark theme".to_string(),
        primary: ThemeColor::Rgb(Rgba::from_rgb_int(0xbd93f9)), // purple
        success: ThemeColor::Rgb(Rgba::from_rgb_int(0x50fa7b)),
        warning: ThemeColor::Rgb(Rgba::from_rgb_int(0xf1fa8c)),
        error: ThemeColor::Rgb(Rgba::from_rgb_int(0xff5555)),
        info: ThemeColor::Rgb(Rgba::from_rgb_int(0x8be9fd)),
        text: ThemeColor::Rgb(Rgba::from_rgb_int(0xf8f8f2)),
        text_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x6272a4)),
        border: ThemeColor::Rgb(Rgba::from_rgb_int(0x44475a)),
        background: ThemeColor::Rgb(Rgba::from_rgb_int(0x282a36)),
        radius: RadiusScale::default(),
    }
}

/// Nord - arctic, north-bluish palette.
pub fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        description: "Nord arctic theme".to_string(),
        primary: ThemeColor::Rgb(Rgba::from_rgb_int(0x88c0d0)), // frost cyan
        success: ThemeColor::Rgb(Rgba::from_rgb_int(0xa3be8c)),
        warning: ThemeColor::Rgb(Rgba::from_rgb_int(0xebcb8b)),
        error: ThemeColor::Rgb(Rgba::from_rgb_int(0xbf616a)),
        info: ThemeColor::Rgb(Rgba::from_rgb_int(0x81a1c1)),
        text: ThemeColor::Rgb(Rgba::from_rgb_int(0xd8dee9)),
        text_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x4c566a)),
        border: ThemeColor::Rgb(Rgba::from_rgb_int(0x4c566a)),
        background: ThemeColor::Rgb(Rgba::from_rgb_int(0x2e3440)),
        radius: RadiusScale::default(),
    }
}

/// Gruvbox - retro groove, with a tighter radius scale.
pub fn gruvbox() -> Theme {
    Theme {
        name: "gruvbox".to_string(),
        description: "Gruvbox retro theme".to_string(),
        primary: ThemeColor::Rgb(Rgba::from_rgb_int(0xfe8019)), // orange
        success: ThemeColor::Rgb(Rgba::from_rgb_int(0xb8bb26)),
        warning: ThemeColor::Rgb(Rgba::from_rgb_int(0xfabd2f)),
        error: ThemeColor::Rgb(Rgba::from_rgb_int(0xfb4934)),
        info: ThemeColor::Rgb(Rgba::from_rgb_int(0x83a598)),
        text: ThemeColor::Rgb(Rgba::from_rgb_int(0xebdbb2)),
        text_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x928374)),
        border: ThemeColor::Rgb(Rgba::from_rgb_int(0x504945)),
        background: ThemeColor::Rgb(Rgba::from_rgb_int(0x282828)),
        radius: RadiusScale {
            xs: 1,
            sm: 2,
            md: 4,
            lg: 6,
            xl: 8,
        },
    }
}

// =============================================================================
// Lookup
// =============================================================================

/// Get a preset by name (case-insensitive, `_` ignored).
pub fn get_preset(name: &str) -> Option<Theme> {
    match name.to_lowercase().replace('_', "").as_str() {
        "terminal" => Some(terminal()),
        "dracula" => Some(dracula()),
        "nord" => Some(nord()),
        "gruvbox" => Some(gruvbox()),
        _ => None,
    }
}

/// List all available preset names.
///
/// ```rust
/// use spark_timeline::theme::preset_names;
///
/// assert!(preset_names().contains(&"terminal"));
/// ```
pub fn preset_names() -> &'static [&'static str] {
    &["terminal", "dracula", "nord", "gruvbox"]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_preset() {
        let t = terminal();
        assert_eq!(t.name, "terminal");
        assert_eq!(t.primary, ThemeColor::Ansi(12));
        assert!(t.text.is_default());
    }

    #[test]
    fn test_all_presets_exist() {
        for name in preset_names() {
            let theme = get_preset(name);
            assert!(theme.is_some(), "Preset '{}' should exist", name);
            assert_eq!(theme.map(|t| t.name), Some(name.to_string()));
        }
    }

    #[test]
    fn test_get_preset_case_insensitive() {
        assert!(get_preset("DRACULA").is_some());
        assert!(get_preset("Nord").is_some());
    }

    #[test]
    fn test_get_preset_invalid() {
        assert!(get_preset("nonexistent").is_none());
        assert!(get_preset("").is_none());
    }

    #[test]
    fn test_gruvbox_radius_scale() {
        let t = gruvbox();
        assert_eq!(t.resolve_radius(crate::types::Radius::Xl), 8);
    }
}
