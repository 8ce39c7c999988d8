//! Timeline configuration snapshots.
//!
//! Props are reactive; the resolver works on plain values. These types are
//! the snapshot taken at the start of every computation, with the container
//! defaults applied here and nowhere else.

use crate::primitives::types::{read, TimelineItemProps, TimelineProps};
use crate::theme::ThemeColor;
use crate::types::{Align, Radius};

pub const DEFAULT_ACTIVE: i32 = -1;
pub const DEFAULT_RADIUS: Radius = Radius::Xl;
pub const DEFAULT_BULLET_SIZE: u16 = 20;
pub const DEFAULT_ALIGN: Align = Align::Left;
pub const DEFAULT_LINE_WIDTH: u16 = 4;
pub const DEFAULT_REVERSE_ACTIVE: bool = false;

/// Container-level configuration, immutable for one computation.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineConfig {
    /// Progress index. Not bounds-checked: negative or past-the-end is fine.
    pub active: i32,
    pub color: Option<ThemeColor>,
    pub radius: Radius,
    pub bullet_size: u16,
    pub align: Align,
    pub line_width: u16,
    pub reverse_active: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            active: DEFAULT_ACTIVE,
            color: None,
            radius: DEFAULT_RADIUS,
            bullet_size: DEFAULT_BULLET_SIZE,
            align: DEFAULT_ALIGN,
            line_width: DEFAULT_LINE_WIDTH,
            reverse_active: DEFAULT_REVERSE_ACTIVE,
        }
    }
}

impl TimelineConfig {
    /// Snapshot props, filling absent fields with the defaults.
    pub fn from_props(props: &TimelineProps) -> Self {
        Self {
            active: read(&props.active).unwrap_or(DEFAULT_ACTIVE),
            color: read(&props.color),
            radius: read(&props.radius).unwrap_or(DEFAULT_RADIUS),
            bullet_size: read(&props.bullet_size).unwrap_or(DEFAULT_BULLET_SIZE),
            align: read(&props.align).unwrap_or(DEFAULT_ALIGN),
            line_width: read(&props.line_width).unwrap_or(DEFAULT_LINE_WIDTH),
            reverse_active: read(&props.reverse_active).unwrap_or(DEFAULT_REVERSE_ACTIVE),
        }
    }
}

/// Per-step overrides. A present field replaces the container-derived value,
/// an explicit `Some(false)` included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepOverride {
    pub color: Option<ThemeColor>,
    pub radius: Option<Radius>,
    pub bullet_size: Option<u16>,
    pub active: Option<bool>,
    pub line_active: Option<bool>,
}

impl StepOverride {
    pub fn from_props(props: &TimelineItemProps) -> Self {
        Self {
            color: read(&props.color),
            radius: read(&props.radius),
            bullet_size: read(&props.bullet_size),
            active: read(&props.active),
            line_active: read(&props.line_active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::types::PropValue;

    #[test]
    fn test_defaults() {
        let config = TimelineConfig::default();
        assert_eq!(config.active, -1);
        assert_eq!(config.color, None);
        assert_eq!(config.radius, Radius::Xl);
        assert_eq!(config.bullet_size, 20);
        assert_eq!(config.align, Align::Left);
        assert_eq!(config.line_width, 4);
        assert!(!config.reverse_active);
    }

    #[test]
    fn test_from_empty_props_matches_default() {
        assert_eq!(
            TimelineConfig::from_props(&TimelineProps::default()),
            TimelineConfig::default()
        );
    }

    #[test]
    fn test_from_props_overrides_defaults() {
        let props = TimelineProps {
            active: Some(PropValue::Static(2)),
            color: Some("teal".into()),
            align: Some(PropValue::Static(Align::Right)),
            bullet_size: Some(PropValue::Static(30)),
            ..Default::default()
        };
        let config = TimelineConfig::from_props(&props);
        assert_eq!(config.active, 2);
        assert_eq!(config.color, Some(ThemeColor::from("teal")));
        assert_eq!(config.align, Align::Right);
        assert_eq!(config.bullet_size, 30);
        assert_eq!(config.line_width, DEFAULT_LINE_WIDTH);
    }

    #[test]
    fn test_step_override_keeps_explicit_false() {
        let props = TimelineItemProps {
            active: Some(PropValue::Static(false)),
            ..Default::default()
        };
        let o = StepOverride::from_props(&props);
        assert_eq!(o.active, Some(false));
        assert_eq!(o.line_active, None);
    }
}
