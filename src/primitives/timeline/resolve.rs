//! Step Resolver - activation and visual parameters for one step.
//!
//! Pure function of `(index, total, override, config)`. No state, never fails.
//!
//! # Activation
//!
//! ```text
//! forward:  active      = progress >= index
//!           line_active = progress - 1 >= index
//! reverse:  active      = progress >= total - index - 1
//!           line_active = progress >= total - index - 1
//! ```
//!
//! The line below a step turns on one step after its bullet in forward mode.
//! Reverse mode uses the bullet threshold for the line too, with no lag.

use super::config::{StepOverride, TimelineConfig};
use crate::theme::ThemeColor;
use crate::types::{Align, Radius};

/// Resolved descriptor for one step, everything the painter needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStep {
    /// Position among item children only.
    pub index: usize,
    pub color: Option<ThemeColor>,
    pub radius: Radius,
    pub bullet_size: u16,
    pub active: bool,
    pub line_active: bool,
    pub align: Align,
    pub line_width: u16,
}

/// Resolve one step.
pub fn resolve_step(
    index: usize,
    total: usize,
    step: &StepOverride,
    config: &TimelineConfig,
) -> ResolvedStep {
    let progress = i64::from(config.active);
    let position = index as i64;

    let (active, line_active) = if config.reverse_active {
        let threshold = total as i64 - position - 1;
        (progress >= threshold, progress >= threshold)
    } else {
        (progress >= position, progress - 1 >= position)
    };

    ResolvedStep {
        index,
        color: step.color.clone().or_else(|| config.color.clone()),
        radius: step.radius.unwrap_or(config.radius),
        bullet_size: step.bullet_size.unwrap_or(config.bullet_size),
        active: step.active.unwrap_or(active),
        line_active: step.line_active.unwrap_or(line_active),
        align: config.align,
        line_width: config.line_width,
    }
}
