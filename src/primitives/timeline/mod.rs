//! Timeline Primitive - Vertical step container.
//!
//! Arranges item children along a line and marks each one complete, active or
//! pending from a single progress index.
//!
//! # Pipeline
//!
//! ```text
//! children → filter items → resolve_step per item → offset → TimelineLayout
//! ```
//!
//! The result is a plain descriptor: the renderer paints it, nothing here
//! touches a buffer or the terminal.
//!
//! # Example
//!
//! ```
//! use spark_timeline::primitives::{timeline, TimelineChild, TimelineItemProps, TimelineProps, PropValue};
//!
//! let props = TimelineProps {
//!     active: Some(PropValue::Static(1)),
//!     ..Default::default()
//! };
//! let children = vec![
//!     TimelineChild::item(TimelineItemProps::titled("Ordered")),
//!     TimelineChild::text("not a step"),
//!     TimelineChild::item(TimelineItemProps::titled("Shipped")),
//!     TimelineChild::item(TimelineItemProps::titled("Delivered")),
//! ];
//!
//! let layout = timeline(&props, &children);
//! assert_eq!(layout.items.len(), 3);
//! assert_eq!(layout.offset.padding_left(), Some(12.0));
//! assert!(layout.items[1].step.active);
//! assert!(!layout.items[1].step.line_active);
//! ```

pub mod config;
pub mod resolve;

pub use config::{StepOverride, TimelineConfig};
pub use resolve::{resolve_step, ResolvedStep};

use super::types::{filter_children_by_kind, read, ChildKind, TimelineChild, TimelineItemProps, TimelineProps};
use crate::types::{Align, LineVariant};

// =============================================================================
// Types
// =============================================================================

/// Padding applied to the container on the gutter side, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineOffset {
    Left(f32),
    Right(f32),
}

impl TimelineOffset {
    pub fn padding_left(&self) -> Option<f32> {
        match self {
            Self::Left(px) => Some(*px),
            Self::Right(_) => None,
        }
    }

    pub fn padding_right(&self) -> Option<f32> {
        match self {
            Self::Left(_) => None,
            Self::Right(px) => Some(*px),
        }
    }

    /// Padding in pixels, whichever side it is on.
    pub fn value(&self) -> f32 {
        match self {
            Self::Left(px) | Self::Right(px) => *px,
        }
    }
}

/// One laid-out item: the resolved step plus the content it displays.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineItemLayout {
    pub step: ResolvedStep,
    pub title: Option<String>,
    pub content: Option<String>,
    pub bullet: Option<char>,
    pub line_variant: LineVariant,
}

/// Output of a timeline computation.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub offset: TimelineOffset,
    /// Items in declared order, `items[i].step.index == i`.
    pub items: Vec<TimelineItemLayout>,
}

// =============================================================================
// Computation
// =============================================================================

/// Container offset: half the bullet plus half the line, on the aligned side.
///
/// Uses the container bullet size; per-item overrides never move the gutter.
pub fn compute_offset(config: &TimelineConfig) -> TimelineOffset {
    let px = f32::from(config.bullet_size) / 2.0 + f32::from(config.line_width) / 2.0;
    match config.align {
        Align::Left => TimelineOffset::Left(px),
        Align::Right => TimelineOffset::Right(px),
    }
}

/// Lay out a timeline from a configuration snapshot.
///
/// Non-item children are dropped and take no index.
pub fn timeline_layout(config: &TimelineConfig, children: &[TimelineChild]) -> TimelineLayout {
    let items: Vec<&TimelineItemProps> = filter_children_by_kind(children, ChildKind::Item)
        .into_iter()
        .filter_map(|child| match child {
            TimelineChild::Item(props) => Some(props),
            TimelineChild::Text(_) => None,
        })
        .collect();
    let total = items.len();

    log::trace!(
        "timeline: {} steps, {} other children dropped, active={} reverse={}",
        total,
        children.len() - total,
        config.active,
        config.reverse_active
    );

    let items = items
        .into_iter()
        .enumerate()
        .map(|(index, props)| TimelineItemLayout {
            step: resolve_step(index, total, &StepOverride::from_props(props), config),
            title: read(&props.title),
            content: read(&props.content),
            bullet: read(&props.bullet),
            line_variant: read(&props.line_variant).unwrap_or_default(),
        })
        .collect();

    TimelineLayout {
        offset: compute_offset(config),
        items,
    }
}

/// Lay out a timeline straight from props.
///
/// Reads every prop once; inside a derived this subscribes to every signal
/// the props are bound to.
pub fn timeline(props: &TimelineProps, children: &[TimelineChild]) -> TimelineLayout {
    timeline_layout(&TimelineConfig::from_props(props), children)
}

// =============================================================================
// Tests
// =============================================================================
