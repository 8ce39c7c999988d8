//! Timeline primitives.
//!
//! - [`timeline`] - Vertical step container: filters item children, resolves
//!   each step's activation and visuals, computes the gutter offset
//!
//! # Reactivity
//!
//! Props can be static values, signals or getters. Pass signals directly so
//! a derived built on [`timeline`] stays connected:
//!
//! ```ignore
//! // CORRECT - signal stays connected
//! TimelineProps { active: Some(progress.clone().into()), ..Default::default() };
//!
//! // WRONG - extracts value, breaks reactivity
//! TimelineProps { active: Some(progress.get().into()), ..Default::default() };
//! ```

pub mod timeline;
pub mod types;

pub use timeline::{
    compute_offset, resolve_step, timeline, timeline_layout, ResolvedStep, StepOverride,
    TimelineConfig, TimelineItemLayout, TimelineLayout, TimelineOffset,
};
pub use types::{
    filter_children_by_kind, ChildKind, PropValue, TimelineChild, TimelineItemProps,
    TimelineProps,
};
