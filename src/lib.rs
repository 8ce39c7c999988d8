//! # spark-timeline
//!
//! Reactive vertical timeline for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! A timeline is a container plus an ordered list of item children. One
//! progress index (`active`) marks every item complete, active or pending,
//! and decides which connecting lines are highlighted. Items may override any
//! value the container would give them.
//!
//! ```text
//! TimelineProps + children → timeline() → TimelineLayout → render_timeline → FrameBuffer
//! ```
//!
//! The core (`primitives`) is pure: no I/O, no terminal, no global state.
//! The `pipeline` module wraps it in deriveds so that signal-bound props and
//! theme switches re-paint automatically.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Cell, Align, Radius, LineVariant)
//! - [`primitives`] - Timeline props, step resolution, offset computation
//! - [`theme`] - Semantic colors, radius scale, presets, active theme
//! - [`layout`] - Taffy placement and text measurement
//! - [`renderer`] - FrameBuffer painter and ANSI output
//! - [`pipeline`] - Reactive deriveds

pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use primitives::{
    compute_offset, filter_children_by_kind, resolve_step, timeline, timeline_layout, ChildKind,
    PropValue, ResolvedStep, StepOverride, TimelineChild, TimelineConfig, TimelineItemLayout,
    TimelineItemProps, TimelineLayout, TimelineOffset, TimelineProps,
};

pub use layout::{compute_geometry, string_width, truncate_text, wrap_text, TimelineGeometry};

pub use renderer::{render_timeline, write_buffer, FrameBuffer};

pub use pipeline::{create_timeline_derived, create_timeline_frame_derived};

pub use theme::{active_theme, set_custom_theme, set_theme, Theme, ThemeColor};
