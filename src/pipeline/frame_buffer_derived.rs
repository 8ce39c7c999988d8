//! FrameBuffer Derived - Reactive timeline painting.
//!
//! Re-paints whenever the timeline layout, the width, or the active theme
//! changes.

use spark_signals::{derived, Derived};

use crate::primitives::{PropValue, TimelineLayout};
use crate::renderer::{render_timeline, FrameBuffer};
use crate::theme::active_theme_signal;

/// Create the frame derived for a timeline.
///
/// `width` is in columns; bind it to a signal to follow terminal resizes.
pub fn create_timeline_frame_derived(
    layout_derived: Derived<TimelineLayout>,
    width: impl Into<PropValue<u16>>,
) -> Derived<FrameBuffer> {
    let theme_signal = active_theme_signal();
    let width = width.into();

    derived(move || {
        let theme = theme_signal.get();
        let layout = layout_derived.get();
        render_timeline(&layout, &theme, width.get())
    })
}

// =============================================================================
// Tests
// =============================================================================
