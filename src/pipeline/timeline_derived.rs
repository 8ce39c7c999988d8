//! Timeline Derived - Reactive timeline layout.
//!
//! Re-runs whenever any prop bound to a signal or getter changes, on the
//! container or on any item.

use spark_signals::{derived, Derived};

use crate::primitives::{timeline, TimelineChild, TimelineLayout, TimelineProps};

/// Create the timeline derived.
///
/// Takes ownership of the props and children; bind props to signals to
/// drive updates.
pub fn create_timeline_derived(
    props: TimelineProps,
    children: Vec<TimelineChild>,
) -> Derived<TimelineLayout> {
    derived(move || timeline(&props, &children))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{PropValue, TimelineItemProps};
    use spark_signals::signal;

    fn steps(n: usize) -> Vec<TimelineChild> {
        (0..n)
            .map(|i| TimelineChild::item(TimelineItemProps::titled(format!("step {}", i))))
            .collect()
    }

    fn active_flags(layout: &TimelineLayout) -> Vec<bool> {
        layout.items.iter().map(|item| item.step.active).collect()
    }

    #[test]
    fn test_timeline_derived_static() {
        let props = TimelineProps {
            active: Some(PropValue::Static(0)),
            ..Default::default()
        };
        let layout_derived = create_timeline_derived(props, steps(2));
        assert_eq!(active_flags(&layout_derived.get()), vec![true, false]);
    }

    #[test]
    fn test_timeline_derived_follows_active_signal() {
        let progress = signal(0);
        let props = TimelineProps {
            active: Some(progress.clone().into()),
            ..Default::default()
        };
        let layout_derived = create_timeline_derived(props, steps(3));
        assert_eq!(active_flags(&layout_derived.get()), vec![true, false, false]);

        progress.set(2);
        assert_eq!(active_flags(&layout_derived.get()), vec![true, true, true]);

        progress.set(-1);
        assert_eq!(active_flags(&layout_derived.get()), vec![false, false, false]);
    }

    #[test]
    fn test_timeline_derived_follows_reverse_signal() {
        let reverse = signal(false);
        let props = TimelineProps {
            active: Some(PropValue::Static(0)),
            reverse_active: Some(reverse.clone().into()),
            ..Default::default()
        };
        let layout_derived = create_timeline_derived(props, steps(3));
        assert_eq!(active_flags(&layout_derived.get()), vec![true, false, false]);

        reverse.set(true);
        assert_eq!(active_flags(&layout_derived.get()), vec![false, false, true]);
    }

    #[test]
    fn test_timeline_derived_follows_item_override() {
        let forced = signal(false);
        let children = vec![
            TimelineChild::item(TimelineItemProps::titled("a")),
            TimelineChild::item(TimelineItemProps {
                active: Some(forced.clone().into()),
                ..TimelineItemProps::titled("b")
            }),
        ];
        let props = TimelineProps {
            active: Some(PropValue::Static(1)),
            ..Default::default()
        };
        let layout_derived = create_timeline_derived(props, children);
        assert_eq!(active_flags(&layout_derived.get()), vec![true, false]);

        forced.set(true);
        assert_eq!(active_flags(&layout_derived.get()), vec![true, true]);
    }

    #[test]
    fn test_timeline_derived_follows_align_signal() {
        use crate::primitives::TimelineOffset;
        use crate::types::Align;

        let align = signal(Align::Left);
        let props = TimelineProps {
            align: Some(align.clone().into()),
            ..Default::default()
        };
        let layout_derived = create_timeline_derived(props, steps(1));
        assert_eq!(layout_derived.get().offset, TimelineOffset::Left(12.0));

        align.set(Align::Right);
        assert_eq!(layout_derived.get().offset, TimelineOffset::Right(12.0));
    }
}
