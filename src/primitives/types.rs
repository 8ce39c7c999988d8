//! Primitive types - Props and child declarations.
//!
//! Props support static values, signals, and getters for reactivity. They are
//! read fresh every time a timeline is computed.

use std::rc::Rc;

use spark_signals::Signal;

use crate::theme::ThemeColor;
use crate::types::{Align, LineVariant, Radius};

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// Reading a `Signal` or a getter inside a derived creates a dependency, so
/// the timeline recomputes when the value changes.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value.
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

impl From<&str> for PropValue<ThemeColor> {
    fn from(value: &str) -> Self {
        PropValue::Static(ThemeColor::from(value))
    }
}

/// Read an optional prop.
pub(crate) fn read<T: Clone + PartialEq + 'static>(prop: &Option<PropValue<T>>) -> Option<T> {
    prop.as_ref().map(PropValue::get)
}

// =============================================================================
// Timeline Props
// =============================================================================

/// Container-level properties for the Timeline component.
///
/// Every field is optional; absent fields take the named defaults in
/// [`crate::primitives::timeline::config`].
///
/// # Example
///
/// ```ignore
/// use spark_timeline::primitives::{TimelineProps, PropValue};
/// use spark_signals::signal;
///
/// let progress = signal(1);
///
/// let props = TimelineProps {
///     active: Some(progress.clone().into()),
///     color: Some("teal".into()),
///     bullet_size: Some(24u16.into()),
///     ..Default::default()
/// };
///
/// // Later: advance the timeline
/// progress.set(2);
/// ```
#[derive(Clone, Default)]
pub struct TimelineProps {
    /// Index of the active (last completed) step. Default: -1.
    pub active: Option<PropValue<i32>>,

    /// Active color token. Default: none (theme primary at paint time).
    pub color: Option<PropValue<ThemeColor>>,

    /// Bullet radius token or pixels. Default: `Radius::Xl`.
    pub radius: Option<PropValue<Radius>>,

    /// Bullet size in pixels. Default: 20.
    pub bullet_size: Option<PropValue<u16>>,

    /// Gutter side. Default: left.
    pub align: Option<PropValue<Align>>,

    /// Line width in pixels. Default: 4.
    pub line_width: Option<PropValue<u16>>,

    /// Reverse the active direction without reordering items. Default: false.
    pub reverse_active: Option<PropValue<bool>>,
}

// =============================================================================
// Timeline Item Props
// =============================================================================

/// Properties for one Timeline item (step).
///
/// `color`, `radius`, `bullet_size`, `active` and `line_active` override the
/// values derived from the container when present.
#[derive(Clone, Default)]
pub struct TimelineItemProps {
    pub color: Option<PropValue<ThemeColor>>,
    pub radius: Option<PropValue<Radius>>,
    pub bullet_size: Option<PropValue<u16>>,
    pub active: Option<PropValue<bool>>,
    pub line_active: Option<PropValue<bool>>,

    /// Title shown next to the bullet.
    pub title: Option<PropValue<String>>,
    /// Body text below the title.
    pub content: Option<PropValue<String>>,
    /// Custom bullet glyph.
    pub bullet: Option<PropValue<char>>,
    /// Stroke of the line below this item.
    pub line_variant: Option<PropValue<LineVariant>>,
}

impl TimelineItemProps {
    /// Item with just a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(PropValue::Static(title.into())),
            ..Default::default()
        }
    }
}

// =============================================================================
// Children
// =============================================================================

/// Declared kind of a timeline child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    Item,
    Text,
}

/// A child declaration passed to the timeline.
///
/// Only `Item` children take part in layout; anything else is dropped.
#[derive(Clone)]
pub enum TimelineChild {
    Item(TimelineItemProps),
    Text(PropValue<String>),
}

impl TimelineChild {
    pub fn kind(&self) -> ChildKind {
        match self {
            Self::Item(_) => ChildKind::Item,
            Self::Text(_) => ChildKind::Text,
        }
    }

    pub fn item(props: TimelineItemProps) -> Self {
        Self::Item(props)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(PropValue::Static(content.into()))
    }
}

impl From<TimelineItemProps> for TimelineChild {
    fn from(props: TimelineItemProps) -> Self {
        Self::Item(props)
    }
}

/// Ordered subsequence of children matching `kind`.
pub fn filter_children_by_kind(
    children: &[TimelineChild],
    kind: ChildKind,
) -> Vec<&TimelineChild> {
    children.iter().filter(|c| c.kind() == kind).collect()
}

// =============================================================================
// Tests
// =============================================================================
