//! Taffy Bridge - Places timeline items with Taffy.
//!
//! The container is a flex column with its gutter expressed as padding on the
//! aligned side, the way the offset directive describes it. Items are leaves
//! measured from their title and wrapped content; one row of gap separates
//! them.

use taffy::{
    AvailableSpace, Dimension as TaffyDimension, Display, FlexDirection, LengthPercentage,
    NodeId, Rect, Size, Style, TaffyError, TaffyTree,
};

use crate::primitives::{TimelineLayout, TimelineOffset};

use super::px_to_cells;
use super::text_measure::measure_text_height;

// =============================================================================
// Types
// =============================================================================

/// Vertical extent of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemBox {
    pub y: u16,
    pub height: u16,
}

/// Cell geometry of a laid-out timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineGeometry {
    /// Column the bullets and connecting lines are drawn in.
    pub bullet_x: u16,
    /// First column of the text region.
    pub text_x: u16,
    pub text_width: u16,
    /// Total rows.
    pub height: u16,
    pub items: Vec<ItemBox>,
}

/// Gutter width in cells for a timeline's offset (at least one column).
pub fn gutter_cells(layout: &TimelineLayout) -> u16 {
    px_to_cells(layout.offset.value()).max(1)
}

// =============================================================================
// Measurement
// =============================================================================

/// Rows an item needs: the title row plus its wrapped content.
///
/// Content takes no rows when there is no column left to draw it in.
fn item_height(layout: &TimelineLayout, index: usize, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let content_rows = layout.items[index]
        .content
        .as_deref()
        .map(|content| measure_text_height(content, width))
        .unwrap_or(0);
    content_rows.saturating_add(1)
}

// =============================================================================
// Entry Point
// =============================================================================

/// Compute cell geometry for `layout` in a container `width` columns wide.
pub fn compute_geometry(layout: &TimelineLayout, width: u16) -> Result<TimelineGeometry, TaffyError> {
    let gutter = gutter_cells(layout);
    let inset = gutter + 1;
    let text_width = width.saturating_sub(inset);

    let mut tree: TaffyTree<usize> = TaffyTree::new();

    let mut nodes: Vec<NodeId> = Vec::with_capacity(layout.items.len());
    for index in 0..layout.items.len() {
        nodes.push(tree.new_leaf_with_context(Style::default(), index)?);
    }

    let inset_px = LengthPercentage::Length(inset as f32);
    let zero = LengthPercentage::Length(0.0);
    let (bullet_x, text_x, padding) = match layout.offset {
        TimelineOffset::Left(_) => (
            gutter - 1,
            inset.min(width),
            Rect { left: inset_px, right: zero, top: zero, bottom: zero },
        ),
        TimelineOffset::Right(_) => (
            width.saturating_sub(gutter),
            0,
            Rect { left: zero, right: inset_px, top: zero, bottom: zero },
        ),
    };

    let root = tree.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            size: Size {
                width: TaffyDimension::Length(width as f32),
                height: TaffyDimension::Auto,
            },
            padding,
            gap: Size {
                width: zero,
                height: LengthPercentage::Length(1.0),
            },
            ..Default::default()
        },
        &nodes,
    )?;

    let available = Size {
        width: AvailableSpace::Definite(width as f32),
        height: AvailableSpace::MaxContent,
    };

    let mut measure_fn = |known_dimensions: Size<Option<f32>>,
                          available_space: Size<AvailableSpace>,
                          _node_id: NodeId,
                          context: Option<&mut usize>,
                          _style: &Style| {
        let Some(&mut index) = context else {
            return Size::ZERO;
        };
        let avail_width = match known_dimensions.width {
            Some(w) => w as u16,
            None => match available_space.width {
                AvailableSpace::Definite(w) => w as u16,
                AvailableSpace::MinContent | AvailableSpace::MaxContent => text_width,
            },
        };
        Size {
            width: known_dimensions.width.unwrap_or(avail_width as f32),
            height: known_dimensions
                .height
                .unwrap_or(item_height(layout, index, avail_width) as f32),
        }
    };

    tree.compute_layout_with_measure(root, available, &mut measure_fn)?;

    let mut items = Vec::with_capacity(nodes.len());
    for node in &nodes {
        let l = tree.layout(*node)?;
        items.push(ItemBox {
            y: l.location.y.round() as u16,
            height: l.size.height.round() as u16,
        });
    }
    let height = tree.layout(root)?.size.height.round() as u16;

    Ok(TimelineGeometry {
        bullet_x,
        text_x,
        text_width,
        height,
        items,
    })
}
