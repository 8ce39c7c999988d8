//! Layout Module
//!
//! Turns a [`TimelineLayout`](crate::primitives::TimelineLayout) into cell
//! geometry. Sizes in props are pixels; the terminal grid is cells.
//!
//! # Example
//!
//! ```ignore
//! use spark_timeline::layout::compute_geometry;
//!
//! let geometry = compute_geometry(&layout, 80)?;
//! for item in &geometry.items {
//!     println!("item at row {} spans {} rows", item.y, item.height);
//! }
//! ```

mod taffy_bridge;
mod text_measure;

pub use taffy_bridge::{compute_geometry, gutter_cells, ItemBox, TimelineGeometry};
pub use text_measure::*;

/// Horizontal pixels represented by one terminal column.
pub const PX_PER_CELL: f32 = 8.0;

/// Convert pixels to columns, rounding up.
pub fn px_to_cells(px: f32) -> u16 {
    if px <= 0.0 {
        return 0;
    }
    (px / PX_PER_CELL).ceil() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_to_cells() {
        assert_eq!(px_to_cells(0.0), 0);
        assert_eq!(px_to_cells(-4.0), 0);
        assert_eq!(px_to_cells(8.0), 1);
        assert_eq!(px_to_cells(12.0), 2);
        assert_eq!(px_to_cells(8.5), 2);
    }
}
