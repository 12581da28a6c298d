#![forbid(unsafe_code)]

//! Placement lookup into the grid.

use anchortip_core::geometry::Px;

use crate::grid::Grid;
use crate::placement::Placement;
use crate::style::StyleDeclarations;

/// Final `left`/`top` of the tooltip box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionStyle {
    /// Offset from the viewport's left edge.
    pub left: Px,
    /// Offset from the viewport's top edge.
    pub top: Px,
}

impl PositionStyle {
    /// Inline declarations for the wrapper element.
    #[must_use]
    pub fn declarations(&self) -> StyleDeclarations {
        let mut decls = StyleDeclarations::new();
        decls.push("left", self.left);
        decls.push("top", self.top);
        decls
    }
}

/// Pick the grid cell for `placement`.
#[must_use]
pub fn resolve_position(grid: &Grid, placement: Placement) -> PositionStyle {
    let (left, top) = match placement {
        Placement::Top => (grid.col1, grid.row0),
        Placement::Bottom => (grid.col1, grid.row2),
        Placement::Left => (grid.col0, grid.row1),
        Placement::Right => (grid.col2, grid.row1),
        Placement::TopLeft => (grid.col0, grid.row0),
        Placement::TopRight => (grid.col2, grid.row0),
        Placement::BottomLeft => (grid.col0, grid.row2),
        Placement::BottomRight => (grid.col2, grid.row2),
        Placement::Center => (grid.col1, grid.row1),
    };
    PositionStyle { left, top }
}
