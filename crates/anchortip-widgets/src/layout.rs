#![forbid(unsafe_code)]

//! The full geometry pipeline: grid, position, arrow, content.

use anchortip_core::geometry::{Rect, Size, Viewport};
use anchortip_core::{debug_span, trace};

use crate::arrow::{ArrowStyle, ContentStyle, style_arrow};
use crate::grid::{Grid, build_grid};
use crate::placement::Placement;
use crate::position::{PositionStyle, resolve_position};

/// Everything needed to place and decorate a tooltip.
///
/// A pure function of its inputs; recomputing with the same inputs yields
/// an identical value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipLayout {
    pub placement: Placement,
    pub grid: Grid,
    pub position: PositionStyle,
    pub arrow: ArrowStyle,
    pub content: ContentStyle,
}

/// Run the geometry pipeline for one tooltip.
#[must_use]
pub fn compute_layout(
    parent: Rect,
    viewport: Viewport,
    tip: Size,
    placement: Placement,
    arrow_size: f64,
) -> TooltipLayout {
    let span = debug_span!(
        "tooltip.layout",
        placement = placement.as_str(),
        tip_width = tip.width,
        tip_height = tip.height
    );
    let _guard = span.enter();

    let grid = build_grid(parent, viewport, tip, arrow_size);
    let position = resolve_position(&grid, placement);
    let (arrow, content) = style_arrow(tip.width, tip.height, placement, arrow_size);

    trace!(
        left = position.left.get(),
        top = position.top.get(),
        "resolved tooltip position"
    );

    TooltipLayout {
        placement,
        grid,
        position,
        arrow,
        content,
    }
}
