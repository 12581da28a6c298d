#![forbid(unsafe_code)]

//! Candidate offsets for every placement slot.
//!
//! The grid is three rows (above, beside, below) by three columns (left of,
//! centered on, right of) around the anchor. A placement picks one row and
//! one column; see [`resolve_position`](crate::position::resolve_position).
//!
//! # Invariants
//!
//! 1. `row0 >= 0` and `col0 >= 0`: nothing renders above or left of the viewport.
//! 2. `row2 <= viewport.height - tip.height` and likewise for `col2`.
//! 3. `row1` carries a `+arrow_size / 2` bias that `col1` does not. The
//!    horizontal center is left unbiased on purpose.
//!
//! The `arrow_size / √2` terms are the footprint of the 45°-rotated arrow
//! square.

use std::f64::consts::SQRT_2;

use anchortip_core::geometry::{Px, Rect, Size, Viewport};

/// Six candidate offsets, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Grid {
    /// Top offset for slots above the anchor.
    pub row0: Px,
    /// Top offset for slots vertically centered on the anchor.
    pub row1: Px,
    /// Top offset for slots below the anchor.
    pub row2: Px,
    /// Left offset for slots left of the anchor.
    pub col0: Px,
    /// Left offset for slots horizontally centered on the anchor.
    pub col1: Px,
    /// Left offset for slots right of the anchor.
    pub col2: Px,
}

impl Grid {
    /// Rows top to bottom.
    #[must_use]
    pub const fn rows(&self) -> [Px; 3] {
        [self.row0, self.row1, self.row2]
    }

    /// Columns left to right.
    #[must_use]
    pub const fn cols(&self) -> [Px; 3] {
        [self.col0, self.col1, self.col2]
    }
}

/// Compute the grid for a tooltip of `tip` size anchored at `parent`.
///
/// Total over its inputs. An unmeasured (`Size::ZERO`) tip produces offsets
/// hugging the anchor edges; callers should not show content until a real
/// size is known.
#[must_use]
pub fn build_grid(parent: Rect, viewport: Viewport, tip: Size, arrow_size: f64) -> Grid {
    let diagonal = arrow_size / SQRT_2;

    let row0 = (parent.top - tip.height + arrow_size - diagonal).max(0.0);
    let row1 = parent.top + (parent.height - tip.height + arrow_size) / 2.0;
    let row2 = (parent.bottom + diagonal).min(viewport.height - tip.height);

    let col0 = (parent.left - tip.width - diagonal).max(0.0);
    let col1 = parent.left + (parent.width - tip.width) / 2.0;
    let col2 = (parent.right + diagonal).min(viewport.width - tip.width);

    Grid {
        row0: Px(row0),
        row1: Px(row1),
        row2: Px(row2),
        col0: Px(col0),
        col1: Px(col1),
        col2: Px(col2),
    }
}
