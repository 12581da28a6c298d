#![forbid(unsafe_code)]

//! Arrow and content styling per placement.
//!
//! The arrow is an `arrow_size` square rotated so one corner points at the
//! anchor. Edge placements center it along the facing edge of the tooltip.
//! Corner placements hide it and instead square off the content corner that
//! touches the anchor, nudging the content diagonally by `arrow_size / √2`
//! so that corner sits flush against the anchor.

use std::f64::consts::SQRT_2;

use bitflags::bitflags;

use crate::placement::Placement;
use crate::style::{StyleDeclarations, Transform, Visibility};

bitflags! {
    /// Content box corners.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Corners: u8 {
        const TOP_LEFT = 0b0001;
        const TOP_RIGHT = 0b0010;
        const BOTTOM_LEFT = 0b0100;
        const BOTTOM_RIGHT = 0b1000;
    }
}

impl Corners {
    /// CSS property setting this single corner's radius.
    ///
    /// Returns `None` unless exactly one corner is set.
    #[must_use]
    pub fn radius_property(self) -> Option<&'static str> {
        if self == Self::TOP_LEFT {
            Some("border-top-left-radius")
        } else if self == Self::TOP_RIGHT {
            Some("border-top-right-radius")
        } else if self == Self::BOTTOM_LEFT {
            Some("border-bottom-left-radius")
        } else if self == Self::BOTTOM_RIGHT {
            Some("border-bottom-right-radius")
        } else {
            None
        }
    }
}

/// Presentation of the arrow element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArrowStyle {
    /// Placement of the arrow square; `None` when hidden.
    pub transform: Option<Transform>,
    /// Hidden for corner and center placements.
    pub visibility: Visibility,
}

impl ArrowStyle {
    const HIDDEN: Self = Self {
        transform: None,
        visibility: Visibility::Hidden,
    };

    fn pointing(transform: Transform) -> Self {
        Self {
            transform: Some(transform),
            visibility: Visibility::Visible,
        }
    }

    /// True when no arrow is drawn.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.visibility == Visibility::Hidden
    }

    /// Inline declarations for the arrow element (size excluded).
    #[must_use]
    pub fn declarations(&self) -> StyleDeclarations {
        let mut decls = StyleDeclarations::new();
        if let Some(transform) = self.transform {
            decls.push("transform", transform);
        }
        if self.is_hidden() {
            decls.push("visibility", self.visibility);
        }
        decls
    }
}

/// Presentation overrides for the content box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentStyle {
    /// Corners whose border radius is forced to zero.
    pub square_corners: Corners,
    pub transform: Option<Transform>,
}

impl ContentStyle {
    fn squared(corner: Corners, dx: f64, dy: f64) -> Self {
        Self {
            square_corners: corner,
            transform: Some(Transform::translate(dx, dy)),
        }
    }

    /// Inline declarations for the content element.
    #[must_use]
    pub fn declarations(&self) -> StyleDeclarations {
        let mut decls = StyleDeclarations::new();
        for corner in self.square_corners.iter() {
            if let Some(property) = corner.radius_property() {
                decls.push(property, 0);
            }
        }
        if let Some(transform) = self.transform {
            decls.push("transform", transform);
        }
        decls
    }
}

/// Compute arrow and content styles for a `tip_width` x `tip_height` box.
#[must_use]
pub fn style_arrow(
    tip_width: f64,
    tip_height: f64,
    placement: Placement,
    arrow_size: f64,
) -> (ArrowStyle, ContentStyle) {
    let half = arrow_size / 2.0;
    let nudge = arrow_size / SQRT_2;

    match placement {
        Placement::Top => (
            ArrowStyle::pointing(
                Transform::translate((tip_width - arrow_size) / 2.0, -half).rotate(0.375),
            ),
            ContentStyle::default(),
        ),
        Placement::Bottom => (
            ArrowStyle::pointing(
                Transform::translate((tip_width - arrow_size) / 2.0, -tip_height + half)
                    .rotate(-0.125),
            ),
            ContentStyle::default(),
        ),
        Placement::Left => (
            ArrowStyle::pointing(
                Transform::translate(tip_width - half, -tip_height / 2.0).rotate(0.125),
            ),
            ContentStyle::default(),
        ),
        Placement::Right => (
            ArrowStyle::pointing(Transform::translate(-half, -tip_height / 2.0).rotate(-0.375)),
            ContentStyle::default(),
        ),
        Placement::TopLeft => (
            ArrowStyle::HIDDEN,
            ContentStyle::squared(Corners::BOTTOM_RIGHT, nudge, nudge),
        ),
        Placement::TopRight => (
            ArrowStyle::HIDDEN,
            ContentStyle::squared(Corners::BOTTOM_LEFT, -nudge, nudge),
        ),
        Placement::BottomLeft => (
            ArrowStyle::HIDDEN,
            ContentStyle::squared(Corners::TOP_RIGHT, nudge, -nudge),
        ),
        Placement::BottomRight => (
            ArrowStyle::HIDDEN,
            ContentStyle::squared(Corners::TOP_LEFT, -nudge, -nudge),
        ),
        Placement::Center => (ArrowStyle::HIDDEN, ContentStyle::default()),
    }
}
