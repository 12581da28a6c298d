#![forbid(unsafe_code)]

//! Geometric primitives in CSS pixel space.
//!
//! Unlike cell-based layout, tooltip geometry works with fractional pixels
//! reported by the host (`getBoundingClientRect`-style snapshots), so every
//! coordinate here is an `f64`.
//!
//! No value is validated: negative sizes or a zero viewport flow through the
//! arithmetic unchanged and may yield off-screen coordinates.

use std::fmt;

/// A bounding box in viewport coordinates (origin at top-left).
///
/// `right`/`bottom` are stored alongside `width`/`height` because hosts
/// report all six and the placement math reads them directly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Right edge (`left + width`).
    pub right: f64,
    /// Bottom edge (`top + height`).
    pub bottom: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its origin and size.
    #[inline]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Create a rectangle from its four edges.
    #[inline]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }
}

/// Width and height of a rendered box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent in CSS pixels.
    pub width: f64,
    /// Vertical extent in CSS pixels.
    pub height: f64,
}

impl Size {
    /// The unmeasured size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are zero, i.e. the box was never measured.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Dimensions of the screen the anchor is displayed on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Screen width in CSS pixels.
    pub width: f64,
    /// Screen height in CSS pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a new viewport.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A CSS pixel length.
///
/// `Display` renders the shortest round-trip decimal followed by `px`, so
/// `Px(30.0)` prints `30px` and `Px(62.5)` prints `62.5px`. Negative zero
/// prints as `0px`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Px(pub f64);

impl Px {
    /// The numeric value in pixels.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Px {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", css_number(self.0))
    }
}

/// Normalize a float for CSS output (`-0` becomes `0`).
#[inline]
pub fn css_number(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
