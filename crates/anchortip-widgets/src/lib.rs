#![forbid(unsafe_code)]

//! Anchored tooltip widget.
//!
//! The geometry engine is three pure functions, [`build_grid`],
//! [`resolve_position`] and [`style_arrow`], composed by [`compute_layout`].
//! [`Tooltip`] wraps them in a hover state machine bound to an [`Anchor`].

pub mod anchor;
pub mod arrow;
pub mod config;
pub mod grid;
pub mod layout;
pub mod placement;
pub mod position;
pub mod style;
pub mod tooltip;
pub mod view;

pub use anchor::{Anchor, ListenerId, StaticAnchor};
pub use arrow::{ArrowStyle, ContentStyle, Corners, style_arrow};
pub use config::{TooltipConfig, TooltipConfigError, TooltipConfigParse, TooltipWidth};
pub use grid::{Grid, build_grid};
pub use layout::{TooltipLayout, compute_layout};
pub use placement::{ParsePlacementError, Placement};
pub use position::{PositionStyle, resolve_position};
pub use style::{StyleDeclarations, Transform, Visibility};
pub use tooltip::{Tooltip, TooltipPhase};
pub use view::{TooltipBody, TooltipView};
