#![forbid(unsafe_code)]

//! anchortip public facade crate.
//!
//! Re-exports the geometry primitives and the tooltip widget, and offers a
//! prelude for hosts embedding tooltips.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use anchortip_core::event::{PointerEvent, Propagation};
pub use anchortip_core::geometry::{Px, Rect, Size, Viewport};

// --- Widget re-exports -----------------------------------------------------

pub use anchortip_widgets::{
    Anchor, ArrowStyle, ContentStyle, Corners, Grid, ListenerId, ParsePlacementError, Placement,
    PositionStyle, StaticAnchor, StyleDeclarations, Tooltip, TooltipConfig, TooltipConfigError,
    TooltipLayout, TooltipPhase, TooltipView, TooltipWidth, Transform, Visibility, build_grid,
    compute_layout, resolve_position, style_arrow,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for anchortip hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A placement name could not be parsed.
    Placement(ParsePlacementError),
    /// One or more configuration values are invalid.
    Config(Vec<TooltipConfigError>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placement(err) => write!(f, "{err}"),
            Self::Config(errors) => {
                f.write_str("invalid tooltip config: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{err}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Placement(err) => Some(err),
            Self::Config(errors) => errors
                .first()
                .map(|err| err as &(dyn std::error::Error + 'static)),
        }
    }
}

impl From<ParsePlacementError> for Error {
    fn from(err: ParsePlacementError) -> Self {
        Self::Placement(err)
    }
}

impl From<Vec<TooltipConfigError>> for Error {
    fn from(errors: Vec<TooltipConfigError>) -> Self {
        Self::Config(errors)
    }
}

/// Standard result type for anchortip APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Build a validated config from untyped instantiation attributes.
///
/// `width` accepts `max-content` or a pixel number with an optional `px`
/// suffix.
pub fn config_from_attrs(
    placement: &str,
    font_size: f64,
    width: &str,
    arrow_size: f64,
) -> Result<TooltipConfig> {
    let placement = placement.parse()?;
    let Some(parsed_width) = TooltipWidth::parse(width) else {
        return Err(Error::Config(vec![TooltipConfigError {
            field: "width",
            value: width.to_string(),
            message: "expected max-content or pixel width".to_string(),
        }]));
    };
    let config = TooltipConfig::default()
        .placement(placement)
        .font_size(font_size)
        .width(parsed_width)
        .arrow_size(arrow_size);
    config.validate()?;
    Ok(config)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Anchor, Error, Placement, PointerEvent, Propagation, Rect, Result, Size, Tooltip,
        TooltipConfig, TooltipWidth, Viewport,
    };

    pub use crate::{core, widgets};
}

pub use anchortip_core as core;
pub use anchortip_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_attrs_accepts_valid_input() {
        let config = config_from_attrs("bottom-left", 1.25, "180px", 6.0).unwrap();
        assert_eq!(config.placement, Placement::BottomLeft);
        assert_eq!(config.font_size, 1.25);
        assert_eq!(config.width, TooltipWidth::Px(180.0));
        assert_eq!(config.arrow_size, 6.0);

        let config = config_from_attrs("top", 1.0, "max-content", 8.0).unwrap();
        assert_eq!(config, TooltipConfig::default());
    }

    #[test]
    fn config_from_attrs_rejects_bad_placement() {
        let err = config_from_attrs("sideways", 1.0, "max-content", 8.0).unwrap_err();
        assert!(matches!(err, Error::Placement(_)));
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn config_from_attrs_rejects_negative_arrow() {
        let err = config_from_attrs("top", 1.0, "max-content", -1.0).unwrap_err();
        match &err {
            Error::Config(errors) => assert_eq!(errors[0].field, "arrow_size"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("invalid tooltip config: arrow_size=-1"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn config_from_attrs_rejects_bad_width() {
        let err = config_from_attrs("top", 1.0, "wide", 8.0).unwrap_err();
        match &err {
            Error::Config(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "width");
                assert_eq!(errors[0].value, "wide");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn config_from_attrs_reports_every_range_violation() {
        let err = config_from_attrs("center", 0.0, "-5px", 8.0).unwrap_err();
        match err {
            Error::Config(errors) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
                assert_eq!(fields, vec!["font_size", "width"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn prelude_covers_end_to_end_use() {
        use crate::prelude::*;

        let anchor = StaticAnchor::new(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Viewport::new(100.0, 100.0),
        );
        let mut tip: Tooltip<StaticAnchor> = Tooltip::new(anchor, "x");
        tip.attach();
        tip.handle_pointer(PointerEvent::Enter);
        assert!(tip.on_measured(Size::new(4.0, 4.0)));
        assert!(tip.view().content_visible());
    }
}
