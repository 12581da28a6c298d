#![forbid(unsafe_code)]

//! Tooltip instantiation parameters.
//!
//! # Environment Variables
//! - `ANCHORTIP_PLACEMENT` = top|bottom|left|right|top-left|top-right|bottom-left|bottom-right|center
//! - `ANCHORTIP_FONT_SIZE` (f64, rem scale)
//! - `ANCHORTIP_WIDTH` = max-content | pixel number (optional `px` suffix)
//! - `ANCHORTIP_ARROW_SIZE` (f64, pixels)

use std::env;
use std::fmt;

use anchortip_core::geometry::Px;

use crate::placement::Placement;

const ENV_PLACEMENT: &str = "ANCHORTIP_PLACEMENT";
const ENV_FONT_SIZE: &str = "ANCHORTIP_FONT_SIZE";
const ENV_WIDTH: &str = "ANCHORTIP_WIDTH";
const ENV_ARROW_SIZE: &str = "ANCHORTIP_ARROW_SIZE";

/// Width of the tooltip box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TooltipWidth {
    /// Shrink to fit the content (`max-content`).
    #[default]
    MaxContent,
    /// Fixed width in pixels.
    Px(f64),
}

impl TooltipWidth {
    /// Parse `max-content` or a pixel number with an optional `px` suffix.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("max-content") {
            return Some(Self::MaxContent);
        }
        let number = value.strip_suffix("px").unwrap_or(value).trim();
        number.parse::<f64>().ok().map(Self::Px)
    }
}

impl fmt::Display for TooltipWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxContent => f.write_str("max-content"),
            Self::Px(px) => write!(f, "{}", Px(*px)),
        }
    }
}

/// Tooltip configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TooltipConfig {
    /// Placement slot (default: top).
    pub placement: Placement,
    /// Font size scale in `rem` (default: 1).
    pub font_size: f64,
    /// Box width (default: max-content).
    pub width: TooltipWidth,
    /// Arrow square side in pixels (default: 8).
    pub arrow_size: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            placement: Placement::Top,
            font_size: 1.0,
            width: TooltipWidth::MaxContent,
            arrow_size: 8.0,
        }
    }
}

impl TooltipConfig {
    /// Set the placement slot.
    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the font size scale in `rem`.
    #[must_use]
    pub fn font_size(mut self, scale: f64) -> Self {
        self.font_size = scale;
        self
    }

    /// Set the box width.
    #[must_use]
    pub fn width(mut self, width: TooltipWidth) -> Self {
        self.width = width;
        self
    }

    /// Set the arrow square side in pixels.
    #[must_use]
    pub fn arrow_size(mut self, px: f64) -> Self {
        self.arrow_size = px;
        self
    }

    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> TooltipConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<TooltipConfigError>> {
        let mut errors = Vec::new();
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            errors.push(TooltipConfigError::new(
                "font_size",
                self.font_size.to_string(),
                "must be a positive number",
            ));
        }
        if !(self.arrow_size.is_finite() && self.arrow_size >= 0.0) {
            errors.push(TooltipConfigError::new(
                "arrow_size",
                self.arrow_size.to_string(),
                "must be a non-negative number",
            ));
        }
        if let TooltipWidth::Px(px) = self.width
            && !(px.is_finite() && px > 0.0)
        {
            errors.push(TooltipConfigError::new(
                "width",
                px.to_string(),
                "must be max-content or a positive pixel width",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct TooltipConfigParse {
    /// Resulting config; invalid values are left at their defaults.
    pub config: TooltipConfig,
    /// Every rejected value, in variable order.
    pub errors: Vec<TooltipConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipConfigError {
    /// Config field name.
    pub field: &'static str,
    /// The rejected value as given.
    pub value: String,
    /// What was expected instead.
    pub message: String,
}

impl TooltipConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for TooltipConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for TooltipConfigError {}

fn from_env_with<F>(mut get: F) -> TooltipConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = TooltipConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_PLACEMENT) {
        match value.parse::<Placement>() {
            Ok(parsed) => config.placement = parsed,
            Err(_) => errors.push(TooltipConfigError::new(
                "placement",
                value,
                "expected top|bottom|left|right|top-left|top-right|bottom-left|bottom-right|center",
            )),
        }
    }

    if let Some(value) = get(ENV_FONT_SIZE) {
        match parse_f64(&value) {
            Some(parsed) => config.font_size = parsed,
            None => errors.push(TooltipConfigError::new(
                "font_size",
                value,
                "expected number",
            )),
        }
    }

    if let Some(value) = get(ENV_WIDTH) {
        match TooltipWidth::parse(&value) {
            Some(parsed) => config.width = parsed,
            None => errors.push(TooltipConfigError::new(
                "width",
                value,
                "expected max-content or pixel width",
            )),
        }
    }

    if let Some(value) = get(ENV_ARROW_SIZE) {
        match parse_f64(&value) {
            Some(parsed) => config.arrow_size = parsed,
            None => errors.push(TooltipConfigError::new(
                "arrow_size",
                value,
                "expected number",
            )),
        }
    }

    if let Err(mut invalid) = config.validate() {
        // Out-of-range values fall back to their defaults.
        let defaults = TooltipConfig::default();
        for error in &invalid {
            match error.field {
                "font_size" => config.font_size = defaults.font_size,
                "arrow_size" => config.arrow_size = defaults.arrow_size,
                "width" => config.width = defaults.width,
                _ => {}
            }
        }
        errors.append(&mut invalid);
    }

    TooltipConfigParse { config, errors }
}

fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}
