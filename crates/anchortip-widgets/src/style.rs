#![forbid(unsafe_code)]

//! Inline style values produced by the tooltip geometry.
//!
//! Hosts apply these as presentation attributes. Everything renders to CSS
//! text, but the typed values stay inspectable for tests and non-DOM hosts.

use std::fmt;

use anchortip_core::geometry::{Px, css_number};

/// CSS `visibility`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Rendered normally.
    #[default]
    Visible,
    /// Laid out but not painted.
    Hidden,
}

impl Visibility {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 2D translation optionally followed by a rotation in turns.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    /// Rotation applied after the translation, in turns (1 turn = 360°).
    pub rotate_turns: Option<f64>,
}

impl Transform {
    /// Pure translation.
    #[must_use]
    pub const fn translate(x: f64, y: f64) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            rotate_turns: None,
        }
    }

    /// Add a rotation after the translation.
    #[must_use]
    pub const fn rotate(mut self, turns: f64) -> Self {
        self.rotate_turns = Some(turns);
        self
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}, {})",
            Px(self.translate_x),
            Px(self.translate_y)
        )?;
        if let Some(turns) = self.rotate_turns {
            write!(f, " rotate({}turn)", css_number(turns))?;
        }
        Ok(())
    }
}

/// Ordered inline style declarations (`property: value` pairs).
///
/// Order is insertion order; pushing an existing property replaces its value
/// in place, mirroring how later object spreads override earlier keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleDeclarations {
    entries: Vec<(&'static str, String)>,
}

impl StyleDeclarations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property` to `value`.
    pub fn push(&mut self, property: &'static str, value: impl fmt::Display) {
        let value = value.to_string();
        match self.entries.iter_mut().find(|(name, _)| *name == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Append every declaration of `other`, overriding duplicates.
    pub fn extend(&mut self, other: &StyleDeclarations) {
        for (name, value) in &other.entries {
            self.push(*name, value);
        }
    }

    /// Value of `property`, if set.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Render as a `style` attribute value.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleDeclarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}
