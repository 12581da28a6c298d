#![forbid(unsafe_code)]

//! Pointer events delivered to a tooltip by its host.
//!
//! The host owns the real listeners on the anchor element and forwards the
//! two boundary crossings, plus clicks landing on the tooltip box itself.

/// A pointer event relevant to tooltip visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// Pointer entered the anchor element.
    Enter,
    /// Pointer left the anchor element.
    Leave,
    /// Pointer clicked inside the tooltip box.
    Click,
}

impl PointerEvent {
    /// DOM event name this event corresponds to.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enter => "pointerenter",
            Self::Leave => "pointerleave",
            Self::Click => "click",
        }
    }
}

/// Whether an event should continue to bubble to ancestor elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Let the event reach the anchor and its ancestors.
    #[default]
    Continue,
    /// Stop the event at the tooltip.
    Stop,
}

impl Propagation {
    /// True if the host should call its `stopPropagation` equivalent.
    #[must_use]
    pub const fn is_stopped(self) -> bool {
        matches!(self, Self::Stop)
    }
}
