#![forbid(unsafe_code)]

//! The element a tooltip annotates.
//!
//! Hosts implement [`Anchor`] for whatever stands in for the tooltip's parent
//! element: a DOM node binding, a native widget handle, or a test double.

use anchortip_core::geometry::{Rect, Viewport};

/// Handle for a pointer listener registered on an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Host-side view of the tooltip's parent element.
pub trait Anchor {
    /// Bounding box in viewport coordinates, or `None` when the element is
    /// detached from its document.
    fn bounding_rect(&self) -> Option<Rect>;

    /// Dimensions of the screen the element is displayed on.
    fn viewport(&self) -> Viewport;

    /// Start forwarding pointer enter/leave on this element to the tooltip.
    fn subscribe_pointer(&mut self) -> ListenerId;

    /// Stop forwarding for a listener returned by
    /// [`subscribe_pointer`](Anchor::subscribe_pointer).
    fn unsubscribe_pointer(&mut self, id: ListenerId);
}

impl<A: Anchor + ?Sized> Anchor for &mut A {
    fn bounding_rect(&self) -> Option<Rect> {
        (**self).bounding_rect()
    }

    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn subscribe_pointer(&mut self) -> ListenerId {
        (**self).subscribe_pointer()
    }

    fn unsubscribe_pointer(&mut self, id: ListenerId) {
        (**self).unsubscribe_pointer(id);
    }
}

/// A fixed-geometry anchor that counts its listeners.
///
/// Useful for hosts that compute layout themselves and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticAnchor {
    rect: Option<Rect>,
    viewport: Viewport,
    next_id: u64,
    listeners: Vec<ListenerId>,
}

impl StaticAnchor {
    /// An anchor at `rect` inside `viewport`.
    #[must_use]
    pub fn new(rect: Rect, viewport: Viewport) -> Self {
        Self {
            rect: Some(rect),
            viewport,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// An anchor that is not part of any document.
    #[must_use]
    pub fn detached(viewport: Viewport) -> Self {
        Self {
            rect: None,
            viewport,
            ..Self::default()
        }
    }

    /// Move the anchor, or detach it with `None`.
    pub fn set_rect(&mut self, rect: Option<Rect>) {
        self.rect = rect;
    }

    /// Number of live pointer listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Anchor for StaticAnchor {
    fn bounding_rect(&self) -> Option<Rect> {
        self.rect
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn subscribe_pointer(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(id);
        id
    }

    fn unsubscribe_pointer(&mut self, id: ListenerId) {
        self.listeners.retain(|&l| l != id);
    }
}
