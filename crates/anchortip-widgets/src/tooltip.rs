#![forbid(unsafe_code)]

//! Hover tooltip attached to an [`Anchor`].
//!
//! # Invariants
//!
//! 1. Geometry is computed only from a committed, non-zero measurement of
//!    the tooltip box. A zero size never produces a visible position.
//! 2. Positioning is skipped while the anchor has no bounding box.
//! 3. The pointer listener is held exactly while attached and is released on
//!    detach and on drop.
//! 4. Each instance owns its state; instances never share geometry.
//!
//! # Phases
//!
//! ```text
//!   Hidden --enter--> Measuring --measured(size > 0)--> Positioned
//!     ^                   |                                 |
//!     +------leave--------+-------------leave---------------+
//! ```
//!
//! # Example
//!
//! ```ignore
//! let mut tip = Tooltip::new(anchor, "Copy link")
//!     .config(TooltipConfig::default().placement(Placement::Bottom));
//! tip.attach();
//! tip.handle_pointer(PointerEvent::Enter);
//! // host renders tip.view(), measures the box, then:
//! tip.on_measured(Size::new(96.0, 24.0));
//! ```

use anchortip_core::event::{PointerEvent, Propagation};
use anchortip_core::geometry::Size;
use anchortip_core::{debug, warn};

use crate::anchor::{Anchor, ListenerId};
use crate::config::TooltipConfig;
use crate::layout::{TooltipLayout, compute_layout};
use crate::view::TooltipView;

/// Visibility phase of a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TooltipPhase {
    /// Nothing rendered.
    #[default]
    Hidden,
    /// Content rendered unpositioned so the host can measure it.
    Measuring,
    /// Measured and placed.
    Positioned(TooltipLayout),
}

impl TooltipPhase {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Measuring => "measuring",
            Self::Positioned(_) => "positioned",
        }
    }
}

/// A tooltip instance bound to one anchor element.
#[derive(Debug)]
pub struct Tooltip<A: Anchor> {
    anchor: A,
    config: TooltipConfig,
    content: String,
    phase: TooltipPhase,
    listener: Option<ListenerId>,
}

impl<A: Anchor> Tooltip<A> {
    /// Create a detached tooltip with default configuration.
    #[must_use]
    pub fn new(anchor: A, content: impl Into<String>) -> Self {
        Self {
            anchor,
            config: TooltipConfig::default(),
            content: content.into(),
            phase: TooltipPhase::Hidden,
            listener: None,
        }
    }

    /// Set the configuration.
    #[must_use]
    pub fn config(mut self, config: TooltipConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    #[must_use]
    pub fn settings(&self) -> &TooltipConfig {
        &self.config
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn anchor(&self) -> &A {
        &self.anchor
    }

    pub fn anchor_mut(&mut self) -> &mut A {
        &mut self.anchor
    }

    #[must_use]
    pub fn phase(&self) -> &TooltipPhase {
        &self.phase
    }

    /// True while content is rendered (measuring or positioned).
    #[must_use]
    pub fn is_shown(&self) -> bool {
        !matches!(self.phase, TooltipPhase::Hidden)
    }

    /// Layout of a positioned tooltip.
    #[must_use]
    pub fn layout(&self) -> Option<&TooltipLayout> {
        match &self.phase {
            TooltipPhase::Positioned(layout) => Some(layout),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Subscribe to the anchor's pointer events. No-op if already attached.
    pub fn attach(&mut self) {
        if self.listener.is_none() {
            let id = self.anchor.subscribe_pointer();
            debug!(listener = id.0, "tooltip attached");
            self.listener = Some(id);
        }
    }

    /// Release the pointer listener and hide. No-op if not attached.
    pub fn detach(&mut self) {
        if let Some(id) = self.listener.take() {
            self.anchor.unsubscribe_pointer(id);
            debug!(listener = id.0, "tooltip detached");
        }
        self.phase = TooltipPhase::Hidden;
    }

    /// Feed a pointer event forwarded by the host.
    ///
    /// Returns whether the event should keep bubbling. Clicks on the tooltip
    /// are stopped so they do not reach the anchor.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Propagation {
        match event {
            PointerEvent::Enter => {
                if !self.is_attached() {
                    debug!("pointer enter ignored on detached tooltip");
                } else if matches!(self.phase, TooltipPhase::Hidden) {
                    self.transition(TooltipPhase::Measuring);
                }
                Propagation::Continue
            }
            PointerEvent::Leave => {
                if self.is_shown() {
                    self.transition(TooltipPhase::Hidden);
                }
                Propagation::Continue
            }
            PointerEvent::Click => Propagation::Stop,
        }
    }

    /// Commit the measured size of the rendered tooltip box.
    ///
    /// Positions the tooltip and returns `true` when the measurement is
    /// usable. Measurements arriving while hidden (the pointer left before
    /// the tooltip appeared) and zero sizes are ignored. A measurement taken
    /// while the anchor is detached returns a positioned tooltip to
    /// `Measuring`, since its layout no longer matches the box.
    pub fn on_measured(&mut self, size: Size) -> bool {
        if !self.is_shown() {
            debug!("measurement dropped; tooltip hidden");
            return false;
        }
        if size.is_zero() {
            debug!("measurement ignored; zero size");
            return false;
        }
        let Some(parent) = self.anchor.bounding_rect() else {
            warn!("anchor has no bounding box; skipping tooltip positioning");
            if self.layout().is_some() {
                self.transition(TooltipPhase::Measuring);
            }
            return false;
        };

        let layout = compute_layout(
            parent,
            self.anchor.viewport(),
            size,
            self.config.placement,
            self.config.arrow_size,
        );
        self.transition(TooltipPhase::Positioned(layout));
        true
    }

    /// Presentation of the current phase.
    #[must_use]
    pub fn view(&self) -> TooltipView<'_> {
        TooltipView::build(&self.phase, &self.config, &self.content)
    }

    fn transition(&mut self, next: TooltipPhase) {
        debug!(
            from = self.phase.name(),
            to = next.name(),
            "tooltip phase change"
        );
        self.phase = next;
    }
}

impl<A: Anchor> Drop for Tooltip<A> {
    fn drop(&mut self) {
        if let Some(id) = self.listener.take() {
            self.anchor.unsubscribe_pointer(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::StaticAnchor;
    use crate::placement::Placement;
    use anchortip_core::geometry::{Px, Rect, Viewport};

    fn anchor() -> StaticAnchor {
        StaticAnchor::new(
            Rect::from_edges(50.0, 100.0, 130.0, 120.0),
            Viewport::new(1000.0, 800.0),
        )
    }

    fn shown(placement: Placement) -> Tooltip<StaticAnchor> {
        let mut tip = Tooltip::new(anchor(), "Hello")
            .config(TooltipConfig::default().placement(placement));
        tip.attach();
        tip.handle_pointer(PointerEvent::Enter);
        tip
    }

    // ── Phase tests ───────────────────────────────────────────────────

    #[test]
    fn starts_hidden_and_detached() {
        let tip = Tooltip::new(anchor(), "Hello");
        assert_eq!(tip.phase(), &TooltipPhase::Hidden);
        assert!(!tip.is_attached());
        assert!(!tip.is_shown());
        assert!(tip.layout().is_none());
    }

    #[test]
    fn enter_measure_positions() {
        let mut tip = shown(Placement::Top);
        assert_eq!(tip.phase(), &TooltipPhase::Measuring);
        assert!(tip.layout().is_none(), "no geometry before measurement");

        assert!(tip.on_measured(Size::new(120.0, 40.0)));
        let layout = tip.layout().unwrap();
        assert_eq!(layout.position.left, Px(30.0));
        assert!((layout.position.top.get() - 62.343).abs() < 1e-3);
    }

    #[test]
    fn zero_measurement_keeps_measuring() {
        let mut tip = shown(Placement::Bottom);
        assert!(!tip.on_measured(Size::ZERO));
        assert_eq!(tip.phase(), &TooltipPhase::Measuring);
    }

    #[test]
    fn detached_anchor_skips_positioning() {
        let mut tip = shown(Placement::Left);
        tip.anchor_mut().set_rect(None);
        assert!(!tip.on_measured(Size::new(50.0, 20.0)));
        assert_eq!(tip.phase(), &TooltipPhase::Measuring);

        tip.anchor_mut().set_rect(Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(tip.on_measured(Size::new(50.0, 20.0)));
        assert_eq!(tip.phase().name(), "positioned");
    }

    #[test]
    fn detached_anchor_discards_stale_layout() {
        let mut tip = shown(Placement::Top);
        assert!(tip.on_measured(Size::new(120.0, 40.0)));
        assert!(tip.view().wrapper.get("left").is_some());

        tip.anchor_mut().set_rect(None);
        assert!(!tip.on_measured(Size::new(200.0, 60.0)));
        assert_eq!(tip.phase(), &TooltipPhase::Measuring);
        assert!(tip.layout().is_none());
        let view = tip.view();
        assert_eq!(view.wrapper.get("left"), None);
        assert_eq!(view.wrapper.get("top"), None);
        assert_eq!(view.wrapper.get("visibility"), Some("hidden"));

        tip.anchor_mut().set_rect(Some(Rect::from_edges(50.0, 100.0, 130.0, 120.0)));
        assert!(tip.on_measured(Size::new(200.0, 60.0)));
        assert_eq!(tip.layout().unwrap().position.left, Px(-10.0));
    }

    #[test]
    fn leave_before_measurement_drops_pending_show() {
        let mut tip = shown(Placement::Top);
        tip.handle_pointer(PointerEvent::Leave);
        assert!(!tip.on_measured(Size::new(120.0, 40.0)));
        assert_eq!(tip.phase(), &TooltipPhase::Hidden);
    }

    #[test]
    fn leave_hides_positioned() {
        let mut tip = shown(Placement::Top);
        tip.on_measured(Size::new(120.0, 40.0));
        tip.handle_pointer(PointerEvent::Leave);
        assert_eq!(tip.phase(), &TooltipPhase::Hidden);
        tip.handle_pointer(PointerEvent::Leave);
        assert_eq!(tip.phase(), &TooltipPhase::Hidden);
    }

    #[test]
    fn repeated_enter_is_idempotent() {
        let mut tip = shown(Placement::Top);
        tip.on_measured(Size::new(120.0, 40.0));
        let before = *tip.phase();
        tip.handle_pointer(PointerEvent::Enter);
        assert_eq!(tip.phase(), &before);
    }

    #[test]
    fn enter_ignored_while_detached() {
        let mut tip = Tooltip::new(anchor(), "Hello");
        tip.handle_pointer(PointerEvent::Enter);
        assert_eq!(tip.phase(), &TooltipPhase::Hidden);
    }

    #[test]
    fn rect_is_snapshotted_per_show() {
        let mut tip = shown(Placement::Center);
        tip.on_measured(Size::new(20.0, 20.0));
        let first = tip.layout().unwrap().position;

        tip.handle_pointer(PointerEvent::Leave);
        tip.anchor_mut().set_rect(Some(Rect::new(300.0, 300.0, 20.0, 20.0)));
        tip.handle_pointer(PointerEvent::Enter);
        tip.on_measured(Size::new(20.0, 20.0));
        let second = tip.layout().unwrap().position;

        assert_ne!(first, second);
        assert_eq!(second.left, Px(300.0));
    }

    #[test]
    fn click_stops_propagation() {
        let mut tip = shown(Placement::Top);
        assert_eq!(tip.handle_pointer(PointerEvent::Click), Propagation::Stop);
        assert_eq!(
            tip.handle_pointer(PointerEvent::Enter),
            Propagation::Continue
        );
    }

    // ── Listener lifecycle tests ──────────────────────────────────────

    #[test]
    fn attach_is_idempotent_and_detach_releases() {
        let mut tip = Tooltip::new(anchor(), "Hello");
        tip.attach();
        tip.attach();
        assert_eq!(tip.anchor().listener_count(), 1);

        tip.handle_pointer(PointerEvent::Enter);
        tip.detach();
        assert_eq!(tip.anchor().listener_count(), 0);
        assert_eq!(tip.phase(), &TooltipPhase::Hidden);
        tip.detach();
        assert_eq!(tip.anchor().listener_count(), 0);
    }

    #[test]
    fn drop_releases_listener() {
        let mut host = anchor();
        {
            let mut tip = Tooltip::new(&mut host, "Hello");
            tip.attach();
        }
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn instances_are_independent() {
        let mut a = shown(Placement::Top);
        let mut b = shown(Placement::Bottom);
        a.on_measured(Size::new(120.0, 40.0));
        assert_eq!(b.phase(), &TooltipPhase::Measuring);
        b.handle_pointer(PointerEvent::Leave);
        assert!(a.layout().is_some());
    }
}
