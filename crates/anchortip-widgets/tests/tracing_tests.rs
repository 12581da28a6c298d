#![forbid(unsafe_code)]

//! Tracing integration tests.
//!
//! Spans and events enabled:
//!   cargo test -p anchortip-widgets --features tracing --test tracing_tests
//!
//! Without the feature the same code paths must run and emit nothing.

use std::sync::{Arc, Mutex};

use anchortip_core::event::PointerEvent;
use anchortip_core::geometry::{Rect, Size, Viewport};
use anchortip_widgets::{Placement, StaticAnchor, Tooltip, TooltipConfig};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Captured {
    Span(String),
    Event { level: tracing::Level, message: String },
}

struct Capture {
    records: Arc<Mutex<Vec<Captured>>>,
}

struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        self.records
            .lock()
            .unwrap()
            .push(Captured::Span(attrs.metadata().name().to_string()));
    }

    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.records.lock().unwrap().push(Captured::Event {
            level: *event.metadata().level(),
            message: visitor.0,
        });
    }
}

fn with_capture<F: FnOnce()>(f: F) -> Vec<Captured> {
    let records = Arc::new(Mutex::new(Vec::new()));
    let layer = Capture {
        records: records.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let out = records.lock().unwrap().clone();
    out
}

fn tooltip() -> Tooltip<StaticAnchor> {
    let anchor = StaticAnchor::new(
        Rect::new(40.0, 40.0, 20.0, 20.0),
        Viewport::new(400.0, 300.0),
    );
    Tooltip::new(anchor, "tip").config(TooltipConfig::default().placement(Placement::Right))
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn layout_span_created_on_positioning() {
    let records = with_capture(|| {
        let mut tip = tooltip();
        tip.attach();
        tip.handle_pointer(PointerEvent::Enter);
        assert!(tip.on_measured(Size::new(50.0, 20.0)));
    });

    assert!(
        records.contains(&Captured::Span("tooltip.layout".to_string())),
        "{records:?}"
    );
    let phase_changes = records
        .iter()
        .filter(|r| matches!(r, Captured::Event { message, .. } if message == "tooltip phase change"))
        .count();
    assert_eq!(phase_changes, 2, "hidden->measuring->positioned");
}

#[test]
#[cfg(feature = "tracing")]
fn detached_anchor_warns() {
    let records = with_capture(|| {
        let mut tip = tooltip();
        tip.attach();
        tip.handle_pointer(PointerEvent::Enter);
        tip.anchor_mut().set_rect(None);
        assert!(!tip.on_measured(Size::new(50.0, 20.0)));
    });

    assert!(records.iter().any(|r| matches!(
        r,
        Captured::Event { level, .. } if *level == tracing::Level::WARN
    )));
    assert!(!records.contains(&Captured::Span("tooltip.layout".to_string())));
}

/// Without the feature, instrumentation compiles away entirely.
#[test]
#[cfg(not(feature = "tracing"))]
fn zero_overhead_without_feature() {
    let records = with_capture(|| {
        let mut tip = tooltip();
        tip.attach();
        tip.handle_pointer(PointerEvent::Enter);
        assert!(tip.on_measured(Size::new(50.0, 20.0)));
        tip.handle_pointer(PointerEvent::Leave);
    });
    assert!(records.is_empty(), "{records:?}");
}
