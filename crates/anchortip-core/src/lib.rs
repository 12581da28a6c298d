#![forbid(unsafe_code)]

//! Core: pixel geometry, pointer events, and the logging facade.

pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
