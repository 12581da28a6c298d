#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! With the `tracing` feature the `tracing` macros used across anchortip are
//! re-exported here and at the crate root. Without it, the same names expand
//! to nothing so call sites compile unchanged.
//!
//! The `tracing-json` feature adds [`init_json`], which installs a global
//! JSON subscriber filtered by `RUST_LOG` (default `anchortip=info`).

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op debug_span macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

/// Span stand-in returned by `debug_span!` when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Enter the span. Does nothing.
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

/// Guard returned by [`NoopSpan::enter`].
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;

/// Default filter directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "anchortip=info";

/// Install a JSON-formatting global subscriber.
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json() -> bool {
    let directives = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(json_filter(directives.as_deref()))
        .try_init()
        .is_ok()
}

/// Filter built from `RUST_LOG` directives, or [`DEFAULT_FILTER`] when unset
/// or unparseable.
#[cfg(feature = "tracing-json")]
fn json_filter(directives: Option<&str>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}


#[cfg(all(test, feature = "tracing-json"))]
mod json_tests {
    use super::{DEFAULT_FILTER, init_json, json_filter};

    #[test]
    fn filter_defaults_when_unset() {
        assert_eq!(json_filter(None).to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn filter_uses_given_directives() {
        assert_eq!(json_filter(Some("anchortip=trace")).to_string(), "anchortip=trace");
    }

    #[test]
    fn init_json_installs_once() {
        assert!(init_json());
        assert!(!init_json());
        tracing::info!(target: "anchortip", "json logging installed");
    }
}
