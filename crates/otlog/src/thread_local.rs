//! crates/otlog/src/thread_local.rs
//! Thread-local capture of forwarded log calls.

use std::cell::RefCell;
use std::fmt;

use super::engine::LogEngine;
use super::format;
use super::severity::Severity;

thread_local! {
    #[allow(clippy::missing_const_for_thread_local)]
    static EVENTS: RefCell<Vec<CapturedEvent>> = RefCell::new(Vec::new());
}

/// A log call recorded on the current thread.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapturedEvent {
    /// Severity the call was made at.
    pub severity: Severity,
    /// Format string for `logf` calls; `None` for `log` calls.
    pub format: Option<String>,
    /// Displayed arguments, in call order.
    pub args: Vec<String>,
}

impl CapturedEvent {
    /// Renders the event's text the way the bundled engines do.
    #[must_use]
    pub fn message(&self) -> String {
        let args: Vec<&dyn fmt::Display> =
            self.args.iter().map(|arg| arg as &dyn fmt::Display).collect();
        match &self.format {
            Some(format) => format::render(format, &args),
            None => format::join(&args),
        }
    }
}

/// Appends an event to the current thread's buffer.
pub fn capture(event: CapturedEvent) {
    EVENTS.with(|e| e.borrow_mut().push(event));
}

/// Drain all captured events, clearing the internal buffer.
pub fn drain_events() -> Vec<CapturedEvent> {
    EVENTS.with(|e| e.borrow_mut().drain(..).collect())
}

/// Engine that records every call into the thread-local buffer.
///
/// Arguments are stored in their displayed form and the format string is
/// kept verbatim, so tests can assert on exactly what the dispatch layer
/// forwarded. Retrieve the calls with [`drain_events`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryEngine;

impl MemoryEngine {
    fn display_all(args: &[&dyn fmt::Display]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }
}

impl LogEngine for MemoryEngine {
    fn log(&self, level: i32, args: &[&dyn fmt::Display]) {
        capture(CapturedEvent {
            severity: Severity::new(level),
            format: None,
            args: Self::display_all(args),
        });
    }

    fn logf(&self, level: i32, format: &str, args: &[&dyn fmt::Display]) {
        capture(CapturedEvent {
            severity: Severity::new(level),
            format: Some(format.to_owned()),
            args: Self::display_all(args),
        });
    }
}
