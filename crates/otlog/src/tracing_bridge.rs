//! crates/otlog/src/tracing_bridge.rs
//! Bridge between the tracing crate and the OpenTelemetry severity scale.
//!
//! Two directions are covered:
//!
//! - [`TracingEngine`] is a [`LogEngine`] that turns forwarded calls into
//!   `tracing` events, so an [`OtLogger`](crate::OtLogger) can sit on top of
//!   any tracing subscriber.
//! - [`SeverityLayer`] is a tracing-subscriber layer that maps events back to
//!   a [`Severity`], drops those below the configured threshold and captures
//!   the rest into the thread-local buffer read by
//!   [`drain_events`](crate::drain_events).
//!
//! # Usage
//!
//! ```rust,ignore
//! use otlog::{LoggingConfig, OtLogger, TracingEngine, init_tracing};
//!
//! init_tracing(LoggingConfig::from_verbose_level(2))?;
//!
//! let logger = OtLogger::new(TracingEngine);
//! logger.warnf2("retrying %s", &[&"upload"]);
//! ```

use std::fmt;

use super::band::Band;
use super::config::LoggingConfig;
use super::engine::LogEngine;
use super::format;
use super::severity::Severity;
use super::thread_local::{CapturedEvent, capture};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

/// Target of events emitted by [`TracingEngine`].
pub const TARGET: &str = "otlog";

/// Engine emitting each forwarded call as a `tracing` event.
///
/// Events carry the rendered message plus `severity_number` and
/// `severity_text` fields, and are emitted at the `tracing` level of the
/// severity's band.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingEngine;

impl TracingEngine {
    /// Map a severity to the tracing level its events are emitted at.
    ///
    /// Error and fatal share `ERROR`. Invalid values go to `ERROR` when they
    /// must not be ignored and to `TRACE` otherwise.
    #[must_use]
    pub const fn tracing_level(severity: Severity) -> Level {
        match severity.band() {
            Some(Band::Trace) => Level::TRACE,
            Some(Band::Debug) => Level::DEBUG,
            Some(Band::Info) => Level::INFO,
            Some(Band::Warn) => Level::WARN,
            Some(Band::Error | Band::Fatal) => Level::ERROR,
            None if severity.should_not_ignore() => Level::ERROR,
            None => Level::TRACE,
        }
    }

    fn emit(severity: Severity, message: &str) {
        let number = severity.get();
        match Self::tracing_level(severity) {
            Level::TRACE => tracing::trace!(
                target: TARGET,
                severity_number = number,
                severity_text = %severity,
                "{message}"
            ),
            Level::DEBUG => tracing::debug!(
                target: TARGET,
                severity_number = number,
                severity_text = %severity,
                "{message}"
            ),
            Level::INFO => tracing::info!(
                target: TARGET,
                severity_number = number,
                severity_text = %severity,
                "{message}"
            ),
            Level::WARN => tracing::warn!(
                target: TARGET,
                severity_number = number,
                severity_text = %severity,
                "{message}"
            ),
            Level::ERROR => tracing::error!(
                target: TARGET,
                severity_number = number,
                severity_text = %severity,
                "{message}"
            ),
        }
    }
}

impl LogEngine for TracingEngine {
    fn log(&self, level: i32, args: &[&dyn fmt::Display]) {
        Self::emit(Severity::new(level), &format::join(args));
    }

    fn logf(&self, level: i32, format: &str, args: &[&dyn fmt::Display]) {
        Self::emit(Severity::new(level), &format::render(format, args));
    }
}

/// A tracing layer that records events meeting a severity threshold.
///
/// Events that carry a `severity_number` field keep that exact severity;
/// others are mapped from their tracing level to the first sub-level of the
/// matching band, following the OpenTelemetry guidance for level mapping.
pub struct SeverityLayer {
    config: LoggingConfig,
}

impl SeverityLayer {
    /// Create a new layer with the given configuration.
    #[must_use]
    pub const fn new(config: LoggingConfig) -> Self {
        Self { config }
    }

    /// Returns the layer's configuration.
    #[must_use]
    pub const fn config(&self) -> &LoggingConfig {
        &self.config
    }

    /// Map a tracing level to a severity.
    const fn level_to_severity(level: &Level) -> Severity {
        match *level {
            Level::TRACE => Severity::TRACE,
            Level::DEBUG => Severity::DEBUG,
            Level::INFO => Severity::INFO,
            Level::WARN => Severity::WARN,
            Level::ERROR => Severity::ERROR,
        }
    }
}

impl<S> Layer<S> for SeverityLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let severity = visitor.severity_number.map_or_else(
            || Self::level_to_severity(event.metadata().level()),
            Severity::new,
        );
        if !self.config.allows(severity) {
            return;
        }

        capture(CapturedEvent {
            severity,
            format: None,
            args: visitor.message.into_iter().collect(),
        });
    }
}

/// Visitor to extract the message and severity number from a tracing event.
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    severity_number: Option<i32>,
}

impl tracing::field::Visit for EventVisitor {
    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        if field.name() == "severity_number" {
            self.severity_number = i32::try_from(value).ok();
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }
}

/// Install a global subscriber that records events at or above the threshold.
///
/// # Example
///
/// ```rust,ignore
/// use otlog::{LoggingConfig, init_tracing};
///
/// init_tracing(LoggingConfig::from_verbose_level(1))?;
/// tracing::warn!("disk almost full");
/// ```
pub fn init_tracing(config: LoggingConfig) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(SeverityLayer::new(config))
        .try_init()
}

/// Install a global subscriber combining a custom filter with the threshold.
///
/// # Example
///
/// ```rust,ignore
/// use otlog::{LoggingConfig, init_tracing_with_filter};
/// use tracing_subscriber::EnvFilter;
///
/// let filter = EnvFilter::from_default_env();
/// init_tracing_with_filter(LoggingConfig::default(), filter)?;
/// ```
pub fn init_tracing_with_filter<F>(config: LoggingConfig, filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(SeverityLayer::new(config))
        .try_init()
}
