//! crates/otlog/src/logger.rs
//! Severity-keyed logging methods forwarding to a [`LogEngine`].

use std::fmt;

use super::engine::LogEngine;
use super::severity::Severity;

/// Logger exposing one entry point per OpenTelemetry severity.
///
/// Every method forwards to the wrapped engine exactly once, passing the
/// arguments and format string through untouched. The logger itself performs
/// no filtering, buffering or validation.
///
/// # Examples
///
/// ```
/// use otlog::{MemoryEngine, OtLogger, Severity, drain_events};
///
/// let logger = OtLogger::new(MemoryEngine);
/// logger.warnf3("value=%d", &[&42]);
///
/// let events = drain_events();
/// assert_eq!(events[0].severity, Severity::WARN3);
/// assert_eq!(events[0].format.as_deref(), Some("value=%d"));
/// assert_eq!(events[0].message(), "value=42");
/// ```
#[doc(alias = "OTLogger")]
#[derive(Clone, Debug, Default)]
pub struct OtLogger<E> {
    engine: E,
}

impl<E> OtLogger<E> {
    /// Creates a logger that forwards to `engine`.
    #[must_use]
    pub const fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Borrows the underlying engine.
    #[must_use]
    pub const fn get_ref(&self) -> &E {
        &self.engine
    }

    /// Mutably borrows the underlying engine.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Consumes the logger and returns the wrapped engine.
    #[must_use]
    pub fn into_inner(self) -> E {
        self.engine
    }
}

impl<E> OtLogger<E>
where
    E: LogEngine,
{
    /// Forwards `args` to the engine at `severity`.
    pub fn log(&self, severity: Severity, args: &[&dyn fmt::Display]) {
        self.engine.log(severity.get(), args);
    }

    /// Forwards `format` and `args` to the engine at `severity`.
    pub fn logf(&self, severity: Severity, format: &str, args: &[&dyn fmt::Display]) {
        self.engine.logf(severity.get(), format, args);
    }
}

macro_rules! severity_methods {
    ($(($plain:ident, $formatted:ident, $severity:ident)),* $(,)?) => {
        impl<E> OtLogger<E>
        where
            E: LogEngine,
        {
            $(
                #[doc = concat!("Logs `args` at [`Severity::", stringify!($severity), "`].")]
                pub fn $plain(&self, args: &[&dyn fmt::Display]) {
                    self.log(Severity::$severity, args);
                }

                #[doc = concat!("Logs a formatted record at [`Severity::", stringify!($severity), "`].")]
                pub fn $formatted(&self, format: &str, args: &[&dyn fmt::Display]) {
                    self.logf(Severity::$severity, format, args);
                }
            )*
        }

        #[cfg(test)]
        type AliasCall = fn(&OtLogger<crate::MemoryEngine>);

        /// Every generated alias paired with the severity it must forward.
        #[cfg(test)]
        const ALIASES: &[(&str, Severity, AliasCall)] = &[
            $(
                (stringify!($plain), Severity::$severity, |l| l.$plain(&[])),
                (stringify!($formatted), Severity::$severity, |l| l.$formatted("", &[])),
            )*
        ];
    };
}

severity_methods! {
    (trace, tracef, TRACE),
    (trace2, tracef2, TRACE2),
    (trace3, tracef3, TRACE3),
    (trace4, tracef4, TRACE4),
    (debug, debugf, DEBUG),
    (debug2, debugf2, DEBUG2),
    (debug3, debugf3, DEBUG3),
    (debug4, debugf4, DEBUG4),
    (info, infof, INFO),
    (info2, infof2, INFO2),
    (info3, infof3, INFO3),
    (info4, infof4, INFO4),
    (warn, warnf, WARN),
    (warn2, warnf2, WARN2),
    (warn3, warnf3, WARN3),
    (warn4, warnf4, WARN4),
    (error, errorf, ERROR),
    (error2, errorf2, ERROR2),
    (error3, errorf3, ERROR3),
    (error4, errorf4, ERROR4),
    (fatal, fatalf, FATAL),
    (fatal2, fatalf2, FATAL2),
    (fatal3, fatalf3, FATAL3),
    (fatal4, fatalf4, FATAL4),
}
