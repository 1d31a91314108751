//! crates/otlog/src/macros.rs
//! Call-site macros that build the argument slice for [`OtLogger`](crate::OtLogger).

/// Log displayable arguments at a severity.
///
/// # Example
/// ```
/// use otlog::{MemoryEngine, OtLogger, Severity, drain_events, otlog};
///
/// let logger = OtLogger::new(MemoryEngine);
/// otlog!(logger, Severity::INFO2, "connected to", "db-1");
/// assert_eq!(drain_events()[0].message(), "connected to db-1");
/// ```
#[macro_export]
macro_rules! otlog {
    ($logger:expr, $severity:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $severity,
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        )
    };
}

/// Log a `%`-verb format string and its arguments at a severity.
///
/// # Example
/// ```
/// use otlog::{MemoryEngine, OtLogger, Severity, drain_events, otlogf};
///
/// let logger = OtLogger::new(MemoryEngine);
/// otlogf!(logger, Severity::WARN3, "value=%d", 42);
///
/// let event = &drain_events()[0];
/// assert_eq!(event.format.as_deref(), Some("value=%d"));
/// assert_eq!(event.message(), "value=42");
/// ```
#[macro_export]
macro_rules! otlogf {
    ($logger:expr, $severity:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.logf(
            $severity,
            $format,
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::{MemoryEngine, OtLogger, Severity, drain_events};

    #[test]
    fn otlog_without_arguments() {
        let logger = OtLogger::new(MemoryEngine);
        drain_events();

        otlog!(logger, Severity::DEBUG);

        let events = drain_events();
        assert_eq!(events.len(), 1);
        assert!(events[0].args.is_empty());
    }

    #[test]
    fn otlogf_accepts_mixed_argument_types() {
        let logger = OtLogger::new(MemoryEngine);
        drain_events();

        let path = String::from("/var/log");
        otlogf!(logger, Severity::ERROR2, "%s: %d entries (%v)", path, 3 + 4, 'x',);

        let events = drain_events();
        assert_eq!(events[0].severity, Severity::ERROR2);
        assert_eq!(events[0].args, ["/var/log", "7", "x"]);
        assert_eq!(events[0].message(), "/var/log: 7 entries (x)");
    }
}
