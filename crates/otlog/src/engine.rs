//! crates/otlog/src/engine.rs
//! Contract of the log engine that performs record emission.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Back end that formats and emits records on behalf of an [`OtLogger`](crate::OtLogger).
///
/// The level is the plain integer value of a [`Severity`](crate::Severity);
/// engines are expected to treat higher values as more severe. Both methods
/// receive their inputs exactly as the caller supplied them. Error handling,
/// buffering and output management are entirely the engine's concern.
pub trait LogEngine {
    /// Emits a record built from `args`.
    fn log(&self, level: i32, args: &[&dyn fmt::Display]);

    /// Emits a record built from a `%`-verb `format` string and its `args`.
    fn logf(&self, level: i32, format: &str, args: &[&dyn fmt::Display]);
}

impl<E> LogEngine for &E
where
    E: LogEngine + ?Sized,
{
    fn log(&self, level: i32, args: &[&dyn fmt::Display]) {
        (**self).log(level, args);
    }

    fn logf(&self, level: i32, format: &str, args: &[&dyn fmt::Display]) {
        (**self).logf(level, format, args);
    }
}

impl<E> LogEngine for Box<E>
where
    E: LogEngine + ?Sized,
{
    fn log(&self, level: i32, args: &[&dyn fmt::Display]) {
        (**self).log(level, args);
    }

    fn logf(&self, level: i32, format: &str, args: &[&dyn fmt::Display]) {
        (**self).logf(level, format, args);
    }
}

impl<E> LogEngine for Rc<E>
where
    E: LogEngine + ?Sized,
{
    fn log(&self, level: i32, args: &[&dyn fmt::Display]) {
        (**self).log(level, args);
    }

    fn logf(&self, level: i32, format: &str, args: &[&dyn fmt::Display]) {
        (**self).logf(level, format, args);
    }
}

impl<E> LogEngine for Arc<E>
where
    E: LogEngine + ?Sized,
{
    fn log(&self, level: i32, args: &[&dyn fmt::Display]) {
        (**self).log(level, args);
    }

    fn logf(&self, level: i32, format: &str, args: &[&dyn fmt::Display]) {
        (**self).logf(level, format, args);
    }
}
