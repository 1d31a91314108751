#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `otlog` maps log calls onto the 24-value severity scale of the
//! OpenTelemetry logs data model. The scale is split into six bands (trace,
//! debug, info, warn, error, fatal) of four sub-levels each, and every value
//! has a canonical upper-case name such as `WARN3`.
//!
//! # Design
//!
//! [`Severity`] wraps the raw severity number and owns the two lookup tables:
//! a constant array of canonical names and an inverse table keyed by quoted
//! names, built once on first use. [`OtLogger`] exposes one method per
//! severity and call style (`warn3`, `warnf3`, …); all of them are generated
//! from a single table and route through [`OtLogger::log`] and
//! [`OtLogger::logf`], which forward to an injected [`LogEngine`].
//!
//! Two engines ship with the crate: [`MemoryEngine`] records calls in a
//! thread-local buffer, and `TracingEngine` (feature `tracing`) emits them as
//! `tracing` events. [`OtRecord`] carries the per-record OpenTelemetry fields
//! together with the [`TelemetrySdk`] descriptor resolved by
//! [`telemetry::init`].
//!
//! # Invariants
//!
//! - Band order is monotonic: every trace value is below every debug value,
//!   and so on up to fatal.
//! - Displaying an out-of-range severity never fails; it yields a placeholder
//!   that embeds the offending number.
//! - Each logger method causes exactly one engine call and passes the format
//!   string and arguments through unchanged.
//! - The lookup tables and the telemetry descriptor are immutable after
//!   initialisation and safe to read from any thread.
//!
//! # Errors
//!
//! Unknown severity names produce [`ParseSeverityError`]. An unresolvable SDK
//! version produces [`VersionError`], which hosts should treat as fatal at
//! start-up.
//!
//! # Examples
//!
//! ```
//! use otlog::{MemoryEngine, OtLogger, Severity, drain_events};
//!
//! otlog::telemetry::init().expect("SDK version resolves");
//!
//! let logger = OtLogger::new(MemoryEngine);
//! logger.error2(&[&"connection reset"]);
//! logger.infof("%s took %dms", &[&"sync", &120]);
//!
//! let events = drain_events();
//! assert_eq!(events[0].severity, Severity::ERROR2);
//! assert!(events[0].severity.should_not_ignore());
//! assert_eq!(events[1].message(), "sync took 120ms");
//! ```
//!
//! # See also
//!
//! - <https://opentelemetry.io/docs/specs/otel/logs/data-model/> for the
//!   severity number ranges.

mod band;
mod config;
mod engine;
mod error;
pub mod format;
mod logger;
mod macros;
mod record;
mod severity;
pub mod telemetry;
mod thread_local;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use band::{Band, SUB_LEVELS};
pub use config::{DEFAULT_SERVICE_NAME, LoggingConfig};
pub use engine::LogEngine;
pub use error::{ParseSeverityError, VersionError};
pub use logger::OtLogger;
pub use record::{OtRecord, SpanId, TraceId};
pub use severity::Severity;
pub use telemetry::TelemetrySdk;
pub use thread_local::{CapturedEvent, MemoryEngine, capture, drain_events};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{
    SeverityLayer, TARGET, TracingEngine, init_tracing, init_tracing_with_filter,
};
