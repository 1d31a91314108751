//! crates/otlog/src/record.rs
//! Record fields required by OpenTelemetry that a generic log engine lacks.

use std::fmt;

use super::error::VersionError;
use super::telemetry::{self, TelemetrySdk};

macro_rules! id16 {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
        pub struct $name([u8; 16]);

        impl $name {
            /// The all-zero identifier, which is treated as absent.
            pub const EMPTY: Self = Self([0; 16]);

            /// Wraps raw identifier bytes.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; 16]) -> Self {
                Self(bytes)
            }

            /// Returns the raw identifier bytes.
            #[must_use]
            pub const fn to_bytes(self) -> [u8; 16] {
                self.0
            }

            /// Reports whether every byte is zero.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.iter().all(|byte| *byte == 0)
            }
        }

        impl From<[u8; 16]> for $name {
            fn from(bytes: [u8; 16]) -> Self {
                Self(bytes)
            }
        }

        /// Lowercase hexadecimal, 32 characters.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }
    };
}

id16! {
    /// Identifier of the span a record was emitted in.
    SpanId
}

id16! {
    /// Identifier of the trace a record belongs to.
    TraceId
}

/// OpenTelemetry metadata attached to a single log record.
///
/// Correlation identifiers and the service name are supplied by the caller;
/// the telemetry descriptor is the process-wide one resolved by
/// [`telemetry::init`]. Records are immutable once built: the `with_*`
/// helpers consume and return the record.
///
/// With the `serde` feature the record serialises as
///
/// ```json
/// {
///   "spanId": "…32 hex digits…",
///   "traceId": "…32 hex digits…",
///   "service.name": "checkout",
///   "telemetry.sdk.name": "otlog",
///   "telemetry.sdk.language": "rust",
///   "telemetry.sdk.version": "0.1.0"
/// }
/// ```
///
/// where empty (all-zero) identifiers are omitted.
#[doc(alias = "OTRecord")]
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OtRecord {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "spanId", skip_serializing_if = "SpanId::is_empty")
    )]
    span_id: SpanId,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "traceId", skip_serializing_if = "TraceId::is_empty")
    )]
    trace_id: TraceId,
    #[cfg_attr(feature = "serde", serde(rename = "service.name"))]
    service: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    telemetry_sdk: TelemetrySdk,
}

impl OtRecord {
    /// Creates a record for `service` carrying the process-wide descriptor.
    ///
    /// Fails when the SDK version cannot be resolved.
    pub fn new(service: impl Into<String>) -> Result<Self, VersionError> {
        let sdk = telemetry::init()?;
        Ok(Self::with_sdk(sdk.clone(), service))
    }

    /// Creates a record for `service` carrying an explicit descriptor.
    #[must_use]
    pub fn with_sdk(telemetry_sdk: TelemetrySdk, service: impl Into<String>) -> Self {
        Self {
            span_id: SpanId::EMPTY,
            trace_id: TraceId::EMPTY,
            service: service.into(),
            telemetry_sdk,
        }
    }

    /// Returns the record with its span identifier set.
    #[must_use]
    pub fn with_span_id(mut self, span_id: SpanId) -> Self {
        self.span_id = span_id;
        self
    }

    /// Returns the record with its trace identifier set.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = trace_id;
        self
    }

    /// Span identifier; [`SpanId::EMPTY`] when unset.
    #[must_use]
    pub const fn span_id(&self) -> SpanId {
        self.span_id
    }

    /// Trace identifier; [`TraceId::EMPTY`] when unset.
    #[must_use]
    pub const fn trace_id(&self) -> TraceId {
        self.trace_id
    }

    /// Service name (`service.name`).
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Telemetry descriptor of the emitting SDK.
    #[must_use]
    pub const fn telemetry_sdk(&self) -> &TelemetrySdk {
        &self.telemetry_sdk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bytes() -> [u8; 16] {
        let mut bytes = [0; 16];
        for (index, byte) in bytes.iter_mut().enumerate() {
            *byte = index as u8 * 17;
        }
        bytes
    }

    #[test]
    fn ids_render_as_lowercase_hex() {
        let span = SpanId::from_bytes(sample_bytes());
        assert_eq!(span.to_string(), "00112233445566778899aabbccddeeff");
        assert_eq!(TraceId::EMPTY.to_string(), "0".repeat(32));
    }

    #[test]
    fn empty_means_all_zero() {
        assert!(SpanId::default().is_empty());
        assert!(TraceId::EMPTY.is_empty());

        let mut bytes = [0; 16];
        bytes[15] = 1;
        assert!(!TraceId::from(bytes).is_empty());
    }

    #[test]
    fn new_record_uses_process_descriptor() {
        let record = OtRecord::new("checkout").expect("version resolves");
        assert_eq!(record.service(), "checkout");
        assert_eq!(Some(record.telemetry_sdk()), telemetry::sdk());
        assert!(record.span_id().is_empty());
        assert!(record.trace_id().is_empty());
    }

    #[test]
    fn with_helpers_set_identifiers() {
        let sdk = TelemetrySdk::with_version("1.0.0").expect("valid version");
        let record = OtRecord::with_sdk(sdk, "billing")
            .with_span_id(SpanId::from_bytes(sample_bytes()))
            .with_trace_id(TraceId::from_bytes([0xab; 16]));

        assert_eq!(record.span_id().to_bytes(), sample_bytes());
        assert_eq!(record.trace_id().to_bytes(), [0xab; 16]);
        assert_eq!(record.telemetry_sdk().version(), "1.0.0");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn empty_identifiers_are_omitted() {
            let sdk = TelemetrySdk::with_version("1.2.3").expect("valid version");
            let record = OtRecord::with_sdk(sdk, "inventory");

            let json: serde_json::Value = serde_json::to_value(&record).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "service.name": "inventory",
                    "telemetry.sdk.name": "otlog",
                    "telemetry.sdk.language": "rust",
                    "telemetry.sdk.version": "1.2.3",
                })
            );
        }

        #[test]
        fn identifiers_serialise_as_hex() {
            let sdk = TelemetrySdk::with_version("1.2.3").expect("valid version");
            let record = OtRecord::with_sdk(sdk, "inventory")
                .with_span_id(SpanId::from_bytes(sample_bytes()))
                .with_trace_id(TraceId::from_bytes([0xff; 16]));

            let json: serde_json::Value = serde_json::to_value(&record).unwrap();
            assert_eq!(json["spanId"], "00112233445566778899aabbccddeeff");
            assert_eq!(json["traceId"], "f".repeat(32));
            assert_eq!(json["service.name"], "inventory");
        }
    }
}
