//! crates/otlog/src/error.rs
//! Error types surfaced by severity parsing and telemetry start-up.

use thiserror::Error;

/// Error returned when a severity name is not one of the 24 canonical names.
///
/// Matching is exact: no case folding and no trimming is applied by the
/// lookup helpers that produce this error. The offending input is retained so
/// callers can report it verbatim.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid OpenTelemetry log severity name - {name}")]
pub struct ParseSeverityError {
    name: String,
}

impl ParseSeverityError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the input that failed to match a canonical severity name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Error returned when the SDK version cannot be resolved from build metadata.
///
/// The version is embedded in every record's telemetry descriptor, so this
/// error is fatal for start-up: hosts must not log without a resolved version.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum VersionError {
    /// No version was recorded in the build metadata.
    #[error("unable to retrieve module version number")]
    Missing,
    /// The recorded version is not a semantic version.
    #[error("invalid module version number {version:?}: {reason}")]
    Invalid {
        /// The rejected version text.
        version: String,
        /// Why the version was rejected.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_keeps_offending_input() {
        let error = ParseSeverityError::new("\"info\"");
        assert_eq!(error.name(), "\"info\"");
        assert_eq!(
            error.to_string(),
            "invalid OpenTelemetry log severity name - \"info\""
        );
    }

    #[test]
    fn version_errors_render_reason() {
        assert_eq!(
            VersionError::Missing.to_string(),
            "unable to retrieve module version number"
        );

        let invalid = VersionError::Invalid {
            version: "1.x".to_owned(),
            reason: "expected x.y.z format",
        };
        assert_eq!(
            invalid.to_string(),
            "invalid module version number \"1.x\": expected x.y.z format"
        );
    }
}
