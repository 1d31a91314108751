//! crates/otlog/src/config.rs
//! Severity threshold and service identity for the tracing bridge and records.

use super::error::{ParseSeverityError, VersionError};
use super::record::OtRecord;
use super::severity::Severity;

/// Service name reported when none is configured.
pub const DEFAULT_SERVICE_NAME: &str = "unknown_service";

/// Logging configuration shared by the tracing bridge and record construction.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggingConfig {
    /// Lowest severity that is recorded.
    pub min_severity: Severity,
    /// Value of `service.name` on records built from this configuration.
    pub service_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            min_severity: Severity::INFO,
            service_name: DEFAULT_SERVICE_NAME.to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create a new configuration from a verbose level (0-3).
    ///
    /// Each step lowers the threshold by one band: `WARN`, `INFO`, `DEBUG`,
    /// and `TRACE` for level 3 and above.
    pub fn from_verbose_level(level: u8) -> Self {
        let min_severity = match level {
            0 => Severity::WARN,
            1 => Severity::INFO,
            2 => Severity::DEBUG,
            _ => Severity::TRACE,
        };

        Self {
            min_severity,
            ..Self::default()
        }
    }

    /// Returns the configuration with a different service name.
    #[must_use]
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }

    /// Apply a threshold token such as `"warn3"` or `"ERROR"`.
    ///
    /// Tokens are trimmed and matched case-insensitively against the
    /// canonical names, which suits command-line and environment input.
    pub fn apply_threshold(&mut self, token: &str) -> Result<(), ParseSeverityError> {
        self.min_severity = parse_threshold_token(token)?;
        Ok(())
    }

    /// Reports whether `severity` meets the threshold.
    #[must_use]
    pub fn allows(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }

    /// Builds a record for the configured service.
    pub fn record(&self) -> Result<OtRecord, VersionError> {
        OtRecord::new(self.service_name.clone())
    }
}

/// Parse a token like "info2" into [`Severity::INFO2`].
fn parse_threshold_token(token: &str) -> Result<Severity, ParseSeverityError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(ParseSeverityError::new(token));
    }

    trimmed
        .to_ascii_uppercase()
        .parse()
        .map_err(|_| ParseSeverityError::new(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.min_severity, Severity::INFO);
        assert_eq!(config.service_name, "unknown_service");
    }

    #[test]
    fn test_from_verbose_level() {
        assert_eq!(LoggingConfig::from_verbose_level(0).min_severity, Severity::WARN);
        assert_eq!(LoggingConfig::from_verbose_level(1).min_severity, Severity::INFO);
        assert_eq!(LoggingConfig::from_verbose_level(2).min_severity, Severity::DEBUG);
        assert_eq!(LoggingConfig::from_verbose_level(3).min_severity, Severity::TRACE);

        // Level 10 should also have max output
        assert_eq!(LoggingConfig::from_verbose_level(10).min_severity, Severity::TRACE);
    }

    #[test]
    fn test_parse_threshold_token() {
        assert_eq!(parse_threshold_token("info").unwrap(), Severity::INFO);
        assert_eq!(parse_threshold_token("warn3").unwrap(), Severity::WARN3);
        assert_eq!(parse_threshold_token(" FATAL4 ").unwrap(), Severity::FATAL4);
        assert_eq!(parse_threshold_token("Debug2").unwrap(), Severity::DEBUG2);
        assert!(parse_threshold_token("").is_err());
        assert!(parse_threshold_token("warn5").is_err());
        assert!(parse_threshold_token("verbose").is_err());
    }

    #[test]
    fn test_apply_threshold() {
        let mut config = LoggingConfig::default();

        config.apply_threshold("error2").unwrap();
        assert_eq!(config.min_severity, Severity::ERROR2);

        let error = config.apply_threshold("loud").unwrap_err();
        assert_eq!(error.name(), "loud");
        // A rejected token leaves the threshold untouched.
        assert_eq!(config.min_severity, Severity::ERROR2);
    }

    #[test]
    fn test_allows_is_inclusive() {
        let config = LoggingConfig::from_verbose_level(0);
        assert!(!config.allows(Severity::INFO4));
        assert!(config.allows(Severity::WARN));
        assert!(config.allows(Severity::FATAL4));
        assert!(config.allows(Severity::new(30)));
        assert!(!config.allows(Severity::new(0)));
    }

    #[test]
    fn test_record_uses_service_name() {
        let config = LoggingConfig::default().with_service_name("payments");
        let record = config.record().expect("version resolves");
        assert_eq!(record.service(), "payments");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_logging_config_serde_roundtrip() {
            let config = LoggingConfig::from_verbose_level(2).with_service_name("api");

            let json = serde_json::to_string(&config).unwrap();
            assert!(json.contains("\"min_severity\":\"DEBUG\""));

            let decoded: LoggingConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, config);
        }

        #[test]
        fn test_out_of_range_threshold_roundtrip() {
            for value in [0, 30] {
                let config = LoggingConfig {
                    min_severity: Severity::new(value),
                    ..LoggingConfig::default()
                };

                let json = serde_json::to_string(&config).unwrap();
                assert!(json.contains(&format!("\"min_severity\":{value}")));

                let decoded: LoggingConfig = serde_json::from_str(&json).unwrap();
                assert_eq!(decoded, config);
            }
        }

        #[test]
        fn test_missing_fields_take_defaults() {
            let decoded: LoggingConfig =
                serde_json::from_str(r#"{"min_severity":"WARN2"}"#).unwrap();
            assert_eq!(decoded.min_severity, Severity::WARN2);
            assert_eq!(decoded.service_name, DEFAULT_SERVICE_NAME);
        }
    }
}
