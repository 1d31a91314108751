//! crates/otlog/src/telemetry.rs
//! Identifying metadata for the SDK that emitted a record.
//!
//! OpenTelemetry consumers key compatibility decisions on the SDK name,
//! language and version attached to each record. The version is taken from
//! this crate's build metadata and validated once per process by [`init`];
//! hosts call it during start-up and treat an error as fatal.

use std::sync::OnceLock;

use super::error::VersionError;

/// Name reported as `telemetry.sdk.name`.
pub const SDK_NAME: &str = "otlog";

/// Language reported as `telemetry.sdk.language`.
pub const SDK_LANGUAGE: &str = "rust";

static SDK: OnceLock<Result<TelemetrySdk, VersionError>> = OnceLock::new();

/// The `telemetry.sdk.*` attribute triple.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TelemetrySdk {
    #[cfg_attr(feature = "serde", serde(rename = "telemetry.sdk.name"))]
    name: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "telemetry.sdk.language"))]
    language: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "telemetry.sdk.version"))]
    version: String,
}

impl TelemetrySdk {
    /// Builds a descriptor for this SDK reporting `version`.
    pub fn with_version(version: &str) -> Result<Self, VersionError> {
        Ok(Self {
            name: SDK_NAME,
            language: SDK_LANGUAGE,
            version: resolve_version(Some(version))?,
        })
    }

    fn from_build_metadata() -> Result<Self, VersionError> {
        let version = resolve_version(option_env!("CARGO_PKG_VERSION"))?;
        Ok(Self {
            name: SDK_NAME,
            language: SDK_LANGUAGE,
            version,
        })
    }

    /// Returns the SDK name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the SDK language tag.
    #[must_use]
    pub const fn language(&self) -> &'static str {
        self.language
    }

    /// Returns the SDK version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Validates a recorded version string.
///
/// Accepts `x.y.z` with optional `-pre-release` and `+build` suffixes and
/// returns it with surrounding whitespace removed.
pub fn resolve_version(raw: Option<&str>) -> Result<String, VersionError> {
    let version = raw.map(str::trim).unwrap_or_default();
    if version.is_empty() {
        return Err(VersionError::Missing);
    }

    let invalid = |reason| VersionError::Invalid {
        version: version.to_owned(),
        reason,
    };

    let without_build = match version.split_once('+') {
        Some((_, "")) => return Err(invalid("empty build metadata")),
        Some((head, _)) => head,
        None => version,
    };
    let core = match without_build.split_once('-') {
        Some((_, "")) => return Err(invalid("empty pre-release")),
        Some((head, _)) => head,
        None => without_build,
    };

    let parts: Vec<&str> = core.split('.').collect();
    if parts.len() != 3 {
        return Err(invalid("expected x.y.z format"));
    }
    if parts.iter().any(|part| part.parse::<u64>().is_err()) {
        return Err(invalid("version components must be unsigned integers"));
    }

    Ok(version.to_owned())
}

/// Resolves the SDK descriptor from build metadata, once per process.
///
/// The first call performs the resolution; every later call returns the same
/// outcome. Hosts should call this before the first record is built and abort
/// start-up on error.
pub fn init() -> Result<&'static TelemetrySdk, VersionError> {
    SDK.get_or_init(|| {
        let resolved = TelemetrySdk::from_build_metadata();
        #[cfg(feature = "tracing")]
        trace_resolution(&resolved);
        resolved
    })
    .as_ref()
    .map_err(Clone::clone)
}

#[cfg(feature = "tracing")]
fn trace_resolution(resolved: &Result<TelemetrySdk, VersionError>) {
    match resolved {
        Ok(sdk) => tracing::debug!(
            target: "otlog::telemetry",
            version = sdk.version(),
            "resolved telemetry SDK version"
        ),
        Err(error) => tracing::error!(
            target: "otlog::telemetry",
            %error,
            "unable to resolve telemetry SDK version"
        ),
    }
}

/// Returns the descriptor if [`init`] has succeeded.
#[must_use]
pub fn sdk() -> Option<&'static TelemetrySdk> {
    SDK.get().and_then(|resolved| resolved.as_ref().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_resolves_crate_version_once() {
        let first = init().expect("crate version resolves");
        let second = init().expect("crate version resolves");

        assert!(std::ptr::eq(first, second));
        assert_eq!(first.name(), "otlog");
        assert_eq!(first.language(), "rust");
        assert_eq!(first.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(sdk(), Some(first));
    }

    #[test]
    fn resolve_version_accepts_semver_forms() {
        assert_eq!(resolve_version(Some("0.6.1")).as_deref(), Ok("0.6.1"));
        assert_eq!(resolve_version(Some(" 1.2.3 ")).as_deref(), Ok("1.2.3"));
        assert_eq!(
            resolve_version(Some("1.0.0-rc.1+build.7")).as_deref(),
            Ok("1.0.0-rc.1+build.7")
        );
    }

    #[test]
    fn resolve_version_rejects_missing_values() {
        assert_eq!(resolve_version(None), Err(VersionError::Missing));
        assert_eq!(resolve_version(Some("")), Err(VersionError::Missing));
        assert_eq!(resolve_version(Some("   ")), Err(VersionError::Missing));
    }

    #[test]
    fn resolve_version_rejects_malformed_values() {
        for raw in ["1.2", "1.2.3.4", "v1.2.3", "1.x.3", "1.2.3-", "1.2.3+", "(devel)"] {
            match resolve_version(Some(raw)) {
                Err(VersionError::Invalid { version, .. }) => assert_eq!(version, raw),
                other => panic!("{raw}: expected invalid version, got {other:?}"),
            }
        }
    }

    #[test]
    fn with_version_builds_descriptor() {
        let sdk = TelemetrySdk::with_version("2.0.0").expect("valid version");
        assert_eq!(sdk.version(), "2.0.0");
        assert_eq!(sdk.name(), SDK_NAME);
        assert!(TelemetrySdk::with_version("latest").is_err());
    }
}
