//! crates/otlog/src/severity.rs
//! The 24-value OpenTelemetry severity scale and its canonical names.
//!
//! The data model for an OpenTelemetry log record, including the severity
//! number ranges mirrored here, is described at
//! <https://opentelemetry.io/docs/specs/otel/logs/data-model/>.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::band::{Band, SUB_LEVELS};
use super::error::ParseSeverityError;

/// Lowest valid severity value.
const MIN: i32 = 1;
/// Highest valid severity value.
const MAX: i32 = 24;

/// Canonical names indexed by `value - 1`.
const NAMES: [&str; MAX as usize] = [
    "TRACE", "TRACE2", "TRACE3", "TRACE4", //
    "DEBUG", "DEBUG2", "DEBUG3", "DEBUG4", //
    "INFO", "INFO2", "INFO3", "INFO4", //
    "WARN", "WARN2", "WARN3", "WARN4", //
    "ERROR", "ERROR2", "ERROR3", "ERROR4", //
    "FATAL", "FATAL2", "FATAL3", "FATAL4",
];

/// Inverse table keyed by the quoted canonical name, as it appears in a JSON token.
fn quoted_names() -> &'static HashMap<String, Severity> {
    static TABLE: OnceLock<HashMap<String, Severity>> = OnceLock::new();
    TABLE.get_or_init(|| {
        Severity::ALL
            .iter()
            .zip(NAMES)
            .map(|(severity, name)| (format!("\"{name}\""), *severity))
            .collect()
    })
}

/// Importance of a log record on the OpenTelemetry 1–24 scale.
///
/// The wrapped integer is not range-checked: values outside `[1, 24]` can be
/// constructed so that corrupted input still flows through logging paths.
/// Such values belong to no band and display as a diagnostic placeholder.
///
/// # Examples
///
/// ```
/// use otlog::Severity;
///
/// assert_eq!(Severity::new(20).to_string(), "ERROR4");
/// assert!(Severity::new(25).to_string().contains("25"));
/// assert_eq!(Severity::from_quoted_name("\"INFO\""), Ok(Severity::INFO));
/// assert!(Severity::from_quoted_name("\"info\"").is_err());
/// ```
#[doc(alias = "Level")]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Severity(i32);

impl Severity {
    /// `TRACE` (1).
    pub const TRACE: Self = Self(1);
    /// `TRACE2` (2).
    pub const TRACE2: Self = Self(2);
    /// `TRACE3` (3).
    pub const TRACE3: Self = Self(3);
    /// `TRACE4` (4).
    pub const TRACE4: Self = Self(4);
    /// `DEBUG` (5).
    pub const DEBUG: Self = Self(5);
    /// `DEBUG2` (6).
    pub const DEBUG2: Self = Self(6);
    /// `DEBUG3` (7).
    pub const DEBUG3: Self = Self(7);
    /// `DEBUG4` (8).
    pub const DEBUG4: Self = Self(8);
    /// `INFO` (9).
    pub const INFO: Self = Self(9);
    /// `INFO2` (10).
    pub const INFO2: Self = Self(10);
    /// `INFO3` (11).
    pub const INFO3: Self = Self(11);
    /// `INFO4` (12).
    pub const INFO4: Self = Self(12);
    /// `WARN` (13).
    pub const WARN: Self = Self(13);
    /// `WARN2` (14).
    pub const WARN2: Self = Self(14);
    /// `WARN3` (15).
    pub const WARN3: Self = Self(15);
    /// `WARN4` (16).
    pub const WARN4: Self = Self(16);
    /// `ERROR` (17).
    pub const ERROR: Self = Self(17);
    /// `ERROR2` (18).
    pub const ERROR2: Self = Self(18);
    /// `ERROR3` (19).
    pub const ERROR3: Self = Self(19);
    /// `ERROR4` (20).
    pub const ERROR4: Self = Self(20);
    /// `FATAL` (21).
    pub const FATAL: Self = Self(21);
    /// `FATAL2` (22).
    pub const FATAL2: Self = Self(22);
    /// `FATAL3` (23).
    pub const FATAL3: Self = Self(23);
    /// `FATAL4` (24).
    pub const FATAL4: Self = Self(24);

    /// Every valid severity in ascending order.
    pub const ALL: [Self; MAX as usize] = {
        let mut all = [Self(0); MAX as usize];
        let mut index = 0;
        while index < all.len() {
            all[index] = Self(index as i32 + MIN);
            index += 1;
        }
        all
    };

    /// Wraps a raw severity number without validating it.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw severity number.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Reports whether the value lies on the 1–24 scale.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= MIN && self.0 <= MAX
    }

    /// Returns the canonical name, or `None` for values outside the scale.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        if self.is_valid() {
            Some(NAMES[(self.0 - MIN) as usize])
        } else {
            None
        }
    }

    /// Returns the band containing this severity.
    #[must_use]
    pub const fn band(self) -> Option<Band> {
        Band::of(self)
    }

    /// Returns the 1-based sub-level within the band.
    #[must_use]
    pub const fn sub_level(self) -> Option<u8> {
        if self.is_valid() {
            Some(((self.0 - MIN) % SUB_LEVELS as i32) as u8 + 1)
        } else {
            None
        }
    }

    /// Looks up a quoted canonical name such as `"WARN2"` (quotes included).
    ///
    /// The input is matched exactly against the inverse table, the way a raw
    /// JSON string token would be. Bare names are accepted by the [`FromStr`]
    /// implementation instead.
    #[doc(alias = "SeverityFromString")]
    pub fn from_quoted_name(quoted: &str) -> Result<Self, ParseSeverityError> {
        quoted_names()
            .get(quoted)
            .copied()
            .ok_or_else(|| ParseSeverityError::new(quoted))
    }

    /// Reports whether the value is in `[TRACE, TRACE4]`.
    #[must_use]
    pub const fn is_trace(self) -> bool {
        self.0 >= Self::TRACE.0 && self.0 <= Self::TRACE4.0
    }

    /// Reports whether the value is in `[DEBUG, DEBUG4)`.
    ///
    /// Unlike the other band predicates the upper bound is exclusive, so
    /// `DEBUG4` is not classified as debug. Callers that need the full band
    /// should use [`Band::contains`].
    #[must_use]
    pub const fn is_debug(self) -> bool {
        self.0 >= Self::DEBUG.0 && self.0 < Self::DEBUG4.0
    }

    /// Reports whether the value is in `[INFO, INFO4]`.
    #[must_use]
    pub const fn is_info(self) -> bool {
        self.0 >= Self::INFO.0 && self.0 <= Self::INFO4.0
    }

    /// Reports whether the value is in `[WARN, WARN4]`.
    #[must_use]
    pub const fn is_warn(self) -> bool {
        self.0 >= Self::WARN.0 && self.0 <= Self::WARN4.0
    }

    /// Reports whether the value is in `[ERROR, ERROR4]`.
    #[must_use]
    pub const fn is_error(self) -> bool {
        self.0 >= Self::ERROR.0 && self.0 <= Self::ERROR4.0
    }

    /// Reports whether the value is in `[FATAL, FATAL4]`.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        self.0 >= Self::FATAL.0 && self.0 <= Self::FATAL4.0
    }

    /// Any severity of `ERROR` or above describes an erroneous situation
    /// that downstream consumers must act on.
    ///
    /// There is no upper bound: out-of-range values above 24 also qualify.
    #[must_use]
    pub const fn should_not_ignore(self) -> bool {
        self.0 >= Self::ERROR.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(
                f,
                "**INVALID OpenTelemetry log severity value - {}**",
                self.0
            ),
        }
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a bare canonical name (`INFO3`). Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .iter()
            .position(|name| *name == s)
            .map(|index| Self::ALL[index])
            .ok_or_else(|| ParseSeverityError::new(s))
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

/// Valid severities serialise as their canonical name, anything else as the
/// bare integer so that it can be read back.
#[cfg(feature = "serde")]
impl serde::Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_i32(self.0),
        }
    }
}

/// Accepts a bare canonical name or an integer severity number.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(SeverityVisitor)
    }
}

#[cfg(feature = "serde")]
struct SeverityVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for SeverityVisitor {
    type Value = Severity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a canonical severity name or a severity number")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        value.parse().map_err(E::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i32::try_from(value)
            .map(Severity::new)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Signed(value), &self))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i32::try_from(value)
            .map(Severity::new)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Unsigned(value), &self))
    }
}
