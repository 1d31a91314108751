//! crates/otlog/src/band.rs
//! The six named severity bands and their ranges on the severity scale.

use std::fmt;

use super::severity::Severity;

/// Number of sub-levels in every band.
pub const SUB_LEVELS: u8 = 4;

/// One of the six contiguous, four-wide ranges of the severity scale.
///
/// Bands are declared in ascending order so the derived [`Ord`] matches the
/// ordering of their severities: every `Trace` value is below every `Debug`
/// value, and so on up to `Fatal`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Band {
    /// Severities 1 through 4.
    Trace,
    /// Severities 5 through 8.
    Debug,
    /// Severities 9 through 12.
    Info,
    /// Severities 13 through 16.
    Warn,
    /// Severities 17 through 20.
    Error,
    /// Severities 21 through 24.
    Fatal,
}

impl Band {
    /// All bands in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Returns the upper-case name shared by the band's canonical severity names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Returns the lowest severity in the band (its first sub-level).
    #[must_use]
    pub const fn start(self) -> Severity {
        Severity::new(self as i32 * SUB_LEVELS as i32 + 1)
    }

    /// Returns the highest severity in the band (its fourth sub-level).
    #[must_use]
    pub const fn end(self) -> Severity {
        Severity::new(self.start().get() + SUB_LEVELS as i32 - 1)
    }

    /// Returns the severity for sub-level `n` (1-based) of this band.
    #[must_use]
    pub const fn sub_level(self, n: u8) -> Option<Severity> {
        if n == 0 || n > SUB_LEVELS {
            return None;
        }
        Some(Severity::new(self.start().get() + n as i32 - 1))
    }

    /// Reports whether `severity` lies in `[start, end]`.
    ///
    /// This is the uniform inclusive range. The `Severity::is_*` predicates
    /// reproduce the historical boundaries, which differ for the debug band.
    #[must_use]
    pub const fn contains(self, severity: Severity) -> bool {
        let value = severity.get();
        value >= self.start().get() && value <= self.end().get()
    }

    /// Returns the band containing `severity`, or `None` outside `[1, 24]`.
    #[must_use]
    pub const fn of(severity: Severity) -> Option<Self> {
        if !severity.is_valid() {
            return None;
        }
        let index = (severity.get() - 1) / SUB_LEVELS as i32;
        Some(Self::ALL[index as usize])
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_cover_the_scale_in_order() {
        let mut expected_start = 1;
        for band in Band::ALL {
            assert_eq!(band.start().get(), expected_start);
            assert_eq!(band.end().get(), expected_start + 3);
            expected_start += 4;
        }
        assert_eq!(expected_start, 25);
    }

    #[test]
    fn band_ordering_matches_declaration() {
        assert!(Band::Trace < Band::Debug);
        assert!(Band::Debug < Band::Info);
        assert!(Band::Info < Band::Warn);
        assert!(Band::Warn < Band::Error);
        assert!(Band::Error < Band::Fatal);
    }

    #[test]
    fn sub_level_rejects_out_of_range_indices() {
        assert_eq!(Band::Warn.sub_level(0), None);
        assert_eq!(Band::Warn.sub_level(1), Some(Severity::WARN));
        assert_eq!(Band::Warn.sub_level(3), Some(Severity::WARN3));
        assert_eq!(Band::Warn.sub_level(4), Some(Severity::WARN4));
        assert_eq!(Band::Warn.sub_level(5), None);
    }

    #[test]
    fn of_maps_every_valid_value() {
        assert_eq!(Band::of(Severity::new(0)), None);
        assert_eq!(Band::of(Severity::new(1)), Some(Band::Trace));
        assert_eq!(Band::of(Severity::new(8)), Some(Band::Debug));
        assert_eq!(Band::of(Severity::new(9)), Some(Band::Info));
        assert_eq!(Band::of(Severity::new(16)), Some(Band::Warn));
        assert_eq!(Band::of(Severity::new(17)), Some(Band::Error));
        assert_eq!(Band::of(Severity::new(24)), Some(Band::Fatal));
        assert_eq!(Band::of(Severity::new(25)), None);
        assert_eq!(Band::of(Severity::new(-3)), None);
    }

    #[test]
    fn contains_is_inclusive_for_every_band() {
        for band in Band::ALL {
            assert!(band.contains(band.start()));
            assert!(band.contains(band.end()));
            assert!(!band.contains(Severity::new(band.start().get() - 1)));
            assert!(!band.contains(Severity::new(band.end().get() + 1)));
        }
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Band::Error.to_string(), "ERROR");
        assert_eq!(format!("{}", Band::Trace), "TRACE");
    }
}
