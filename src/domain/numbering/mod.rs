//! Resolution numbering.
//!
//! A resolution number is derived from the owning meeting's scheduled date
//! and the resolution's 1-based position in the effective consent-agenda
//! order: `{2-digit-year}.{month-without-leading-zero}.{sequence}`.
//!
//! Numbers are deterministic for a given (scheduled date, sequence) and are
//! intentionally NOT globally unique across meetings; per-meeting sequences
//! match governance convention.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Canonical resolution number, e.g. "25.3.2" for the second resolution
/// of a meeting scheduled in March 2025.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolutionNumber(String);

impl ResolutionNumber {
    /// Derives the number for a meeting scheduled at `scheduled_at` and a
    /// 1-based sequence position.
    ///
    /// Pure: same inputs always yield the same number.
    pub fn derive(scheduled_at: &Timestamp, sequence: u32) -> Self {
        Self(format!(
            "{:02}.{}.{}",
            scheduled_at.two_digit_year(),
            scheduled_at.month(),
            sequence
        ))
    }

    /// Parses an existing number, validating the `yy.m.seq` shape.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let parts: Vec<&str> = s.split('.').collect();
        let valid = parts.len() == 3
            && parts[0].len() == 2
            && parts[0].chars().all(|c| c.is_ascii_digit())
            && matches!(parts[1].parse::<u32>(), Ok(1..=12))
            && matches!(parts[2].parse::<u32>(), Ok(n) if n >= 1);
        if !valid {
            return Err(ValidationError::invalid_format(
                "resolution_number",
                format!("'{}' does not match year.month.sequence", s),
            ));
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolutionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResolutionNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn scheduled(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(y, m, d, 19, 0, 0).unwrap())
    }

    #[test]
    fn derive_formats_march_2025() {
        let number = ResolutionNumber::derive(&scheduled(2025, 3, 10), 1);
        assert_eq!(number.as_str(), "25.3.1");
    }

    #[test]
    fn derive_pads_year_not_month() {
        let number = ResolutionNumber::derive(&scheduled(2103, 11, 1), 14);
        assert_eq!(number.as_str(), "03.11.14");
    }

    #[test]
    fn derive_is_deterministic() {
        let at = scheduled(2025, 6, 2);
        assert_eq!(
            ResolutionNumber::derive(&at, 3),
            ResolutionNumber::derive(&at, 3)
        );
    }

    #[test]
    fn parse_accepts_derived_numbers() {
        let number = ResolutionNumber::derive(&scheduled(2025, 3, 10), 2);
        let parsed = ResolutionNumber::parse(number.as_str()).unwrap();
        assert_eq!(parsed, number);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for bad in ["", "25.3", "2025.3.1", "25.13.1", "25.3.0", "25.x.1"] {
            assert!(ResolutionNumber::parse(bad).is_err(), "accepted {:?}", bad);
        }
    }

    proptest! {
        #[test]
        fn derived_numbers_always_parse(
            year in 2000i32..2099,
            month in 1u32..=12,
            sequence in 1u32..500,
        ) {
            let number = ResolutionNumber::derive(&scheduled(year, month, 1), sequence);
            prop_assert!(ResolutionNumber::parse(number.as_str()).is_ok());
        }

        #[test]
        fn derive_is_a_pure_function(
            year in 2000i32..2099,
            month in 1u32..=12,
            sequence in 1u32..500,
        ) {
            let at = scheduled(year, month, 1);
            prop_assert_eq!(
                ResolutionNumber::derive(&at, sequence),
                ResolutionNumber::derive(&at, sequence)
            );
        }
    }
}
