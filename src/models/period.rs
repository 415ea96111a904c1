//! Report granularity
//!
//! Splits a calendar year into equal runs of months: twelve months, four
//! quarters, two halves or the whole year.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Bucket size of a periodic report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
}

impl Granularity {
    /// Number of months covered by one bucket
    pub const fn months_per_bucket(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Semiannual => 6,
            Self::Annual => 12,
        }
    }

    /// Number of buckets in a year
    pub const fn bucket_count(&self) -> usize {
        (12 / self.months_per_bucket()) as usize
    }

    /// Zero-based bucket index of a date within its own year
    pub fn bucket_of(&self, date: NaiveDate) -> usize {
        (date.month0() / self.months_per_bucket()) as usize
    }

    /// Human label for bucket `index` of `year`
    pub fn label(&self, year: i32, index: usize) -> String {
        match self {
            Self::Monthly => MONTH_NAMES
                .get(index)
                .map(|name| name.to_string())
                .unwrap_or_else(|| format!("Month {}", index + 1)),
            Self::Quarterly => format!("Q{}", index + 1),
            Self::Semiannual => format!("Half {}", index + 1),
            Self::Annual => year.to_string(),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Quarterly => write!(f, "quarterly"),
            Self::Semiannual => write!(f, "semiannual"),
            Self::Annual => write!(f, "annual"),
        }
    }
}

impl FromStr for Granularity {
    type Err = GranularityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" => Ok(Self::Monthly),
            "quarterly" | "quarter" => Ok(Self::Quarterly),
            "semiannual" | "half" | "half-year" => Ok(Self::Semiannual),
            "annual" | "yearly" | "year" => Ok(Self::Annual),
            _ => Err(GranularityParseError::Unknown(s.to_string())),
        }
    }
}

/// Error type for granularity parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GranularityParseError {
    Unknown(String),
}

impl fmt::Display for GranularityParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GranularityParseError::Unknown(s) => write!(
                f,
                "Unknown granularity '{}' (expected monthly, quarterly, semiannual or annual)",
                s
            ),
        }
    }
}

impl std::error::Error for GranularityParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, 15).unwrap()
    }

    #[test]
    fn test_bucket_counts() {
        assert_eq!(Granularity::Monthly.bucket_count(), 12);
        assert_eq!(Granularity::Quarterly.bucket_count(), 4);
        assert_eq!(Granularity::Semiannual.bucket_count(), 2);
        assert_eq!(Granularity::Annual.bucket_count(), 1);
    }

    #[test]
    fn test_bucket_of() {
        assert_eq!(Granularity::Monthly.bucket_of(date(1)), 0);
        assert_eq!(Granularity::Monthly.bucket_of(date(12)), 11);
        assert_eq!(Granularity::Quarterly.bucket_of(date(3)), 0);
        assert_eq!(Granularity::Quarterly.bucket_of(date(4)), 1);
        assert_eq!(Granularity::Quarterly.bucket_of(date(10)), 3);
        assert_eq!(Granularity::Semiannual.bucket_of(date(6)), 0);
        assert_eq!(Granularity::Semiannual.bucket_of(date(7)), 1);
        assert_eq!(Granularity::Annual.bucket_of(date(12)), 0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Granularity::Monthly.label(2025, 0), "January");
        assert_eq!(Granularity::Monthly.label(2025, 11), "December");
        assert_eq!(Granularity::Quarterly.label(2025, 2), "Q3");
        assert_eq!(Granularity::Semiannual.label(2025, 1), "Half 2");
        assert_eq!(Granularity::Annual.label(2025, 0), "2025");
    }

    #[test]
    fn test_parse() {
        assert_eq!("Quarterly".parse::<Granularity>().unwrap(), Granularity::Quarterly);
        assert_eq!("half".parse::<Granularity>().unwrap(), Granularity::Semiannual);
        assert_eq!("year".parse::<Granularity>().unwrap(), Granularity::Annual);
        assert!("weekly".parse::<Granularity>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for g in [
            Granularity::Monthly,
            Granularity::Quarterly,
            Granularity::Semiannual,
            Granularity::Annual,
        ] {
            assert_eq!(g.to_string().parse::<Granularity>().unwrap(), g);
        }
    }
}
