// SPDX-License-Identifier: MIT

//!
//! Years, and getting them out of free-text date ranges such as
//! `"28 Dec 2023 - 31 Dec 2023"`
//!

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The minimum year allowed (years are always written with 4 digits)
pub const MIN_YEAR: i64 = 1000;

/// The maximum year allowed (years are always written with 4 digits)
pub const MAX_YEAR: i64 = 9999;

/// What an unparseable year is shown as
const UNKNOWN_YEAR_LABEL: &str = "Unknown";

/// Errors that can arise in relation to a [`Year`] or [`YearKey`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The year is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i64),

    /// The string is neither a 4 digit year nor the unknown year label
    #[error("`{0}` is not a year")]
    InvalidYearKey(String),
}

/// A 4 digit year
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Year(u16);

impl Year {
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for Year {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Year(value as u16))
        } else {
            Err(DateError::InvalidYear(value))
        }
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Year::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// Get the year from the end of a free-text date range.
///
/// Only the last whitespace separated token is looked at, and it must be
/// exactly 4 ASCII digits.  `"Ongoing"`, `"2024."` and `""` all give `None`.
pub fn parse_trailing_year(date_text: &str) -> Option<Year> {
    let token = date_text.split_whitespace().next_back()?;
    if token.len() != 4 || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let value: i64 = token.parse().ok()?;
    Year::try_from(value).ok()
}

/// The key records are grouped under: either the year parsed from the date
/// text, or the sentinel for dates that don't end in a year
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum YearKey {
    Known(Year),
    Unknown,
}

impl YearKey {
    /// Derive the key from a record's free-text date
    pub fn from_date_text(date_text: &str) -> Self {
        match parse_trailing_year(date_text) {
            Some(year) => YearKey::Known(year),
            None => YearKey::Unknown,
        }
    }

    /// The year, if known
    pub fn year(&self) -> Option<Year> {
        match self {
            YearKey::Known(year) => Some(*year),
            YearKey::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, YearKey::Known(_))
    }

    /// Timeline order: most recent year first, unknown last
    pub fn newest_first(&self, other: &Self) -> Ordering {
        match (self, other) {
            (YearKey::Known(this), YearKey::Known(other)) => other.cmp(this),
            (YearKey::Known(_), YearKey::Unknown) => Ordering::Less,
            (YearKey::Unknown, YearKey::Known(_)) => Ordering::Greater,
            (YearKey::Unknown, YearKey::Unknown) => Ordering::Equal,
        }
    }
}

impl From<Year> for YearKey {
    fn from(year: Year) -> Self {
        YearKey::Known(year)
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearKey::Known(year) => write!(f, "{year}"),
            YearKey::Unknown => f.write_str(UNKNOWN_YEAR_LABEL),
        }
    }
}

impl FromStr for YearKey {
    type Err = DateError;
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let string = string.trim();
        if string.eq_ignore_ascii_case(UNKNOWN_YEAR_LABEL) {
            return Ok(YearKey::Unknown);
        }
        match parse_trailing_year(string) {
            Some(year) if year.to_string() == string => Ok(YearKey::Known(year)),
            _ => Err(DateError::InvalidYearKey(string.to_string())),
        }
    }
}

impl Serialize for YearKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        string.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn year(value: i64) -> Year {
        Year::try_from(value).unwrap()
    }

    #[test]
    fn year_bounds() {
        assert!(Year::try_from(999).is_err());
        assert!(Year::try_from(10_000).is_err());
        assert_eq!(year(2024).value(), 2024);
    }

    #[test]
    fn trailing_year() {
        assert_eq!(parse_trailing_year("28 Dec 2023 - 31 Dec 2023"), Some(year(2023)));
        assert_eq!(parse_trailing_year("May 2025 – June 2025"), Some(year(2025)));
        assert_eq!(parse_trailing_year("Sept 2024 - Oct 2024  "), Some(year(2024)));
        assert_eq!(parse_trailing_year("2024"), Some(year(2024)));
    }

    #[test]
    fn trailing_year_malformed() {
        assert_eq!(parse_trailing_year(""), None);
        assert_eq!(parse_trailing_year("   "), None);
        assert_eq!(parse_trailing_year("Ongoing"), None);
        assert_eq!(parse_trailing_year("Dec 2024."), None);
        assert_eq!(parse_trailing_year("Dec 2024 🎄"), None);
        assert_eq!(parse_trailing_year("Dec 24"), None);
        assert_eq!(parse_trailing_year("Dec 20245"), None);
        assert_eq!(parse_trailing_year("Dec -202"), None);
        assert_eq!(parse_trailing_year("Dec 0999"), None);
    }

    #[test]
    fn key_from_date_text() {
        assert_eq!(YearKey::from_date_text("1 Jan 2024"), YearKey::Known(year(2024)));
        assert_eq!(YearKey::from_date_text("Ongoing"), YearKey::Unknown);
    }

    #[test]
    fn newest_first() {
        let mut keys = vec![
            YearKey::Unknown,
            YearKey::Known(year(2023)),
            YearKey::Known(year(2025)),
            YearKey::Known(year(2024)),
        ];
        keys.sort_by(YearKey::newest_first);
        assert_eq!(
            keys,
            vec![
                YearKey::Known(year(2025)),
                YearKey::Known(year(2024)),
                YearKey::Known(year(2023)),
                YearKey::Unknown,
            ]
        );
    }

    #[test]
    fn key_from_str() {
        assert_eq!("2024".parse::<YearKey>(), Ok(YearKey::Known(year(2024))));
        assert_eq!(" unknown ".parse::<YearKey>(), Ok(YearKey::Unknown));
        assert!("Dec 2024".parse::<YearKey>().is_err());
        assert!("24".parse::<YearKey>().is_err());
    }

    #[test]
    fn key_serde() {
        let json = serde_json::to_string(&vec![YearKey::Known(year(2024)), YearKey::Unknown]).unwrap();
        assert_eq!(json, r#"["2024","Unknown"]"#);
        let keys: Vec<YearKey> = serde_json::from_str(&json).unwrap();
        assert_eq!(keys, vec![YearKey::Known(year(2024)), YearKey::Unknown]);
    }
}
