//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted textual date format.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A calendar date (no time component) parsed from `DD.MM.YYYY`.
///
/// The shape is checked before chrono sees the text, so `1.2.2000` is
/// rejected and rendering always gives back the original string.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("17.10.1989").unwrap();
/// assert_eq!(birthday.to_string(), "17.10.1989");
/// assert!(Birthday::new("31.04.2000").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for malformed text or a
    /// date that does not exist on the calendar.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// Render back to `DD.MM.YYYY`.
    pub fn render(&self) -> String {
        self.0.format(BIRTHDAY_FORMAT).to_string()
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// February 29 falls back to February 28 when `year` is not a leap year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).or_else(|| {
            if self.0.month() == 2 && self.0.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.render())
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_round_trip() {
        for raw in ["17.10.1989", "01.01.2000", "29.02.2024", "31.12.1999"] {
            assert_eq!(Birthday::new(raw).unwrap().render(), raw);
        }
    }

    #[test]
    fn test_birthday_rejects_malformed_text() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1.2.2000").is_err());
        assert!(Birthday::new("2000-01-02").is_err());
        assert!(Birthday::new("01/02/2000").is_err());
        assert!(Birthday::new("01.02.2000 ").is_err());
        assert!(Birthday::new("aa.bb.cccc").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31.04.2000").is_err());
        assert!(Birthday::new("29.02.2023").is_err());
        assert!(Birthday::new("00.01.2000").is_err());
        assert!(Birthday::new("10.13.2000").is_err());
    }

    #[test]
    fn test_birthday_in_year() {
        let birthday = Birthday::new("17.10.1989").unwrap();
        assert_eq!(
            birthday.in_year(2026),
            NaiveDate::from_ymd_opt(2026, 10, 17)
        );
    }

    #[test]
    fn test_leap_day_clamps_in_common_year() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(birthday.in_year(2025), NaiveDate::from_ymd_opt(2025, 2, 28));
        assert_eq!(birthday.in_year(2028), NaiveDate::from_ymd_opt(2028, 2, 29));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("05.06.1990").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"05.06.1990\"");
        let parsed: Birthday = serde_json::from_str("\"05.06.1990\"").unwrap();
        assert_eq!(parsed, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"1990-06-05\"");
        assert!(result.is_err());
    }
}
