//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for birthdays.
///
/// Birthdays are validated at construction time against the strict ISO
/// `YYYY-MM-DD` format and must name a real calendar date (Feb 29 is only
/// accepted in leap years).
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("1990-06-15").unwrap();
/// assert_eq!(birthday.as_str(), "1990-06-15");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Strict `YYYY-MM-DD` with zero-padded month and day
    /// - Must be a valid calendar date
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the date is invalid.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        match Self::parse(&raw) {
            Some(date) => Ok(Self { date }),
            None => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Parse a strict ISO date, rejecting unpadded or otherwise
    /// non-canonical spellings that chrono would accept.
    fn parse(raw: &str) -> Option<NaiveDate> {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
        if date.format("%Y-%m-%d").to_string() == raw {
            Some(date)
        } else {
            None
        }
    }

    /// Get the birthday in canonical `YYYY-MM-DD` form.
    pub fn as_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Days from `today` to the next occurrence of this birthday's
    /// month and day.
    ///
    /// Returns 0 when `today` is the birthday itself, never a negative
    /// count. A Feb 29 anniversary is observed on Mar 1 in common years.
    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        let occurrence = |year: i32| {
            NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
                .unwrap_or_else(|| {
                    // Only reachable for Feb 29 in a common year.
                    NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
                })
        };

        let mut next = occurrence(today.year());
        if next < today {
            next = occurrence(today.year() + 1);
        }
        (next - today).num_days()
    }
}

// Serde support - serialize as the canonical ISO string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
