//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static BIRTHDAY_FORMAT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile birthday format regex")
});

/// A type-safe wrapper for birthdays.
///
/// A birthday is a calendar date written as `DD.MM.YYYY` with a two-digit
/// day, two-digit month and four-digit year. The string must also be a real
/// Gregorian date (leap years included). The original validated string is
/// kept as the canonical value for display.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("10.03.1990").unwrap();
/// assert_eq!(birthday.as_str(), "10.03.1990");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday(String);

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must match `DD.MM.YYYY` exactly (zero-padded day and month)
    /// - Must be a valid Gregorian calendar date for that year
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the date is malformed or
    /// not a real calendar date.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let birthday = birthday.into();

        if Self::parse(&birthday).is_none() {
            return Err(ValidationError::InvalidDate(birthday));
        }

        Ok(Self(birthday))
    }

    /// Parse a `DD.MM.YYYY` string into a calendar date.
    ///
    /// The regex gate rejects unpadded forms like `1.1.2025` that chrono's
    /// numeric parsing would otherwise accept.
    fn parse(birthday: &str) -> Option<NaiveDate> {
        if !BIRTHDAY_FORMAT_REGEX.is_match(birthday) {
            return None;
        }

        NaiveDate::parse_from_str(birthday, "%d.%m.%Y").ok()
    }

    /// Get the birthday as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the birthday as a calendar date.
    pub fn date(&self) -> NaiveDate {
        // SAFETY: Constructor validates that the string parses
        Self::parse(&self.0).expect("birthday validated at construction")
    }

    /// The anniversary of this birthday in the given year.
    ///
    /// A Feb 29 birthday clamps to Feb 28 when `year` is not a leap year.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        let date = self.date();
        NaiveDate::from_ymd_opt(year, date.month(), date.day()).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 is valid in every year")
        })
    }
}

// Serde support - serialize as string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
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

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
