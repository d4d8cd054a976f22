//! Record model representing a single contact.

use crate::domain::{Birthday, ContactName, Phone, ValidationError};
use crate::error::{CommandError, CommandResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, an ordered list of phones, and an optional
/// birthday.
///
/// The name is fixed at creation and acts as the record's key in the
/// address book. Phones keep insertion order and duplicates are permitted.
/// At most one birthday is stored; adding another overwrites it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: ContactName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with a name only.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's phones, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// Duplicates are not collapsed. On validation failure nothing is
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not exactly
    /// 10 ASCII digits.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone whose value equals `phone`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::PhoneNotFound` if no phone matches; the list
    /// is left unchanged.
    pub fn remove_phone(&mut self, phone: &str) -> CommandResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| CommandError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`,
    /// preserving its position in the list.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::PhoneNotFound` if `old_phone` is absent, or
    /// `ValidationError::InvalidPhone` (as `CommandError::Validation`) if
    /// `new_phone` is invalid. In both cases the list is left untouched.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> CommandResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old_phone)
            .ok_or_else(|| CommandError::PhoneNotFound(old_phone.to_string()))?;
        let new_phone = Phone::new(new_phone)?;
        self.phones[index] = new_phone;
        Ok(())
    }

    /// Validate and set the birthday, overwriting any existing one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if `birthday` is not a valid
    /// `DD.MM.YYYY` calendar date; an existing birthday is kept.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(birthday)?;
        self.birthday = Some(birthday);
        Ok(())
    }

    /// The phone list joined with `"; "`.
    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

// Display support - deterministic human-readable rendering
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = self
            .birthday
            .as_ref()
            .map(Birthday::as_str)
            .unwrap_or("No birthday set");
        write!(
            f,
            "Name: {}, Phones: {}, Birthday: {}",
            self.name,
            self.phone_list(),
            birthday
        )
    }
}
