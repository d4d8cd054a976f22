//! AddressBook model: the keyed collection of all contact records.

use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Inclusive lookahead window, in days, for upcoming birthdays.
const LOOKAHEAD_DAYS: i64 = 7;

/// The collection of all contact records, keyed by contact name.
///
/// The book exclusively owns its records. Records are keyed by their
/// (unique) name; `add_record` overwrites an existing entry with the same
/// name. Iteration is name-sorted, which keeps display and lookahead
/// output stable both within a run and across save/load cycles.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

/// One upcoming-birthday entry: who to congratulate and on which date.
///
/// The congratulation date is the birthday's next occurrence shifted off
/// weekends, formatted `DD.MM.YYYY`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// The contact's name
    pub name: String,

    /// The weekend-shifted congratulation date, formatted `DD.MM.YYYY`
    pub congratulation_date: String,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Insert a record, overwriting any existing record with the same name.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().as_str().to_string(), record);
    }

    /// Remove the record with the given name.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::ContactNotFound` if the name is absent.
    pub fn delete(&mut self, name: &str) -> CommandResult<()> {
        self.records
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    /// Iterate over records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find birthdays falling within the next week and compute their
    /// congratulation dates.
    ///
    /// For each record with a birthday, the birthday's occurrence in the
    /// reference year is taken (wrapping to the next year if it has already
    /// passed). Occurrences inside the inclusive window
    /// `[reference, reference + 7 days]` are kept, and a congratulation
    /// falling on Saturday or Sunday is moved forward to Monday. Results
    /// follow the book's iteration order.
    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<UpcomingBirthday> {
        let window_end = reference + Duration::days(LOOKAHEAD_DAYS);
        let mut upcoming = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut occurrence = birthday.in_year(reference.year());
            if occurrence < reference {
                occurrence = birthday.in_year(reference.year() + 1);
            }

            if occurrence > window_end {
                continue;
            }

            let congratulation = shift_off_weekend(occurrence);
            upcoming.push(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                congratulation_date: congratulation.format("%d.%m.%Y").to_string(),
            });
        }

        upcoming
    }
}

/// Move a weekend date forward to the following Monday.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

// Display support - newline-joined record renderings
impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "AddressBook is empty.");
        }

        let rendered = self
            .records
            .values()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", rendered)
    }
}
