//! Birthday commands: set, show, and the weekly lookahead.

use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use chrono::NaiveDate;

/// `add-birthday NAME DD.MM.YYYY` - set the contact's birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday] = args else {
        return Err(CommandError::MissingArguments {
            usage: "add-birthday NAME DD.MM.YYYY",
        });
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    record.add_birthday(birthday)?;

    Ok(format!("Birthday for {} added.", name))
}

/// `show-birthday NAME` - show the contact's birthday, if set.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::MissingArguments {
            usage: "show-birthday NAME",
        });
    };

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

    match record.birthday() {
        Some(birthday) => Ok(format!("Birthday for {}: {}", name, birthday)),
        None => Ok(format!("{} has no birthday set.", name)),
    }
}

/// `birthdays` - list congratulation dates falling within the next week.
///
/// The reference date is passed in (the REPL supplies today) so the output
/// is deterministic under test.
pub fn birthdays(book: &AddressBook, reference: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(reference);
    if upcoming.is_empty() {
        return "No upcoming birthdays in the next 7 days.".to_string();
    }

    upcoming
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.congratulation_date))
        .collect::<Vec<_>>()
        .join("\n")
}
