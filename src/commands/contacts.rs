//! Contact commands: add, change, lookup, removal, listing.

use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use tracing::debug;

/// `add NAME PHONE` - find-or-create the record, then append the phone.
///
/// Repeated adds for the same name accumulate phones on the same record
/// rather than overwriting it.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::MissingArguments {
            usage: "add NAME PHONE",
        });
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact added.".to_string());
    }

    // New contact: validate the phone before the record enters the book, so
    // a rejected phone leaves no empty record behind
    let mut record = Record::new(ContactName::new(*name)?);
    record.add_phone(phone)?;
    book.add_record(record);
    debug!(name = %name, "created new record");

    Ok("Contact added.".to_string())
}

/// `change NAME OLD_PHONE NEW_PHONE` - replace a phone in place.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = args else {
        return Err(CommandError::MissingArguments {
            usage: "change NAME OLD_PHONE NEW_PHONE",
        });
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old_phone, new_phone)?;

    Ok("Contact changed.".to_string())
}

/// `phone NAME` - show the contact's phone list.
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::MissingArguments { usage: "phone NAME" });
    };

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

    Ok(format!("Phones for {}: {}", name, record.phone_list()))
}

/// `remove-phone NAME PHONE` - remove the first matching phone.
pub fn remove_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::MissingArguments {
            usage: "remove-phone NAME PHONE",
        });
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    record.remove_phone(phone)?;

    Ok("Phone removed.".to_string())
}

/// `delete NAME` - remove the whole record from the book.
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::MissingArguments {
            usage: "delete NAME",
        });
    };

    book.delete(name)?;
    debug!(name = %name, "deleted record");

    Ok("Contact deleted.".to_string())
}

/// `all` - render the whole book.
pub fn show_all(book: &AddressBook) -> String {
    book.to_string()
}

/// `hello` - greeting.
pub fn hello() -> String {
    "Hello, how can I help you?".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_contact_creates_record() {
        let mut book = AddressBook::new();
        let reply = add_contact(&["Alice", "0501234567"], &mut book).unwrap();
        assert_eq!(reply, "Contact added.");
        assert_eq!(book.find("Alice").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_add_contact_accumulates_phones() {
        let mut book = AddressBook::new();
        add_contact(&["Alice", "0501234567"], &mut book).unwrap();
        add_contact(&["Alice", "0509876543"], &mut book).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_invalid_phone_leaves_book_empty() {
        let mut book = AddressBook::new();
        let err = add_contact(&["Alice", "123"], &mut book).unwrap_err();
        assert!(matches!(err, CommandError::Validation(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_contact_missing_arguments() {
        let mut book = AddressBook::new();
        let err = add_contact(&["Alice"], &mut book).unwrap_err();
        assert!(matches!(err, CommandError::MissingArguments { .. }));
    }

    #[test]
    fn test_change_contact_unknown_name() {
        let mut book = AddressBook::new();
        let err = change_contact(&["Alice", "0501234567", "0509876543"], &mut book).unwrap_err();
        assert!(matches!(err, CommandError::ContactNotFound(_)));
    }

    #[test]
    fn test_show_phone() {
        let mut book = AddressBook::new();
        add_contact(&["Alice", "0501234567"], &mut book).unwrap();
        add_contact(&["Alice", "0509876543"], &mut book).unwrap();
        let reply = show_phone(&["Alice"], &book).unwrap();
        assert_eq!(reply, "Phones for Alice: 0501234567; 0509876543");
    }

    #[test]
    fn test_remove_phone_then_delete() {
        let mut book = AddressBook::new();
        add_contact(&["Alice", "0501234567"], &mut book).unwrap();
        remove_phone(&["Alice", "0501234567"], &mut book).unwrap();
        assert!(book.find("Alice").unwrap().phones().is_empty());

        delete_contact(&["Alice"], &mut book).unwrap();
        assert!(book.is_empty());
    }
}
