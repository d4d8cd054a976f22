//! Integration tests for the command handlers and the REPL loop.

use chrono::NaiveDate;
use contact_assistant::commands;
use contact_assistant::error::CommandError;
use contact_assistant::{repl, AddressBook};
use std::io::Cursor;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_add_change_phone_flow() {
    let mut book = AddressBook::new();

    let reply = commands::add_contact(&["Alice", "0501234567"], &mut book).unwrap();
    assert_eq!(reply, "Contact added.");

    let reply = commands::change_contact(&["Alice", "0501234567", "0971112233"], &mut book).unwrap();
    assert_eq!(reply, "Contact changed.");

    let reply = commands::show_phone(&["Alice"], &book).unwrap();
    assert_eq!(reply, "Phones for Alice: 0971112233");
}

#[test]
fn test_repeated_add_accumulates_on_one_record() {
    let mut book = AddressBook::new();
    commands::add_contact(&["Alice", "0501234567"], &mut book).unwrap();
    commands::add_contact(&["Alice", "0509876543"], &mut book).unwrap();

    assert_eq!(book.len(), 1);
    let reply = commands::show_phone(&["Alice"], &book).unwrap();
    assert_eq!(reply, "Phones for Alice: 0501234567; 0509876543");
}

#[test]
fn test_missing_arguments_reported_with_usage() {
    let mut book = AddressBook::new();

    let err = commands::add_contact(&[], &mut book).unwrap_err();
    assert_eq!(err.to_string(), "Not enough arguments. Usage: add NAME PHONE");

    let err = commands::change_contact(&["Alice"], &mut book).unwrap_err();
    assert!(matches!(err, CommandError::MissingArguments { .. }));

    let err = commands::add_birthday(&["Alice"], &mut book).unwrap_err();
    assert!(matches!(err, CommandError::MissingArguments { .. }));
}

#[test]
fn test_handlers_report_unknown_contact() {
    let mut book = AddressBook::new();

    let err = commands::show_phone(&["Ghost"], &book).unwrap_err();
    assert_eq!(err.to_string(), "No contact with name 'Ghost' found");

    let err = commands::show_birthday(&["Ghost"], &book).unwrap_err();
    assert!(matches!(err, CommandError::ContactNotFound(_)));

    let err = commands::delete_contact(&["Ghost"], &mut book).unwrap_err();
    assert!(matches!(err, CommandError::ContactNotFound(_)));
}

#[test]
fn test_birthday_commands_flow() {
    let mut book = AddressBook::new();
    commands::add_contact(&["Alice", "0501234567"], &mut book).unwrap();

    let reply = commands::show_birthday(&["Alice"], &book).unwrap();
    assert_eq!(reply, "Alice has no birthday set.");

    commands::add_birthday(&["Alice", "10.03.1990"], &mut book).unwrap();
    let reply = commands::show_birthday(&["Alice"], &book).unwrap();
    assert_eq!(reply, "Birthday for Alice: 10.03.1990");

    let reply = commands::birthdays(&book, date(2025, 3, 5));
    assert_eq!(reply, "Alice: 10.03.2025");
}

#[test]
fn test_birthdays_reply_when_none_upcoming() {
    let book = AddressBook::new();
    assert_eq!(
        commands::birthdays(&book, date(2025, 3, 5)),
        "No upcoming birthdays in the next 7 days."
    );
}

#[test]
fn test_show_all_renders_book() {
    let mut book = AddressBook::new();
    assert_eq!(commands::show_all(&book), "AddressBook is empty.");

    commands::add_contact(&["Alice", "0501234567"], &mut book).unwrap();
    commands::add_birthday(&["Alice", "10.03.1990"], &mut book).unwrap();
    assert_eq!(
        commands::show_all(&book),
        "Name: Alice, Phones: 0501234567, Birthday: 10.03.1990"
    );
}

#[test]
fn test_full_repl_session() {
    let script = "hello\n\
                  add Alice 0501234567\n\
                  add Alice 0509876543\n\
                  add-birthday Alice 10.03.1990\n\
                  show-birthday Alice\n\
                  all\n\
                  remove-phone Alice 0501234567\n\
                  phone Alice\n\
                  delete Alice\n\
                  all\n\
                  exit\n";

    let mut book = AddressBook::new();
    let mut output = Vec::new();
    repl::run(Cursor::new(script), &mut output, &mut book).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Welcome to the assistant bot!"));
    assert!(output.contains("Hello, how can I help you?"));
    assert!(output.contains("Birthday for Alice: 10.03.1990"));
    assert!(output.contains("Name: Alice, Phones: 0501234567; 0509876543, Birthday: 10.03.1990"));
    assert!(output.contains("Phone removed."));
    assert!(output.contains("Phones for Alice: 0509876543"));
    assert!(output.contains("Contact deleted."));
    assert!(output.contains("AddressBook is empty."));
    assert!(output.contains("Good bye!"));
    assert!(book.is_empty());
}

#[test]
fn test_repl_session_errors_are_messages_not_exits() {
    let script = "change Ghost 0501234567 0509876543\n\
                  add Alice 123\n\
                  phone\n\
                  hello\n\
                  close\n";

    let mut book = AddressBook::new();
    let mut output = Vec::new();
    repl::run(Cursor::new(script), &mut output, &mut book).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("No contact with name 'Ghost' found"));
    assert!(output.contains("Phone number must be exactly 10 digits: 123"));
    assert!(output.contains("Not enough arguments. Usage: phone NAME"));
    assert!(output.contains("Hello, how can I help you?"));
    assert!(output.contains("Good bye!"));
}
