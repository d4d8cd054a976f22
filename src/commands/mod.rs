//! Command handlers.
//!
//! Thin functions translating tokenized user input into Record/AddressBook
//! operations. Handlers return the reply text; turning errors into
//! user-facing messages is the REPL's job.

pub mod birthdays;
pub mod contacts;

pub use birthdays::{add_birthday, birthdays, show_birthday};
pub use contacts::{
    add_contact, change_contact, delete_contact, hello, remove_phone, show_all, show_phone,
};

/// Split raw user input into whitespace-separated tokens.
pub fn parse_input(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}
