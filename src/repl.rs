//! The read-eval-print loop.
//!
//! Reads one command per line, dispatches to the matching handler, and
//! prints the reply. Handler errors become messages and never end the
//! session; only `exit`, `close`, or end of input leave the loop.

use crate::commands;
use crate::error::CommandResult;
use crate::models::AddressBook;
use chrono::Local;
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = ">>> ";

/// Run the command loop over the given input and output streams until the
/// user exits or the input ends.
///
/// The caller owns persistence: the book is mutated in place and saved
/// after this returns.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    book: &mut AddressBook,
) -> std::io::Result<()> {
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like an exit
            writeln!(output, "Good bye!")?;
            break;
        }

        let tokens = commands::parse_input(&line);
        let Some((command, args)) = tokens.split_first() else {
            writeln!(output, "Invalid command.")?;
            continue;
        };

        let command = command.to_ascii_lowercase();
        debug!(command = %command, "dispatching");

        let result: CommandResult<String> = match command.as_str() {
            "add" => commands::add_contact(args, book),
            "change" => commands::change_contact(args, book),
            "phone" => commands::show_phone(args, book),
            "remove-phone" => commands::remove_phone(args, book),
            "delete" => commands::delete_contact(args, book),
            "add-birthday" => commands::add_birthday(args, book),
            "show-birthday" => commands::show_birthday(args, book),
            "birthdays" => Ok(commands::birthdays(book, Local::now().date_naive())),
            "all" => Ok(commands::show_all(book)),
            "hello" => Ok(commands::hello()),
            "exit" | "close" => {
                writeln!(output, "Good bye!")?;
                break;
            }
            _ => Ok("Unknown command. Please try again.".to_string()),
        };

        match result {
            Ok(reply) => writeln!(output, "{}", reply)?,
            Err(err) => writeln!(output, "{}", err)?,
        }
    }

    Ok(())
}
