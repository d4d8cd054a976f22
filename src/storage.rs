//! Persistence for the address book.
//!
//! The whole book is serialized to a single JSON file: a full-file load at
//! startup and a full-file overwrite on save. A crash between saves loses
//! unsaved changes. Domain values re-validate on deserialize, so a
//! hand-edited file with a malformed phone or date fails to load with a
//! typed error instead of admitting invalid state.

use crate::error::StorageResult;
use crate::models::AddressBook;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load the address book from `path`.
///
/// A missing file is not an error: it yields a fresh empty book.
///
/// # Errors
///
/// Returns `StorageError::Io` for any I/O failure other than the file not
/// existing, or `StorageError::Serde` if the contents do not parse.
pub fn load_book(path: &Path) -> StorageResult<AddressBook> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let book: AddressBook = serde_json::from_str(&contents)?;
            debug!(path = %path.display(), contacts = book.len(), "loaded address book");
            Ok(book)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no data file, starting with an empty book");
            Ok(AddressBook::new())
        }
        Err(err) => Err(err.into()),
    }
}

/// Save the address book to `path`, overwriting any previous contents.
pub fn save_book(path: &Path, book: &AddressBook) -> StorageResult<()> {
    let json = serde_json::to_string_pretty(book)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), contacts = book.len(), "saved address book");
    Ok(())
}
