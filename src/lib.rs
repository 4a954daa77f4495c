//! Phonebook is a library for keyed record storage on a binary search tree.
//!
//! Entries (last name, first name, phone number) are kept in an unbalanced
//! binary search tree ordered by the uppercase (last, first) name pair and
//! persisted in a plain line-based text format.
//! Core functionality provided:
//! - Tree engine ([PhoneBook]): insert, find, locate, update phone number,
//!   delete, ordered and structural traversal, clear.
//! - Node identity: deleting an entry re-links nodes instead of moving
//!   records, so every other entry stays at the same address.
//! - Persistence: one `first,last,phone` line per entry; see [crate::store].
//!   - Quick API: [load_file] and [save_file]
//!   - Configurable [Store](crate::store::Store) via
//!     [StoreBuilder](crate::store::StoreBuilder), with file or in-memory
//!     backends
//!
//! Limitations:
//! - No balancing: sorted insertion degrades the tree to a list
//! - Fields containing a comma do not survive a save/load round trip
//! - Saving overwrites the whole store; there is no crash recovery
//!
//! # Usage patterns
//! ## Working with a book
//! ```
//! use phonebook::{PhoneBook, PhonebookErrorType, Record};
//!
//! let mut book = PhoneBook::new();
//! book.insert(Record::new("Smith", "Anna", "111"))?;
//! book.insert(Record::new("Jones", "Bob", "222"))?;
//!
//! // Names are case-insensitive
//! let err = book.insert(Record::new("SMITH", "anna", "999")).unwrap_err();
//! assert_eq!(*err.kind(), PhonebookErrorType::DuplicateKey);
//!
//! book.update_phone("smith", "anna", "123")?;
//! assert_eq!(book.find("Smith", "Anna").unwrap().phone(), "123");
//! # Ok::<(), phonebook::PhonebookError>(())
//! ```
//!
//! ## Saving and loading
//! ```no_run
//! use phonebook::{load_file, save_file, PhoneBook, Record};
//!
//! let mut book = PhoneBook::new();
//! book.insert(Record::new("Adams", "Cy", "333"))?;
//! save_file(&book, "phonebook.txt")?;
//!
//! let restored = load_file("phonebook.txt")?;
//! assert_eq!(restored.len(), 1);
//! # Ok::<(), phonebook::PhonebookError>(())
//! ```

pub mod error;
pub mod model;
pub mod store;

pub use crate::error::{PhonebookError, PhonebookErrorType};
pub use crate::model::{Key, LoadReport, Location, PhoneBook, Record};

use std::path::Path;

// ============================================================================
// Quick Store API
// ============================================================================
/// Reads a store file into a new [PhoneBook] using default settings.
///
/// See [`store::load_file`] for full documentation.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<PhoneBook, PhonebookError> {
    store::load_file(path)
}

/// Overwrites a store file with the entries of `book` using default settings.
///
/// See [`store::save_file`] for full documentation.
pub fn save_file<P: AsRef<Path>>(book: &PhoneBook, path: P) -> Result<usize, PhonebookError> {
    store::save_file(book, path)
}
