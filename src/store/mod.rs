//! Persistence of phone books in the line-based store format.
//!
//! This module provides [StoreBuilder] to configure a [Store], which saves a
//! [PhoneBook] to and loads it from a [StoreBackend].
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`load_file`] - reads a store file into a new [PhoneBook]
//! * [`save_file`] - overwrites a store file with a [PhoneBook]
//!
//! # Format
//! * One record per line, terminated by `\n`
//! * Fields separated by `,` with no escaping or quoting
//! * Field order `first,last,phone` ([WIRE_FIELD_ORDER]), configurable via
//!   [StoreBuilder::with_field_order]
//! * No header or trailer
//!
//! Lines are written in pre-order, so loading a saved store rebuilds the
//! same tree shape. On load, duplicate keys and blank lines are skipped and
//! counted in the returned [LoadReport].

pub mod backend;
pub mod defs;

pub use self::backend::{FileBackend, InMemoryBackend, StoreBackend};
pub use self::defs::{DEFAULT_STORE_FILE, FIELD_SEPARATOR, FieldOrder, WIRE_FIELD_ORDER};

use crate::error::PhonebookError;
use crate::model::{LoadReport, PhoneBook};
use log::{debug, info, warn};
use std::path::Path;

// =#========================================================================#=
// STORE BUILDER
// =#========================================================================#=
/// Builder for configuring and creating a [Store].
///
/// Generic over:
/// * `B: StoreBackend` - where the lines go ([FileBackend] or [InMemoryBackend])
///
/// # Configuration Options
/// * **Backend**:
///   - [`for_file()`](StoreBuilder::for_file) - a text file
///   - [`in_memory()`](StoreBuilder::in_memory) - an in-memory line buffer
///   - [`with_backend()`](Self::with_backend) - any other [StoreBackend]
/// * **Field order**: [`with_field_order()`](Self::with_field_order)
///   (default [WIRE_FIELD_ORDER])
/// * **Directories**: [`with_create_dirs()`](StoreBuilder::with_create_dirs)
///   creates missing parent directories on save (file backend only)
///
/// # Example
/// ```no_run
/// use phonebook::model::{PhoneBook, Record};
/// use phonebook::store::StoreBuilder;
///
/// let mut book = PhoneBook::new();
/// book.insert(Record::new("Smith", "Anna", "111"))?;
///
/// let mut store = StoreBuilder::for_file("data/phonebook.txt")
///     .with_create_dirs()
///     .build();
/// store.save(&book)?;
///
/// let mut restored = PhoneBook::new();
/// let report = store.load(&mut restored)?;
/// assert_eq!(report.loaded, 1);
/// # Ok::<(), phonebook::PhonebookError>(())
/// ```
pub struct StoreBuilder<B: StoreBackend> {
    backend: B,
    field_order: FieldOrder,
}

impl StoreBuilder<FileBackend> {
    /// Creates a new builder for a store file.
    ///
    /// The file is only touched by [Store::save] and [Store::load].
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    pub fn for_file<P: AsRef<Path>>(path: P) -> Self {
        StoreBuilder {
            backend: FileBackend::new(path),
            field_order: WIRE_FIELD_ORDER,
        }
    }

    /// Configure the store to create missing parent directories on save.
    pub fn with_create_dirs(mut self) -> Self {
        self.backend.set_create_dirs(true);
        self
    }
}

impl StoreBuilder<InMemoryBackend> {
    /// Creates a new builder for an in-memory store that does not exist yet.
    pub fn in_memory() -> Self {
        StoreBuilder {
            backend: InMemoryBackend::new(),
            field_order: WIRE_FIELD_ORDER,
        }
    }
}

impl<B: StoreBackend> StoreBuilder<B> {
    /// Configure the order of the name fields within a line.
    ///
    /// Only change this for stores that were written in that order;
    /// existing stores use [WIRE_FIELD_ORDER].
    pub fn with_field_order(mut self, field_order: FieldOrder) -> Self {
        self.field_order = field_order;
        self
    }

    /// Configure the store to use another [StoreBackend].
    pub fn with_backend<B2: StoreBackend>(self, backend: B2) -> StoreBuilder<B2> {
        StoreBuilder {
            backend,
            field_order: self.field_order,
        }
    }

    /// Builds the [Store] with the configured settings.
    pub fn build(self) -> Store<B> {
        Store {
            backend: self.backend,
            field_order: self.field_order,
        }
    }
}

// =#========================================================================#=
// STORE
// =#========================================================================#=
/// A configured backing store for phone books.
///
/// Created via [StoreBuilder]. Saving overwrites the whole store, loading
/// replaces the whole book.
pub struct Store<B: StoreBackend> {
    backend: B,
    field_order: FieldOrder,
}

impl<B: StoreBackend> Store<B> {
    /// Writes all entries of `book` to the store, replacing its content.
    ///
    /// An empty book is not saved: the store is left untouched and `0` is
    /// returned.
    ///
    /// # Returns
    /// The number of records written
    ///
    /// # Errors
    /// Returns an `IoError` if writing fails; the store may then be truncated.
    pub fn save(&mut self, book: &PhoneBook) -> Result<usize, PhonebookError> {
        if book.is_empty() {
            warn!("Nothing to save to {}: phone book is empty", self.backend.describe());
            return Ok(0);
        }

        let lines = book.serialize_with(self.field_order);
        self.backend.write_lines(&lines)?;
        info!("Saved {} entries to {}", lines.len(), self.backend.describe());
        Ok(lines.len())
    }

    /// Replaces the content of `book` with the records of the store.
    ///
    /// # Returns
    /// A [LoadReport] counting loaded records and skipped lines
    ///
    /// # Errors
    /// * `StoreMissing` - If the store does not exist; `book` is unchanged
    /// * `IoError` - If reading fails; `book` is unchanged
    pub fn load(&self, book: &mut PhoneBook) -> Result<LoadReport, PhonebookError> {
        let lines = self.backend.read_lines()?;
        let report = book.deserialize_with(lines, self.field_order);

        if report.skipped() > 0 {
            debug!(
                "Skipped {} duplicate and {} blank lines",
                report.skipped_duplicates, report.skipped_blank
            );
        }
        info!("Loaded {} entries from {}", report.loaded, self.backend.describe());
        Ok(report)
    }

    /// Returns whether the backing store exists.
    pub fn exists(&self) -> bool {
        self.backend.exists()
    }

    /// Returns the configured field order.
    pub fn field_order(&self) -> FieldOrder {
        self.field_order
    }

    /// Returns a reference to the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the store, returning its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

// ============================================================================
// QUICK API (pub)
// ============================================================================
/// Reads a store file into a new [PhoneBook] using default settings.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Errors
/// * `StoreMissing` - If the file does not exist
/// * `IoError` - If reading fails
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<PhoneBook, PhonebookError> {
    let mut book = PhoneBook::new();
    StoreBuilder::for_file(path).build().load(&mut book)?;
    Ok(book)
}

/// Overwrites a store file with the entries of `book` using default settings.
///
/// See [Store::save]; an empty book leaves the file untouched.
///
/// # Returns
/// The number of records written
pub fn save_file<P: AsRef<Path>>(book: &PhoneBook, path: P) -> Result<usize, PhonebookError> {
    StoreBuilder::for_file(path).build().save(book)
}
