//! Error types for the phone book engine and its persistence.
//!
//! This module provides [PhonebookError] and [PhonebookErrorType] for
//! representing and reporting rejected operations. Every error is
//! recoverable: the book is left unchanged whenever one is returned.

use crate::model::Key;
use std::error::Error;
use std::fmt;
use std::path::Path;

// =#========================================================================#=
// PHONEBOOK ERROR TYPE
// =#========================================================================#=
/// Kinds of rejection the engine and the store can report.
#[derive(PartialEq, Debug, Clone)]
pub enum PhonebookErrorType {
    /// Insert of a key that is already present
    DuplicateKey,
    /// Update or delete of a key that is not present
    NotFound,
    /// Update with a blank phone number
    EmptyPhone,
    /// Load from a backing store that does not exist
    StoreMissing,
    /// Underlying I/O failure while reading or writing a store
    IoError(String),
}

// =#========================================================================#=
// PHONEBOOK ERROR
// =#========================================================================#=
/// Error with contextual information (the key or store path involved).
#[derive(Debug)]
pub struct PhonebookError {
    kind: PhonebookErrorType,
    context: String,
}

impl PhonebookError {
    /// Create a PhonebookError from an error type and a context string
    pub fn new(kind: PhonebookErrorType, context: String) -> Self {
        Self { kind, context }
    }

    /// Convenience constructor for DuplicateKey
    pub fn duplicate_key(key: &Key) -> Self {
        Self::new(PhonebookErrorType::DuplicateKey, key.to_string())
    }

    /// Convenience constructor for NotFound
    pub fn not_found(key: &Key) -> Self {
        Self::new(PhonebookErrorType::NotFound, key.to_string())
    }

    /// Convenience constructor for EmptyPhone
    pub fn empty_phone(key: &Key) -> Self {
        Self::new(PhonebookErrorType::EmptyPhone, key.to_string())
    }

    /// Convenience constructor for StoreMissing
    pub fn store_missing<P: AsRef<Path>>(path: P) -> Self {
        Self::new(
            PhonebookErrorType::StoreMissing,
            path.as_ref().display().to_string(),
        )
    }

    /// Get the error kind
    pub fn kind(&self) -> &PhonebookErrorType {
        &self.kind
    }

    /// Get the key or path the error refers to (may be empty)
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl fmt::Display for PhonebookError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            PhonebookErrorType::DuplicateKey => write!(f, "Name already exists in phonebook")?,
            PhonebookErrorType::NotFound => write!(f, "Could not locate entry")?,
            PhonebookErrorType::EmptyPhone => write!(f, "Phone number cannot be blank")?,
            PhonebookErrorType::StoreMissing => write!(f, "No saved phonebook found")?,
            PhonebookErrorType::IoError(msg) => write!(f, "IO error - {msg}")?,
        }

        if !self.context.is_empty() {
            write!(f, " ({})", self.context)?;
        }

        Ok(())
    }
}

impl Error for PhonebookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for PhonebookError {
    fn from(err: std::io::Error) -> Self {
        PhonebookError {
            kind: PhonebookErrorType::IoError(err.to_string()),
            context: String::new(),
        }
    }
}
