//! Composite lookup key of a phone book entry.
//!
//! - `Key`: normalized (last, first) pair; the only place where case
//!   normalization and ordering of entries are defined.

use std::cmp::Ordering;
use std::fmt;

// =#========================================================================#=
// KEY
// =#========================================================================#=
/// Normalized `(last, first)` name pair identifying an entry.
///
/// Both names are converted to uppercase once, when the key is built.
/// Every operation of [PhoneBook](crate::model::PhoneBook) that accepts names
/// from the outside goes through [Key::new], so lookups are case-insensitive
/// while comparisons themselves stay plain string comparisons.
///
/// # Ordering
/// Keys are ordered lexicographically as a pair: by last name first, then by
/// first name. This [Ord] implementation is used by insertion, search and
/// deletion alike.
///
/// # Example
/// ```
/// use phonebook::model::Key;
///
/// let smith = Key::new("Smith", "Anna");
/// assert_eq!(smith.last(), "SMITH");
/// assert_eq!(smith, Key::new("smith", "ANNA"));
/// assert!(Key::new("Adams", "Cy") < smith);
/// assert!(Key::new("Smith", "Al") < smith);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    last: String,
    first: String,
}

impl Key {
    /// Builds a key from raw user input, normalizing both names to uppercase.
    ///
    /// # Arguments
    /// * `last` - Last name as entered
    /// * `first` - First name as entered
    pub fn new(last: &str, first: &str) -> Self {
        Key {
            last: last.to_uppercase(),
            first: first.to_uppercase(),
        }
    }

    /// Returns the normalized last name.
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Returns the normalized first name.
    pub fn first(&self) -> &str {
        &self.first
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.last
            .cmp(&other.last)
            .then_with(|| self.first.cmp(&other.first))
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.last, self.first)
    }
}
