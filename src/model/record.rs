//! Record module: one phone book entry and its single-line wire encoding.

use crate::model::key::Key;
use crate::store::defs::{FIELD_SEPARATOR, FieldOrder};
use std::fmt;

/// Column spacing used when rendering a record as a table row
const COLUMN_GAP: &str = "\t\t\t\t";

// =#========================================================================#=
// RECORD
// =#========================================================================#=
/// A phone book entry: a normalized [Key] and a mutable phone number.
///
/// # Invariants
/// - The key never changes after the record has been inserted into a book
/// - The phone number can only be replaced through
///   [PhoneBook::update_phone](crate::model::PhoneBook::update_phone),
///   which rejects blank numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    key: Key,
    phone: String,
}

impl Record {
    /// Creates a new record, normalizing the names into a [Key].
    ///
    /// # Arguments
    /// * `last` - Last name as entered
    /// * `first` - First name as entered
    /// * `phone` - Phone number, stored verbatim
    pub fn new(last: &str, first: &str, phone: &str) -> Self {
        Record {
            key: Key::new(last, first),
            phone: phone.to_string(),
        }
    }

    /// Returns the key of this record.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Returns the normalized last name.
    pub fn last(&self) -> &str {
        self.key.last()
    }

    /// Returns the normalized first name.
    pub fn first(&self) -> &str {
        self.key.first()
    }

    /// Returns the phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub(crate) fn set_phone(&mut self, phone: &str) {
        self.phone.clear();
        self.phone.push_str(phone);
    }

    /// Encodes this record as a single store line (without line terminator).
    ///
    /// Fields are joined by [FIELD_SEPARATOR] in the given [FieldOrder].
    /// No escaping is performed: a name or number containing the separator
    /// will not decode back to the same record.
    ///
    /// # Example
    /// ```
    /// use phonebook::model::Record;
    /// use phonebook::store::FieldOrder;
    ///
    /// let record = Record::new("Smith", "Anna", "111");
    /// assert_eq!(record.encode(FieldOrder::FirstLastPhone), "ANNA,SMITH,111");
    /// ```
    pub fn encode(&self, order: FieldOrder) -> String {
        let (a, b) = order.arrange(self.last(), self.first());
        let mut line = String::with_capacity(a.len() + b.len() + self.phone.len() + 2);
        line.push_str(a);
        line.push(FIELD_SEPARATOR);
        line.push_str(b);
        line.push(FIELD_SEPARATOR);
        line.push_str(&self.phone);
        line
    }

    /// Decodes a store line into a record.
    ///
    /// The line is split positionally at [FIELD_SEPARATOR]: the first two
    /// segments are the names (in the given [FieldOrder]) and the third is
    /// the phone number. Missing segments decode as empty strings and
    /// anything after a third separator is dropped.
    ///
    /// # Example
    /// ```
    /// use phonebook::model::Record;
    /// use phonebook::store::FieldOrder;
    ///
    /// let record = Record::decode("anna,smith,111", FieldOrder::FirstLastPhone);
    /// assert_eq!(record.last(), "SMITH");
    /// assert_eq!(record.first(), "ANNA");
    /// assert_eq!(record.phone(), "111");
    /// ```
    pub fn decode(line: &str, order: FieldOrder) -> Self {
        let mut fields = line.split(FIELD_SEPARATOR);
        let a = fields.next().unwrap_or("");
        let b = fields.next().unwrap_or("");
        let phone = fields.next().unwrap_or("");

        // `arrange` is symmetric, so applying it to wire order yields (last, first)
        let (last, first) = order.arrange(a, b);
        Record::new(last, first, phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{COLUMN_GAP}{}{COLUMN_GAP}{}",
            self.first(),
            self.last(),
            self.phone
        )
    }
}
