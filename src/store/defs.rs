//! Constants and definitions for the store line format.

/// Separator between the fields of a store line. Never escaped.
pub const FIELD_SEPARATOR: char = ',';

/// Default file name of a phone book store
pub const DEFAULT_STORE_FILE: &str = "phonebook.txt";

/// Field order of existing phone book stores: `first,last,phone`.
///
/// This differs from the key order (last name before first name) and must
/// stay as is to read stores written by earlier versions.
pub const WIRE_FIELD_ORDER: FieldOrder = FieldOrder::FirstLastPhone;

/// Order of the name fields within a store line; the phone number always
/// comes last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldOrder {
    /// `first,last,phone` (the established store format)
    #[default]
    FirstLastPhone,
    /// `last,first,phone` (key order)
    LastFirstPhone,
}

impl FieldOrder {
    /// Arranges the two names in this order.
    ///
    /// The mapping is its own inverse: arranging the two name segments of a
    /// line read in this order yields `(last, first)` again.
    ///
    /// # Arguments
    /// * `last` - Last name
    /// * `first` - First name
    ///
    /// # Returns
    /// The names in the order they appear in a line
    pub fn arrange<'a>(self, last: &'a str, first: &'a str) -> (&'a str, &'a str) {
        match self {
            FieldOrder::FirstLastPhone => (first, last),
            FieldOrder::LastFirstPhone => (last, first),
        }
    }
}
