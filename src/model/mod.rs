//! Data model of the phone book.
//!
//! # Representation
//! Entries are [Record]s identified by a normalized [Key] (last name, first
//! name). A [PhoneBook] stores them in an unbalanced binary search tree
//! whose nodes own their children (`Option<Box<_>>` slots), so nodes never
//! move in memory while they stay in the book.
//!
//! | Type | Role |
//! |------|------|
//! | [Key] | Uppercase (last, first) pair; defines the ordering |
//! | [Record] | Key plus phone number; encodes to / decodes from a store line |
//! | [PhoneBook] | The tree: insert, find, update, delete, traverse, (de)serialize |
//! | [Location] | Where a key sits relative to its parent |

pub mod book;
pub mod key;
pub mod node;
pub mod record;

pub use book::{InOrderIter, LoadReport, Location, PhoneBook, PreOrderIter};
pub use key::Key;
pub use node::Side;
pub use record::Record;
