//! Node module: owning binary tree node.
//!
//! Children are held in [Link] slots (`Option<Box<Node>>`). Re-linking moves
//! boxes between slots, so a node keeps its heap address until it is removed
//! itself.

use crate::model::key::Key;
use crate::model::record::Record;

/// An owned, possibly empty, child slot (or the root slot of a book).
pub(crate) type Link = Option<Box<Node>>;

/// Which child slot of a parent holds a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left child, holding smaller keys
    Left,
    /// Right child, holding greater keys
    Right,
}

/// A tree node owning one [Record] and up to two children. No parent link.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) record: Record,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub(crate) fn new(record: Record) -> Self {
        Node {
            record,
            left: None,
            right: None,
        }
    }

    pub(crate) fn key(&self) -> &Key {
        self.record.key()
    }

    /// Returns the child on the given side, if present.
    pub(crate) fn child(&self, side: Side) -> Option<&Node> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    pub(crate) fn into_record(self) -> Record {
        self.record
    }
}
