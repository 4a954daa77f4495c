//! Phone book module: the binary search tree engine.
//!
//! This module provides the core data structures of the crate:
//! - `PhoneBook`: an unbalanced binary search tree of [Record]s keyed by [Key].
//! - `Location`: result of locating a key relative to its parent.
//! - `LoadReport`: summary of rebuilding a book from store lines.
//! - `InOrderIter` and `PreOrderIter`: stack-based traversals.

use crate::error::{PhonebookError, PhonebookErrorType};
use crate::model::key::Key;
use crate::model::node::{Link, Node, Side};
use crate::model::record::Record;
use crate::store::defs::{FieldOrder, WIRE_FIELD_ORDER};
use log::{debug, trace};
use std::cmp::Ordering;

// =#========================================================================#=
// PHONE BOOK
// =#========================================================================#=
/// An in-memory phone book backed by an unbalanced binary search tree.
///
/// Every node owns its [Record] and its two optional children; there are no
/// parent links. Keys are unique, so inserting an existing key is rejected
/// rather than overwriting.
///
/// # Node identity
/// Removing an entry re-links the owned child slots around it; records are
/// never copied or swapped between nodes. Hence any entry that is not
/// itself removed keeps its address for as long as it stays in the book.
///
/// # Invariants
/// - In-order traversal yields strictly ascending keys
/// - `len()` equals the number of reachable nodes, and is `0` iff the root is absent
///
/// Both can be checked with [PhoneBook::is_valid].
///
/// # Example
/// ```
/// use phonebook::model::{PhoneBook, Record};
///
/// let mut book = PhoneBook::new();
/// book.insert(Record::new("Smith", "Anna", "111")).unwrap();
/// book.insert(Record::new("Jones", "Bob", "222")).unwrap();
/// book.insert(Record::new("Adams", "Cy", "333")).unwrap();
///
/// let names: Vec<_> = book.ordered_sequence().map(|r| r.last()).collect();
/// assert_eq!(names, ["ADAMS", "JONES", "SMITH"]);
///
/// book.delete("jones", "bob").unwrap();
/// assert_eq!(book.len(), 2);
/// assert!(book.find("Jones", "Bob").is_none());
/// ```
#[derive(Debug, Default)]
pub struct PhoneBook {
    /// Root slot of the tree
    root: Link,

    /// Number of entries (nodes) in the tree
    len: usize,
}

/// Position of a key relative to its parent, as found by [PhoneBook::locate].
#[derive(Debug, PartialEq)]
pub enum Location<'a> {
    /// The key is held by the root, which has no parent
    Root,
    /// The key is held by the `side` child of `parent`
    Child {
        /// Record of the parent node
        parent: &'a Record,
        /// Which child slot of the parent holds the key
        side: Side,
    },
    /// The key is not in the book
    NotFound,
}

/// Outcome of rebuilding a book from store lines.
///
/// Duplicate keys and blank lines are not errors during a load; they are
/// skipped and counted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Number of records inserted
    pub loaded: usize,
    /// Number of lines skipped because their key was already loaded
    pub skipped_duplicates: usize,
    /// Number of blank lines skipped
    pub skipped_blank: usize,
}

impl LoadReport {
    /// Returns the total number of skipped lines.
    pub fn skipped(&self) -> usize {
        self.skipped_duplicates + self.skipped_blank
    }
}

// ============================================================================
// New, Getters / Queries (pub)
// ============================================================================
impl PhoneBook {
    /// Creates an empty phone book.
    pub fn new() -> Self {
        PhoneBook { root: None, len: 0 }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the book has no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Finds the entry for the given names (case-insensitive).
    ///
    /// The returned borrow can not outlive a deletion or
    /// [clear](PhoneBook::clear) of the book.
    ///
    /// # Returns
    /// `Some(&Record)` if present, `None` otherwise
    pub fn find(&self, last: &str, first: &str) -> Option<&Record> {
        self.find_key(&Key::new(last, first))
    }

    /// Finds the entry for an already normalized [Key].
    pub fn find_key(&self, key: &Key) -> Option<&Record> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.record),
            };
        }
        None
    }

    /// Returns `true` if an entry with the given names exists.
    pub fn contains(&self, last: &str, first: &str) -> bool {
        self.find(last, first).is_some()
    }

    /// Locates the entry for the given names relative to its parent.
    ///
    /// # Returns
    /// * [Location::Root] - the root holds the key
    /// * [Location::Child] - the key is a child of the returned parent record
    /// * [Location::NotFound] - no entry with that key
    pub fn locate(&self, last: &str, first: &str) -> Location<'_> {
        self.locate_key(&Key::new(last, first))
    }

    /// Locates an already normalized [Key] relative to its parent.
    pub fn locate_key(&self, key: &Key) -> Location<'_> {
        let Some(root) = self.root.as_deref() else {
            return Location::NotFound;
        };
        if root.key() == key {
            return Location::Root;
        }

        let mut parent = root;
        loop {
            let side = if key < parent.key() { Side::Left } else { Side::Right };
            match parent.child(side) {
                None => return Location::NotFound,
                Some(child) if child.key() == key => {
                    return Location::Child {
                        parent: &parent.record,
                        side,
                    };
                }
                Some(child) => parent = child,
            }
        }
    }

    /// Returns the height of the tree: the number of nodes on the longest
    /// root-to-leaf path (`0` for an empty book).
    ///
    /// The tree is not balanced, so inserting keys in sorted order yields a
    /// height equal to [len](PhoneBook::len).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> = self.root.as_deref().map(|n| (n, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }

        height
    }

    /// Validates the tree structure.
    ///
    /// Checks:
    /// - In-order keys are strictly ascending (search order, no duplicates)
    /// - The number of reachable nodes equals `len()`
    /// - `len() == 0` exactly when there is no root
    ///
    /// # Returns
    /// `true` if the book is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if (self.len == 0) != self.root.is_none() {
            return false;
        }

        let mut count = 0;
        let mut previous: Option<&Key> = None;
        for record in self.ordered_sequence() {
            if previous.is_some_and(|prev| prev >= record.key()) {
                return false;
            }
            previous = Some(record.key());
            count += 1;
        }

        count == self.len
    }
}

// ============================================================================
// Mutation (pub)
// ============================================================================
impl PhoneBook {
    /// Inserts a new entry.
    ///
    /// The record is attached as a new leaf where the search for its key
    /// ends. Existing entries are never overwritten.
    ///
    /// The phone number is not validated here: a record with an empty
    /// number (e.g. decoded from a line `anna,smith`) is stored as is. Only
    /// [update_phone](PhoneBook::update_phone) rejects blank numbers.
    ///
    /// # Errors
    /// Returns [PhonebookErrorType::DuplicateKey] if an entry with the same
    /// key exists; the book is unchanged in that case.
    pub fn insert(&mut self, record: Record) -> Result<(), PhonebookError> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match record.key().cmp(node.key()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Err(PhonebookError::duplicate_key(record.key())),
            };
        }

        debug!("Inserting {}", record.key());
        *link = Some(Box::new(Node::new(record)));
        self.len += 1;
        Ok(())
    }

    /// Replaces the phone number of an existing entry in place.
    ///
    /// No node is created or moved; the entry keeps its identity.
    ///
    /// # Returns
    /// The updated record
    ///
    /// # Errors
    /// * [PhonebookErrorType::NotFound] if there is no such entry
    /// * [PhonebookErrorType::EmptyPhone] if `phone` is empty
    pub fn update_phone(&mut self, last: &str, first: &str, phone: &str) -> Result<&Record, PhonebookError> {
        let key = Key::new(last, first);
        let node = edge_mut(&mut self.root, &key)
            .and_then(|edge| edge.as_deref_mut())
            .ok_or_else(|| PhonebookError::not_found(&key))?;

        if phone.is_empty() {
            return Err(PhonebookError::empty_phone(&key));
        }

        debug!("Updating phone of {key}");
        node.record.set_phone(phone);
        Ok(&node.record)
    }

    /// Removes the entry with the given names and returns its record.
    ///
    /// The incoming edge of the removed node (the root slot or the parent's
    /// child slot) is redirected, depending on the node's children:
    /// - **No children**: the edge becomes empty.
    /// - **One child**: the edge points to that child.
    /// - **Two children**: the edge points to the in-order successor (the
    ///   leftmost node of the right subtree). The successor is detached from
    ///   its old parent, whose left slot takes over the successor's right
    ///   subtree, and it adopts both subtrees of the removed node (unless it
    ///   was the direct right child, in which case it keeps its right subtree).
    ///
    /// Only boxes are moved, so all remaining entries keep their addresses.
    ///
    /// # Errors
    /// Returns [PhonebookErrorType::NotFound] if there is no such entry;
    /// retrying a successful delete therefore reports `NotFound`.
    pub fn delete(&mut self, last: &str, first: &str) -> Result<Record, PhonebookError> {
        let key = Key::new(last, first);
        let edge = edge_mut(&mut self.root, &key).ok_or_else(|| PhonebookError::not_found(&key))?;
        let Some(mut target) = edge.take() else {
            return Err(PhonebookError::not_found(&key));
        };

        *edge = match (target.left.take(), target.right.take()) {
            (Some(left), Some(right)) => {
                debug!("Deleting {key}, replaced by its in-order successor");
                Some(splice_successor(left, right))
            }
            (Some(child), None) | (None, Some(child)) => {
                debug!("Deleting {key}, replaced by its child {}", child.key());
                Some(child)
            }
            (None, None) => {
                debug!("Deleting leaf {key}");
                None
            }
        };
        self.len -= 1;

        Ok(target.into_record())
    }

    /// Removes all entries.
    ///
    /// Nodes are torn down iteratively, so even a fully degenerated tree
    /// does not exhaust the call stack.
    pub fn clear(&mut self) {
        trace!("Clearing {} entries", self.len);
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl Drop for PhoneBook {
    fn drop(&mut self) {
        self.clear();
    }
}

// ============================================================================
// Traversal + (De)Serialization (pub)
// ============================================================================
impl PhoneBook {
    /// Returns an iterator over all entries in ascending key order.
    ///
    /// The iterator is lazy; calling this again restarts from the smallest key.
    pub fn ordered_sequence(&self) -> InOrderIter<'_> {
        InOrderIter::new(self)
    }

    /// Returns an iterator over all entries in pre-order (parents before
    /// children).
    ///
    /// Reinserting records in this order rebuilds the same tree shape, which
    /// is why it drives [serialize](PhoneBook::serialize).
    pub fn structural_sequence(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }

    /// Encodes all entries as store lines using [WIRE_FIELD_ORDER].
    ///
    /// # Returns
    /// One line per entry in structural order; empty if the book is empty.
    pub fn serialize(&self) -> Vec<String> {
        self.serialize_with(WIRE_FIELD_ORDER)
    }

    /// Encodes all entries as store lines using the given [FieldOrder].
    pub fn serialize_with(&self, order: FieldOrder) -> Vec<String> {
        self.structural_sequence()
            .map(|record| record.encode(order))
            .collect()
    }

    /// Replaces the content of this book with the records decoded from
    /// `lines`, using [WIRE_FIELD_ORDER].
    ///
    /// See [deserialize_with](PhoneBook::deserialize_with).
    pub fn deserialize<I, S>(&mut self, lines: I) -> LoadReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.deserialize_with(lines, WIRE_FIELD_ORDER)
    }

    /// Replaces the content of this book with the records decoded from
    /// `lines` in the given [FieldOrder].
    ///
    /// The book is cleared first. Each line is decoded with
    /// [Record::decode] and inserted; lines whose key was already loaded are
    /// skipped silently, as are blank lines. A trailing `\r` is ignored.
    ///
    /// # Returns
    /// A [LoadReport] counting loaded and skipped lines
    pub fn deserialize_with<I, S>(&mut self, lines: I, order: FieldOrder) -> LoadReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear();

        let mut report = LoadReport::default();
        for line in lines {
            let line = line.as_ref().trim_end_matches('\r');
            if line.trim().is_empty() {
                report.skipped_blank += 1;
                continue;
            }

            match self.insert(Record::decode(line, order)) {
                Ok(()) => report.loaded += 1,
                Err(err) if *err.kind() == PhonebookErrorType::DuplicateKey => {
                    debug!("Skipping duplicate line for {}", err.context());
                    report.skipped_duplicates += 1;
                }
                Err(err) => debug!("Skipping line: {err}"),
            }
        }

        report
    }
}

// ============================================================================
// Re-linking helpers (private)
// ============================================================================
/// Returns the edge (root slot or child slot) that holds `key`, if any.
fn edge_mut<'a>(mut link: &'a mut Link, key: &Key) -> Option<&'a mut Link> {
    loop {
        let ordering = key.cmp(link.as_deref()?.key());
        link = match ordering {
            Ordering::Equal => return Some(link),
            Ordering::Less => &mut link.as_mut()?.left,
            Ordering::Greater => &mut link.as_mut()?.right,
        };
    }
}

/// Detaches the leftmost node below `link`, moving its right subtree into
/// the slot it leaves behind.
fn take_min(mut link: &mut Link) -> Option<Box<Node>> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

/// Joins the two subtrees of a removed node under its in-order successor,
/// which is returned as the new subtree root.
fn splice_successor(left: Box<Node>, mut right: Box<Node>) -> Box<Node> {
    let mut successor = match take_min(&mut right.left) {
        Some(mut successor) => {
            successor.right = Some(right);
            successor
        }
        // Right child has no left subtree, so it is the successor itself
        None => right,
    };
    successor.left = Some(left);
    successor
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
/// Iterator for in-order traversal (ascending key order).
///
/// Uses an explicit stack holding the left spine of the unvisited part of
/// the tree, so no recursion is involved.
pub struct InOrderIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrderIter<'a> {
    fn new(book: &'a PhoneBook) -> Self {
        let mut iter = InOrderIter { stack: Vec::new() };
        iter.push_left_spine(book.root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.record)
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited before any of its descendants, left subtree before right.
pub struct PreOrderIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrderIter<'a> {
    fn new(book: &'a PhoneBook) -> Self {
        PreOrderIter {
            stack: book.root.as_deref().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Push children onto stack (right first, so left is processed first)
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }

        Some(&node.record)
    }
}
