//! Core types and data structures for RedBlackTree.
//!
//! This module contains the node and tree structures, the link vocabulary
//! (`NodeId`, `Side`, `Slot`) and the outcome enums returned by mutations.

use crate::arena::Arena;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation.
///
/// IDs are not stable identities. Deleting a key that has two children moves
/// its in-order successor's key into the deleted key's node, and the successor's
/// node is the one freed. A freed ID may be handed out again by a later insert.
pub type NodeId = u32;

/// The "no node" link. Reads as black in every color query.
pub const NULL_NODE: NodeId = u32::MAX;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Which child link of a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A position a node can occupy: the root reference or one child link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Root,
    Child(NodeId, Side),
}

/// A single tree node stored in the arena.
#[derive(Debug, Clone)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    /// Back-reference only; ownership flows through `left`/`right`.
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

/// Red-black tree ordered set.
///
/// Keys are kept in a binary search tree whose nodes carry a color. The
/// coloring rules bound the height to `2 * log2(n + 1)`, so lookup, insertion
/// and deletion are all O(log n).
///
/// # Type Parameters
///
/// * `K` - Key type, totally ordered through `Ord`
///
/// # Examples
///
/// ```
/// use redblacktree::{DeleteOutcome, InsertOutcome, RedBlackTree};
///
/// let mut tree = RedBlackTree::new();
/// assert_eq!(tree.insert(20), InsertOutcome::Inserted);
/// assert_eq!(tree.insert(10), InsertOutcome::Inserted);
/// assert_eq!(tree.insert(20), InsertOutcome::DuplicateRejected);
///
/// assert_eq!(tree.find(&10).map(|node| *node.key()), Some(10));
/// assert_eq!(tree.delete(&10), DeleteOutcome::Deleted);
/// assert!(tree.find(&10).is_none());
/// ```
///
/// # Concurrency
///
/// Every operation runs to completion on the calling thread. Mutation takes
/// `&mut self`; callers sharing a tree across threads provide their own lock.
#[derive(Debug, Clone)]
pub struct RedBlackTree<K> {
    /// Root node, or `NULL_NODE` when the tree is empty.
    pub(crate) root: NodeId,
    /// Storage for every node reachable from `root`.
    pub(crate) arena: Arena<Node<K>>,
}

/// Read-only view of one node, for structural inspection.
///
/// The same caveat as [`NodeId`] applies: a view obtained before a deletion
/// says nothing about which key that node holds afterwards.
pub struct NodeRef<'a, K> {
    pub(crate) tree: &'a RedBlackTree<K>,
    pub(crate) id: NodeId,
}

impl<'a, K> Clone for NodeRef<'a, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K> Copy for NodeRef<'a, K> {}

impl<'a, K: std::fmt::Debug> std::fmt::Debug for NodeRef<'a, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", self.key())
            .field("color", &self.color())
            .finish()
    }
}

// ============================================================================
// ENUMS AND RESULT TYPES
// ============================================================================

/// Result of an insertion.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was added.
    Inserted,
    /// An equal key was already present; the tree is unchanged.
    DuplicateRejected,
}

/// Result of a deletion.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The key was removed.
    Deleted,
    /// No equal key was present; the tree is unchanged.
    NotFound,
}

/// Result of a descent from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Search {
    /// A node holding an equal key.
    Found(NodeId),
    /// The empty slot where the key would be attached.
    Vacant(Slot),
}
