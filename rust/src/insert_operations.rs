//! INSERT operations for RedBlackTree.
//!
//! This module contains insertion and the fixup that restores the coloring
//! rules after a red leaf is attached.

use std::cmp::Ordering;

use crate::error::{ModifyResult, TreeResultExt};
use crate::types::{Color, InsertOutcome, Node, NodeId, RedBlackTree, Search, Slot, NULL_NODE};

impl<K: Ord> RedBlackTree<K> {
    /// Insert a key.
    ///
    /// # Returns
    ///
    /// `Inserted` if the key was added, `DuplicateRejected` if an equal key was
    /// already present, in which case the tree is left untouched.
    ///
    /// # Panics
    ///
    /// In debug builds, if `key` does not compare equal to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::{Color, InsertOutcome, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// for key in [10, 20, 30] {
    ///     assert_eq!(tree.insert(key), InsertOutcome::Inserted);
    /// }
    /// let root = tree.root().unwrap();
    /// assert_eq!((*root.key(), root.color()), (20, Color::Black));
    /// assert_eq!(tree.insert(30), InsertOutcome::DuplicateRejected);
    /// ```
    pub fn insert(&mut self, key: K) -> InsertOutcome {
        debug_assert_eq!(
            key.cmp(&key),
            Ordering::Equal,
            "insert of a key that does not compare equal to itself"
        );
        let slot = match self.search(&key) {
            Search::Found(id) => {
                log::debug!("insert rejected: key already held by node {}", id);
                return InsertOutcome::DuplicateRejected;
            }
            Search::Vacant(slot) => slot,
        };

        if slot == Slot::Root {
            let id = self.arena.allocate(Node::new(key, Color::Black));
            self.attach(Slot::Root, id);
            return InsertOutcome::Inserted;
        }

        let id = self.arena.allocate(Node::new(key, Color::Red));
        self.attach(slot, id);
        self.insert_fixup(id);

        // The uncle-red case can recolor the root red.
        let root = self.root;
        self.set_color(root, Color::Black);
        InsertOutcome::Inserted
    }

    /// Restore "no red node has a red child" after attaching red `current`.
    fn insert_fixup(&mut self, mut current: NodeId) {
        loop {
            let parent = self.parent_of(current);
            if parent == NULL_NODE || !self.is_red(parent) {
                return;
            }
            // A red parent is never the root, so the grandparent exists.
            let grandparent = self.parent_of(parent);
            let parent_side = self.side_of(parent);
            let uncle = self.child(grandparent, parent_side.opposite());

            if self.is_red(uncle) {
                log::trace!("insert fixup: red uncle at node {}", uncle);
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                current = grandparent;
                continue;
            }

            // Black uncle: straighten a zig-zag, then rotate the grandparent.
            let mut top = parent;
            if self.side_of(current) != parent_side {
                self.rotate(parent, parent_side);
                top = current;
            }
            self.rotate(grandparent, parent_side.opposite());
            self.set_color(top, Color::Black);
            self.set_color(grandparent, Color::Red);
            log::trace!("insert fixup: rotated grandparent {}", grandparent);
            return;
        }
    }

    /// Insert with key validation and tree validation before and after.
    ///
    /// # Errors
    ///
    /// `InvalidKey` if `key` does not compare equal to itself; a corruption
    /// error if the tree fails validation on either side of the insert.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::{InsertOutcome, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.try_insert(1), Ok(InsertOutcome::Inserted));
    /// assert_eq!(tree.try_insert(1), Ok(InsertOutcome::DuplicateRejected));
    /// ```
    pub fn try_insert(&mut self, key: K) -> ModifyResult<InsertOutcome> {
        Self::check_key(&key)?;
        self.check_invariants_detailed().with_operation("insert")?;

        let outcome = self.insert(key);

        self.check_invariants_detailed().with_operation("insert")?;
        Ok(outcome)
    }
}
