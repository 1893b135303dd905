//! DELETE operations for RedBlackTree.
//!
//! This module contains deletion, the physical removal of a node with at most
//! one child, and the fixup that repays a missing black node.
//!
//! The fixup tracks its position as a `(parent, side)` pair rather than as a
//! node. When the removed black node had no child, the deficient position is an
//! empty slot, and the pair lets the loop treat it as a black leaf without
//! allocating anything to stand in for it.

use std::borrow::Borrow;

use crate::error::{ModifyResult, TreeResultExt};
use crate::types::{Color, DeleteOutcome, NodeId, RedBlackTree, Search, Side, Slot, NULL_NODE};

impl<K: Ord> RedBlackTree<K> {
    /// Delete a key.
    ///
    /// # Returns
    ///
    /// `Deleted` if the key was present, `NotFound` otherwise (tree untouched).
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::{DeleteOutcome, RedBlackTree};
    ///
    /// let mut tree: RedBlackTree<_> = [10, 20, 30].into_iter().collect();
    /// assert_eq!(tree.delete(&10), DeleteOutcome::Deleted);
    /// assert_eq!(tree.delete(&10), DeleteOutcome::NotFound);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> DeleteOutcome
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.take(key) {
            Some(_) => DeleteOutcome::Deleted,
            None => DeleteOutcome::NotFound,
        }
    }

    /// Delete a key and return the stored key that compared equal to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<String> = ["x".to_string()].into_iter().collect();
    /// assert_eq!(tree.take("x"), Some("x".to_string()));
    /// assert_eq!(tree.take("x"), None);
    /// ```
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let found = match self.search(key) {
            Search::Found(id) => id,
            Search::Vacant(_) => {
                log::debug!("delete: key not present");
                return None;
            }
        };

        let right = self.arena[found].right;
        let target = if right == NULL_NODE {
            found
        } else {
            // The successor has no left child, so it has at most one child.
            let successor = self.leftmost(right);
            let (a, b) = self.arena.pair_mut(found, successor);
            std::mem::swap(&mut a.key, &mut b.key);
            successor
        };

        Some(self.remove_node(target))
    }

    /// Delete with key validation and tree validation before and after.
    ///
    /// # Errors
    ///
    /// `InvalidKey` if `key` does not compare equal to itself; a corruption
    /// error if the tree fails validation on either side of the delete.
    pub fn try_delete<Q>(&mut self, key: &Q) -> ModifyResult<DeleteOutcome>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::check_key(key)?;
        self.check_invariants_detailed().with_operation("delete")?;

        let outcome = self.delete(key);

        self.check_invariants_detailed().with_operation("delete")?;
        Ok(outcome)
    }
}

impl<K> RedBlackTree<K> {
    /// Unlink `node`, which has at most one child, and free it.
    fn remove_node(&mut self, node: NodeId) -> K {
        let (left, right, color) = {
            let n = &self.arena[node];
            (n.left, n.right, n.color)
        };
        debug_assert!(
            left == NULL_NODE || right == NULL_NODE,
            "remove_node({}) needs at most one child",
            node
        );
        let child = if left != NULL_NODE { left } else { right };
        let slot = self.slot_of(node);

        self.attach(slot, child);
        let removed = self.arena.remove(node);

        match slot {
            Slot::Root => {
                if child != NULL_NODE {
                    self.set_color(child, Color::Black);
                }
            }
            // Removing a red node leaves every black count intact.
            Slot::Child(..) if color == Color::Red => {}
            Slot::Child(..) if self.is_red(child) => self.set_color(child, Color::Black),
            Slot::Child(parent, side) => self.delete_fixup(parent, side),
        }

        removed.key
    }

    /// The subtree in `parent`'s `side` slot is one black node short of its
    /// sibling. Push the deficiency up or resolve it with rotations.
    fn delete_fixup(&mut self, mut parent: NodeId, mut side: Side) {
        let mut current = self.child(parent, side);

        while parent != NULL_NODE && !self.is_red(current) {
            let mut sibling = self.child(parent, side.opposite());
            debug_assert_ne!(sibling, NULL_NODE, "deficient slot without a sibling");

            if self.is_red(sibling) {
                log::trace!("delete fixup: red sibling {}", sibling);
                self.set_color(parent, Color::Red);
                self.set_color(sibling, Color::Black);
                self.rotate(parent, side);
                sibling = self.child(parent, side.opposite());
            }

            let near = self.child(sibling, side);
            let mut far = self.child(sibling, side.opposite());

            if !self.is_red(near) && !self.is_red(far) {
                log::trace!("delete fixup: black nephews under {}", sibling);
                self.set_color(sibling, Color::Red);
                current = parent;
                match self.slot_of(parent) {
                    Slot::Root => parent = NULL_NODE,
                    Slot::Child(grandparent, parent_side) => {
                        parent = grandparent;
                        side = parent_side;
                    }
                }
                continue;
            }

            if !self.is_red(far) {
                // Only the near nephew is red: turn it into the far case.
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, side.opposite());
                sibling = self.child(parent, side.opposite());
                far = self.child(sibling, side.opposite());
            }

            let parent_color = self.color_of(parent);
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            self.set_color(far, Color::Black);
            self.rotate(parent, side);
            log::trace!("delete fixup: resolved at parent {}", parent);
            current = self.root;
            break;
        }

        if current != NULL_NODE {
            self.set_color(current, Color::Black);
        }
    }
}
