//! Rotation primitives shared by the insert and delete fixups.
//!
//! ```text
//!        p                         p
//!        |                         |
//!        x      rotate_left(x)     y
//!       / \     ------------>     / \
//!      a   y                     x   c
//!         / \   <------------   / \
//!        b   c  rotate_right(y) a   b
//! ```
//!
//! A rotation swaps which of two adjacent nodes is the parent, preserves the
//! in-order sequence, and rewrites exactly three slots.

use crate::types::{NodeId, RedBlackTree, Side, Slot, NULL_NODE};

impl<K> RedBlackTree<K> {
    /// Rotate the subtree at `x` toward `dir`: the child of `x` on the
    /// opposite side (the pivot) takes `x`'s slot and `x` becomes the pivot's
    /// `dir` child.
    #[inline]
    pub(crate) fn rotate(&mut self, x: NodeId, dir: Side) {
        match dir {
            Side::Left => self.rotate_left(x),
            Side::Right => self.rotate_right(x),
        }
    }

    /// `x`'s right child becomes the subtree root.
    pub(crate) fn rotate_left(&mut self, x: NodeId) {
        self.rotate_toward(x, Side::Left);
    }

    /// `x`'s left child becomes the subtree root.
    pub(crate) fn rotate_right(&mut self, x: NodeId) {
        self.rotate_toward(x, Side::Right);
    }

    /// # Panics
    /// Panics if `x` has no pivot child. The fixups only rotate where a pivot
    /// is guaranteed, so hitting this means the tree is already corrupt.
    fn rotate_toward(&mut self, x: NodeId, dir: Side) {
        let pivot = self.child(x, dir.opposite());
        assert_ne!(
            pivot, NULL_NODE,
            "rotation {:?} at node {} requires a {:?} child",
            dir,
            x,
            dir.opposite()
        );
        let inner = self.child(pivot, dir);
        let slot = self.slot_of(x);

        self.set_child(x, dir.opposite(), inner);
        self.attach(slot, pivot);
        self.set_child(pivot, dir, x);

        log::trace!("rotate {:?} at node {}, pivot {}", dir, x, pivot);
    }
}
