//! Construction and initialization logic for RedBlackTree.
//!
//! The only tunable is the number of nodes the arena reserves up front.

use crate::arena::Arena;
use crate::types::{RedBlackTree, NULL_NODE};

impl<K> RedBlackTree<K> {
    /// Create an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::<i32>::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            root: NULL_NODE,
            arena: Arena::new(),
        }
    }

    /// Create an empty tree whose arena holds `capacity` nodes before it
    /// reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::<u64>::with_capacity(1024);
    /// assert!(tree.arena_stats().total_capacity >= 1024);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: NULL_NODE,
            arena: Arena::with_capacity(capacity),
        }
    }
}

impl<K> Default for RedBlackTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for RedBlackTree<K> {
    /// Builds a tree from the keys in iteration order. Later duplicates are
    /// rejected, so the first occurrence of each key is the one kept.
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RedBlackTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            let _ = self.insert(key);
        }
    }
}
