//! GET operations for RedBlackTree.
//!
//! This module contains the read operations: the shared root-to-leaf descent
//! used by every mutation, key lookup, and min/max access.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::error::{KeyResult, RedBlackTreeError};
use crate::types::{NodeRef, RedBlackTree, Search, Side, Slot, NULL_NODE};

impl<K: Ord> RedBlackTree<K> {
    // ============================================================================
    // SEARCH
    // ============================================================================

    /// Descend from the root to the node holding `key`, or to the empty slot
    /// where it would be attached.
    pub(crate) fn search<Q>(&self, key: &Q) -> Search
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut slot = Slot::Root;
        let mut current = self.root;
        while current != NULL_NODE {
            let node = &self.arena[current];
            let side = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Search::Found(current),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            slot = Slot::Child(current, side);
            current = self.child(current, side);
        }
        Search::Vacant(slot)
    }

    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Find the node holding a key.
    ///
    /// # Returns
    ///
    /// A view of the node if the key exists, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<_> = [10, 20, 30].into_iter().collect();
    /// let node = tree.find(&20).unwrap();
    /// assert_eq!(*node.key(), 20);
    /// assert!(node.parent().is_none());
    /// assert!(tree.find(&25).is_none());
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<NodeRef<'_, K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(key) {
            Search::Found(id) => Some(NodeRef { tree: self, id }),
            Search::Vacant(_) => None,
        }
    }

    /// Get a reference to the stored key equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<String> = ["b".to_string(), "a".to_string()].into_iter().collect();
    /// assert_eq!(tree.get("a").map(String::as_str), Some("a"));
    /// assert_eq!(tree.get("z"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|node| node.key())
    }

    /// Check if key exists in the tree.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        matches!(self.search(key), Search::Found(_))
    }

    /// Get the stored key equal to `key`, returning `KeyNotFound` when absent
    /// and `InvalidKey` when `key` does not compare equal to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::{RedBlackTree, RedBlackTreeError};
    ///
    /// let tree: RedBlackTree<_> = (1..=3).collect();
    /// assert_eq!(tree.try_get(&2), Ok(&2));
    /// assert_eq!(tree.try_get(&9), Err(RedBlackTreeError::KeyNotFound));
    /// ```
    pub fn try_get<Q>(&self, key: &Q) -> KeyResult<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::check_key(key)?;
        self.get(key).ok_or(RedBlackTreeError::KeyNotFound)
    }

    /// Reject a key whose `Ord` impl is not reflexive. Such a key cannot be
    /// placed consistently and would corrupt the ordering invariant.
    pub(crate) fn check_key<Q>(key: &Q) -> KeyResult<()>
    where
        Q: Ord + ?Sized,
    {
        if key.cmp(key) == Ordering::Equal {
            Ok(())
        } else {
            Err(RedBlackTreeError::invalid_key(
                "key does not compare equal to itself",
            ))
        }
    }
}

impl<K> RedBlackTree<K> {
    /// Returns the smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        let id = self.leftmost(self.root);
        self.arena.get(id).map(|node| &node.key)
    }

    /// Returns the largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        let id = self.rightmost(self.root);
        self.arena.get(id).map(|node| &node.key)
    }
}

/// Ordering that never reports equality, like a NaN-carrying float.
#[cfg(test)]
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Unordered;

#[cfg(test)]
impl PartialOrd for Unordered {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
impl Ord for Unordered {
    fn cmp(&self, _other: &Self) -> Ordering {
        Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_on_empty_tree() {
        let tree: RedBlackTree<i32> = RedBlackTree::new();
        assert!(tree.find(&1).is_none());
        assert_eq!(tree.search(&1), Search::Vacant(Slot::Root));
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
    }

    #[test]
    fn test_search_reports_attach_slot() {
        let tree: RedBlackTree<_> = [20, 10, 30].into_iter().collect();
        let ten = tree.find(&10).unwrap().id();
        let thirty = tree.find(&30).unwrap().id();

        assert_eq!(tree.search(&5), Search::Vacant(Slot::Child(ten, Side::Left)));
        assert_eq!(tree.search(&15), Search::Vacant(Slot::Child(ten, Side::Right)));
        assert_eq!(tree.search(&35), Search::Vacant(Slot::Child(thirty, Side::Right)));
        assert_eq!(tree.search(&30), Search::Found(thirty));
    }

    #[test]
    fn test_find_every_inserted_key() {
        let tree: RedBlackTree<_> = (0..200).map(|i| (i * 37) % 211).collect();
        for i in 0..200 {
            let key = (i * 37) % 211;
            assert_eq!(tree.find(&key).map(|n| *n.key()), Some(key));
            assert!(tree.contains(&key));
        }
        assert!(!tree.contains(&1000));
        assert_eq!(tree.first(), Some(&0));
        assert_eq!(tree.last(), tree.iter().next_back());
    }

    #[test]
    fn test_try_get_rejects_irreflexive_key() {
        let tree: RedBlackTree<Unordered> = RedBlackTree::new();
        assert!(matches!(
            tree.try_get(&Unordered),
            Err(RedBlackTreeError::InvalidKey(_))
        ));
    }
}
