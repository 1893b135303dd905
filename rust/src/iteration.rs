//! Iterator implementations for RedBlackTree.
//!
//! Both iterators walk the tree in key order by following parent
//! back-references, so they need no stack and yield each key in amortized O(1).

use std::borrow::Borrow;
use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};

use crate::types::{NodeId, RedBlackTree, NULL_NODE};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Iterator over all keys in ascending order.
pub struct Iter<'a, K> {
    tree: &'a RedBlackTree<K>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

/// Iterator over the keys inside a range, in ascending order.
pub struct Range<'a, K> {
    tree: &'a RedBlackTree<K>,
    front: NodeId,
    back: NodeId,
    finished: bool,
}

// ============================================================================
// REDBLACKTREE ITERATOR METHODS
// ============================================================================

impl<K> RedBlackTree<K> {
    /// Returns an iterator over all keys in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<_> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// assert_eq!(tree.iter().rev().next(), Some(&3));
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            tree: self,
            front: self.leftmost(self.root),
            back: self.rightmost(self.root),
            remaining: self.len(),
        }
    }
}

impl<K: Ord> RedBlackTree<K> {
    /// Returns an iterator over the keys within `range`.
    ///
    /// An empty or inverted range yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<_> = (0..10).collect();
    /// assert_eq!(tree.range(3..6).copied().collect::<Vec<_>>(), [3, 4, 5]);
    /// assert_eq!(tree.range(7..).copied().collect::<Vec<_>>(), [7, 8, 9]);
    /// assert_eq!(tree.range(..=1).copied().collect::<Vec<_>>(), [0, 1]);
    /// ```
    pub fn range<Q, R>(&self, range: R) -> Range<'_, K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        R: RangeBounds<Q>,
    {
        let front = self.lower_bound(range.start_bound());
        let back = self.upper_bound(range.end_bound());
        let finished = front == NULL_NODE
            || back == NULL_NODE
            || self.arena[front].key > self.arena[back].key;

        Range {
            tree: self,
            front,
            back,
            finished,
        }
    }

    /// First node whose key satisfies the start bound.
    fn lower_bound<Q>(&self, bound: Bound<&Q>) -> NodeId
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut candidate = NULL_NODE;
        let mut current = self.root;
        while current != NULL_NODE {
            let node = &self.arena[current];
            let key = node.key.borrow();
            let inside = match bound {
                Bound::Included(start) => key >= start,
                Bound::Excluded(start) => key > start,
                Bound::Unbounded => true,
            };
            if inside {
                candidate = current;
                current = node.left;
            } else {
                current = node.right;
            }
        }
        candidate
    }

    /// Last node whose key satisfies the end bound.
    fn upper_bound<Q>(&self, bound: Bound<&Q>) -> NodeId
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut candidate = NULL_NODE;
        let mut current = self.root;
        while current != NULL_NODE {
            let node = &self.arena[current];
            let key = node.key.borrow();
            let inside = match bound {
                Bound::Included(end) => key <= end,
                Bound::Excluded(end) => key < end,
                Bound::Unbounded => true,
            };
            if inside {
                candidate = current;
                current = node.right;
            } else {
                current = node.left;
            }
        }
        candidate
    }
}

impl<'a, K> IntoIterator for &'a RedBlackTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// ITER IMPLEMENTATION
// ============================================================================

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front;
        self.front = self.tree.successor(id);
        self.remaining -= 1;
        Some(&self.tree.arena[id].key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> DoubleEndedIterator for Iter<'a, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back;
        self.back = self.tree.predecessor(id);
        self.remaining -= 1;
        Some(&self.tree.arena[id].key)
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {}

impl<'a, K> FusedIterator for Iter<'a, K> {}

// ============================================================================
// RANGE IMPLEMENTATION
// ============================================================================

impl<'a, K> Iterator for Range<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let id = self.front;
        if id == self.back {
            self.finished = true;
        } else {
            self.front = self.tree.successor(id);
        }
        Some(&self.tree.arena[id].key)
    }
}

impl<'a, K> DoubleEndedIterator for Range<'a, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let id = self.back;
        if id == self.front {
            self.finished = true;
        } else {
            self.back = self.tree.predecessor(id);
        }
        Some(&self.tree.arena[id].key)
    }
}

impl<'a, K> FusedIterator for Range<'a, K> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_empty() {
        let tree: RedBlackTree<i32> = RedBlackTree::new();
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.iter().len(), 0);
        assert_eq!(tree.range::<i32, _>(..).next(), None);
    }

    #[test]
    fn test_iter_sorted_after_mixed_operations() {
        let mut tree: RedBlackTree<i32> = (0..100).rev().collect();
        for key in (0..100).step_by(3) {
            let _ = tree.delete(&key);
        }
        let expected: Vec<i32> = (0..100).filter(|k| k % 3 != 0).collect();
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), expected);
        assert_eq!(tree.iter().len(), expected.len());
    }

    #[test]
    fn test_iter_meets_in_the_middle() {
        let tree: RedBlackTree<i32> = (1..=4).collect();
        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_range_bounds() {
        let tree: RedBlackTree<i32> = (0..20).map(|i| i * 2).collect();
        fn collect<'a>(range: impl Iterator<Item = &'a i32>) -> Vec<i32> {
            range.copied().collect()
        }

        assert_eq!(collect(tree.range(3..9)), vec![4, 6, 8]);
        assert_eq!(collect(tree.range(4..=8)), vec![4, 6, 8]);
        assert_eq!(
            collect(tree.range((Bound::Excluded(4), Bound::Excluded(10)))),
            vec![6, 8]
        );
        assert_eq!(collect(tree.range(35..)), vec![36, 38]);
        assert_eq!(collect(tree.range(5..5)), Vec::<i32>::new());
        assert_eq!(collect(tree.range(100..)), Vec::<i32>::new());
        assert_eq!(collect(tree.range(12..4)), Vec::<i32>::new());
        assert_eq!(collect(tree.range(3..9).rev()), vec![8, 6, 4]);
    }

    #[test]
    fn test_range_with_borrowed_keys() {
        let tree: RedBlackTree<String> = ["apple", "banana", "cherry", "date"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let keys: Vec<&str> = tree
            .range::<str, _>((Bound::Included("b"), Bound::Excluded("d")))
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["banana", "cherry"]);
    }
}
