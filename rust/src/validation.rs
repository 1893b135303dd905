//! Validation and debugging utilities for RedBlackTree.
//!
//! This module contains invariant checking for the five red-black rules plus
//! the structural properties the arena representation adds: parent
//! back-references agree with child links, and every live arena slot is
//! reachable from the root exactly once.

use crate::error::{RedBlackTreeError, TreeResult};
use crate::types::{NodeId, RedBlackTree, NULL_NODE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord> RedBlackTree<K> {
    /// Check if the tree maintains red-black invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// # Errors
    ///
    /// `CorruptedTree` naming the first broken rule, or `DataIntegrityError`
    /// when the arena holds nodes the tree cannot reach.
    pub fn check_invariants_detailed(&self) -> TreeResult<()> {
        if self.root != NULL_NODE {
            let root = self
                .arena
                .get(self.root)
                .ok_or_else(|| RedBlackTreeError::corrupted_tree("Root", "dangling root id"))?;
            if root.is_red() {
                return Err(RedBlackTreeError::corrupted_tree("Root", "root is red"));
            }
        }

        let mut visited = 0;
        self.check_subtree(self.root, NULL_NODE, None, None, &mut visited)?;

        self.check_arena_tree_consistency(visited)
    }

    /// Alias for check_invariants_detailed.
    pub fn validate(&self) -> TreeResult<()> {
        self.check_invariants_detailed()
    }

    /// Check one subtree and return its black-height (absent children count 0).
    fn check_subtree(
        &self,
        id: NodeId,
        expected_parent: NodeId,
        min_key: Option<&K>,
        max_key: Option<&K>,
        visited: &mut usize,
    ) -> TreeResult<usize> {
        if id == NULL_NODE {
            return Ok(0);
        }

        *visited += 1;
        if *visited > self.arena.len() {
            return Err(RedBlackTreeError::corrupted_tree(
                "Links",
                "more nodes reachable than allocated (cycle or shared child)",
            ));
        }

        let node = self.arena.get(id).ok_or_else(|| {
            RedBlackTreeError::corrupted_tree("Links", &format!("dangling node id {}", id))
        })?;

        if node.parent != expected_parent {
            return Err(RedBlackTreeError::corrupted_tree(
                "Parent link",
                &format!(
                    "node {} points at {} but hangs under {}",
                    id, node.parent, expected_parent
                ),
            ));
        }

        // Strict bounds also rule out duplicate keys.
        if min_key.map_or(false, |min| node.key <= *min)
            || max_key.map_or(false, |max| node.key >= *max)
        {
            return Err(RedBlackTreeError::corrupted_tree(
                "Ordering",
                &format!("node {} is outside the range its position allows", id),
            ));
        }

        if node.is_red() && (self.is_red(node.left) || self.is_red(node.right)) {
            return Err(RedBlackTreeError::corrupted_tree(
                "Coloring",
                &format!("red node {} has a red child", id),
            ));
        }

        let left_height = self.check_subtree(node.left, id, min_key, Some(&node.key), visited)?;
        let right_height = self.check_subtree(node.right, id, Some(&node.key), max_key, visited)?;
        if left_height != right_height {
            return Err(RedBlackTreeError::corrupted_tree(
                "Black height",
                &format!(
                    "node {} has black-height {} on the left and {} on the right",
                    id, left_height, right_height
                ),
            ));
        }

        Ok(left_height + usize::from(!node.is_red()))
    }

    /// Check that arena allocation matches tree structure
    fn check_arena_tree_consistency(&self, reachable: usize) -> TreeResult<()> {
        let allocated = self.arena.len();
        if reachable != allocated {
            return Err(RedBlackTreeError::data_integrity(
                "Arena consistency check",
                &format!("{} in tree vs {} in arena", reachable, allocated),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

#[cfg(test)]
impl<K> RedBlackTree<K> {
    /// Nodes in breadth-first order, for asserting exact shapes in tests.
    pub(crate) fn level_order(&self) -> Vec<crate::types::NodeRef<'_, K>> {
        let mut out = Vec::new();
        let mut queue = std::collections::VecDeque::new();
        queue.extend(self.root());
        while let Some(node) = queue.pop_front() {
            queue.extend(node.left());
            queue.extend(node.right());
            out.push(node);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Node, Side, Slot};

    fn valid_tree() -> RedBlackTree<i32> {
        (1..=31).collect()
    }

    #[test]
    fn test_valid_tree_passes() {
        let tree = valid_tree();
        assert!(tree.check_invariants());
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_red_root_detected() {
        let mut tree = valid_tree();
        let root = tree.root;
        tree.arena[root].color = Color::Red;
        assert!(matches!(
            tree.validate(),
            Err(RedBlackTreeError::CorruptedTree(msg)) if msg.contains("root is red")
        ));
    }

    #[test]
    fn test_red_red_detected() {
        let mut tree: RedBlackTree<i32> = [10, 20, 30].into_iter().collect();
        let ten = tree.find(&10).unwrap().id();
        let child = tree.arena.allocate(Node::new(5, Color::Red));
        tree.set_child(ten, Side::Left, child);
        let err = tree.validate().unwrap_err();
        assert!(err.to_string().contains("red child"), "{}", err);
    }

    #[test]
    fn test_black_height_mismatch_detected() {
        let mut tree: RedBlackTree<i32> = [10, 20, 30].into_iter().collect();
        let ten = tree.find(&10).unwrap().id();
        tree.arena[ten].color = Color::Black;
        let err = tree.validate().unwrap_err();
        assert!(err.to_string().contains("black-height"), "{}", err);
    }

    #[test]
    fn test_ordering_violation_detected() {
        let mut tree: RedBlackTree<i32> = [10, 20, 30].into_iter().collect();
        let ten = tree.find(&10).unwrap().id();
        tree.arena[ten].key = 25;
        let err = tree.validate().unwrap_err();
        assert!(err.to_string().contains("Ordering"), "{}", err);
    }

    #[test]
    fn test_stale_parent_detected() {
        let mut tree = valid_tree();
        let root = tree.root;
        let left = tree.arena[root].left;
        tree.arena[left].parent = NULL_NODE;
        let err = tree.validate().unwrap_err();
        assert!(err.to_string().contains("Parent link"), "{}", err);
    }

    #[test]
    fn test_leaked_node_detected() {
        let mut tree = valid_tree();
        tree.arena.allocate(Node::new(99, Color::Red));
        assert!(matches!(
            tree.validate(),
            Err(RedBlackTreeError::DataIntegrityError(_))
        ));
    }

    #[test]
    fn test_shared_child_detected() {
        let mut tree: RedBlackTree<i32> = [10, 20, 30].into_iter().collect();
        let root = tree.root;
        let thirty = tree.arena[root].right;
        // Point the root's left slot at 30 as well, without touching parents.
        tree.attach(Slot::Child(root, Side::Left), thirty);
        assert!(tree.validate().is_err());
    }
}
