//! Tree structure management for RedBlackTree.
//!
//! Size queries and clearing, plus the link helpers every mutation goes
//! through. `attach` is the only place a child link is written, and it writes
//! the child's parent back-reference in the same step.

use crate::arena::ArenaStats;
use crate::types::{Color, NodeId, RedBlackTree, Side, Slot, NULL_NODE};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<K> RedBlackTree<K> {
    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root == NULL_NODE
    }

    /// Clear all keys from the tree.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = NULL_NODE;
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.height_from(self.root)
    }

    fn height_from(&self, id: NodeId) -> usize {
        if id == NULL_NODE {
            return 0;
        }
        let node = &self.arena[id];
        1 + self.height_from(node.left).max(self.height_from(node.right))
    }

    /// Number of black nodes on the leftmost root-to-leaf path, root included.
    /// Every other path has the same count when the tree is valid.
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut current = self.root;
        while current != NULL_NODE {
            let node = &self.arena[current];
            if !node.is_red() {
                count += 1;
            }
            current = node.left;
        }
        count
    }

    /// Get statistics for the node arena.
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    // ============================================================================
    // LINK HELPERS
    // ============================================================================

    /// Color of a node; absent nodes are black.
    #[inline]
    pub(crate) fn color_of(&self, id: NodeId) -> Color {
        if id == NULL_NODE {
            Color::Black
        } else {
            self.arena[id].color
        }
    }

    #[inline]
    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        self.color_of(id) == Color::Red
    }

    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        debug_assert_ne!(id, NULL_NODE, "cannot color an absent node");
        self.arena[id].color = color;
    }

    #[inline]
    pub(crate) fn parent_of(&self, id: NodeId) -> NodeId {
        if id == NULL_NODE {
            NULL_NODE
        } else {
            self.arena[id].parent
        }
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeId, side: Side) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        let node = &self.arena[id];
        match side {
            Side::Left => node.left,
            Side::Right => node.right,
        }
    }

    /// The slot currently holding `id`.
    pub(crate) fn slot_of(&self, id: NodeId) -> Slot {
        let parent = self.arena[id].parent;
        if parent == NULL_NODE {
            Slot::Root
        } else if self.arena[parent].left == id {
            Slot::Child(parent, Side::Left)
        } else {
            Slot::Child(parent, Side::Right)
        }
    }

    /// Which side of its parent `id` hangs on. `id` must not be the root.
    #[inline]
    pub(crate) fn side_of(&self, id: NodeId) -> Side {
        match self.slot_of(id) {
            Slot::Child(_, side) => side,
            Slot::Root => panic!("node {} has no parent", id),
        }
    }

    /// Write `child` into `slot` and point `child` back at the slot's owner.
    /// `child` may be `NULL_NODE`, which empties the slot.
    pub(crate) fn attach(&mut self, slot: Slot, child: NodeId) {
        let parent = match slot {
            Slot::Root => {
                self.root = child;
                NULL_NODE
            }
            Slot::Child(parent, side) => {
                let node = &mut self.arena[parent];
                match side {
                    Side::Left => node.left = child,
                    Side::Right => node.right = child,
                }
                parent
            }
        };
        if child != NULL_NODE {
            self.arena[child].parent = parent;
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, parent: NodeId, side: Side, child: NodeId) {
        self.attach(Slot::Child(parent, side), child);
    }

    /// Leftmost node of the subtree rooted at `id`.
    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while id != NULL_NODE {
            let left = self.arena[id].left;
            if left == NULL_NODE {
                break;
            }
            id = left;
        }
        id
    }

    /// Rightmost node of the subtree rooted at `id`.
    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while id != NULL_NODE {
            let right = self.arena[id].right;
            if right == NULL_NODE {
                break;
            }
            id = right;
        }
        id
    }

    /// In-order successor of `id`, or `NULL_NODE` for the maximum.
    pub(crate) fn successor(&self, id: NodeId) -> NodeId {
        self.step(id, Side::Right)
    }

    /// In-order predecessor of `id`, or `NULL_NODE` for the minimum.
    pub(crate) fn predecessor(&self, id: NodeId) -> NodeId {
        self.step(id, Side::Left)
    }

    fn step(&self, id: NodeId, toward: Side) -> NodeId {
        let down = self.child(id, toward);
        if down != NULL_NODE {
            return match toward {
                Side::Right => self.leftmost(down),
                Side::Left => self.rightmost(down),
            };
        }
        let mut current = id;
        let mut parent = self.parent_of(current);
        while parent != NULL_NODE && self.child(parent, toward) == current {
            current = parent;
            parent = self.parent_of(current);
        }
        parent
    }
}
