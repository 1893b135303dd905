//! Node construction and the read-only `NodeRef` view.

use crate::types::{Color, Node, NodeId, NodeRef, RedBlackTree, NULL_NODE};

impl<K> Node<K> {
    /// Creates a detached node with no parent and no children.
    pub(crate) fn new(key: K, color: Color) -> Self {
        Self {
            key,
            color,
            parent: NULL_NODE,
            left: NULL_NODE,
            right: NULL_NODE,
        }
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

impl<'a, K> NodeRef<'a, K> {
    fn node(&self) -> &'a Node<K> {
        &self.tree.arena[self.id]
    }

    fn neighbor(&self, id: NodeId) -> Option<NodeRef<'a, K>> {
        (id != NULL_NODE).then_some(NodeRef {
            tree: self.tree,
            id,
        })
    }

    /// Arena ID of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The key stored in this node.
    pub fn key(&self) -> &'a K {
        &self.node().key
    }

    /// Red or black.
    pub fn color(&self) -> Color {
        self.node().color
    }

    /// True when this node is red.
    pub fn is_red(&self) -> bool {
        self.node().is_red()
    }

    /// The parent node, or `None` at the root.
    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        self.neighbor(self.node().parent)
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.neighbor(self.node().left)
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.neighbor(self.node().right)
    }
}

impl<K> RedBlackTree<K> {
    /// The root node, if the tree is non-empty.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.node(self.root)
    }

    /// A view of the node with the given ID, if that ID is live.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        self.arena.contains(id).then_some(NodeRef { tree: self, id })
    }
}
