//! Red-black tree ordered set in Rust.
//!
//! This crate provides `RedBlackTree<K>`, a self-balancing binary search tree
//! with O(log n) insertion, deletion and lookup over any `Ord` key type.
//!
//! Nodes live in an arena and refer to each other by `NodeId`. Child links own
//! their targets; the parent link is a plain index used only to walk upward.
//! The tree keeps these rules after every public operation:
//!
//! 1. Keys are in binary-search-tree order, with no two keys equal.
//! 2. The root is black.
//! 3. No red node has a red child.
//! 4. Every path from a node down to an absent child crosses the same number
//!    of black nodes.
//!
//! ```
//! use redblacktree::{DeleteOutcome, InsertOutcome, RedBlackTree};
//!
//! let mut tree = RedBlackTree::new();
//! for key in [27, 15, 7, 18, 40] {
//!     assert_eq!(tree.insert(key), InsertOutcome::Inserted);
//! }
//! assert_eq!(tree.delete(&15), DeleteOutcome::Deleted);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [7, 18, 27, 40]);
//! assert!(tree.check_invariants());
//! ```

mod arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod rotate_operations;
mod tree_structure;
mod types;
mod validation;

pub use arena::{Arena, ArenaStats};
pub use error::{KeyResult, ModifyResult, RbTreeResult, RedBlackTreeError, TreeResultExt};
pub use iteration::{Iter, Range};
pub use types::{Color, DeleteOutcome, InsertOutcome, NodeId, NodeRef, RedBlackTree, NULL_NODE};
