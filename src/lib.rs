//! Traversal algorithms over generic binary trees.
//!
//! Every function takes the root of a tree as an `Option<&N>` where `N` implements
//! [`traits::Node`]; `None` is the empty tree.  [`tree::tree_node::TreeNode`] is the owned node
//! type provided by this crate.
//!
//! ```
//! use sapling::{collect_level_order_values, find_all_root_to_leaf_paths, TreeNode};
//!
//! let root = TreeNode::leaf(1)
//!     .with_left(TreeNode::leaf(2).with_left(TreeNode::leaf(4)).with_right(TreeNode::leaf(5)))
//!     .with_right(TreeNode::leaf(3).with_right(TreeNode::leaf(6)));
//!
//! assert_eq!(collect_level_order_values(Some(&root)), vec![1, 2, 3, 4, 5, 6]);
//! assert_eq!(
//!     find_all_root_to_leaf_paths(Some(&root)),
//!     vec![vec![1, 2, 4], vec![1, 2, 5], vec![1, 3, 6]]
//! );
//! ```

/// Holds `find_all_root_to_leaf_paths`.
pub mod paths;
/// Holds `have_same_shape`.
pub mod shape;
/// Contains the traits and error type shared across the crate.
pub mod traits;
/// Holds the single-tree traversals.
pub mod traversals;
/// Contains the tree node container.
pub mod tree;
/// Contains the traversal helpers.
pub mod utils;

pub use crate::paths::find_all_root_to_leaf_paths;
pub use crate::shape::have_same_shape;
pub use crate::traits::{Exception, Node, TraversalResult};
pub use crate::traversals::{
    build_post_order_string, checked_sum_leaf_nodes, collect_level_order_values,
    count_distinct_values, count_internal_nodes, has_strictly_increasing_path, sum_leaf_nodes,
};
pub use crate::tree::tree_node::TreeNode;
pub use crate::utils::tree_utils::{count_leaves, count_nodes, height};
