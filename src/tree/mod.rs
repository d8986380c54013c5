/// Holds the `TreeNode` struct.
pub mod tree_node;
