/// Holds the `random_tree` generator.
#[cfg(feature = "rand")]
pub mod random_tree;
/// Holds the `TreeCell` struct.
pub mod tree_cell;
/// Holds the tree measuring helpers.
pub mod tree_utils;
