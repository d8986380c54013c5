use crate::traits::Node;

/// Counts every node in the tree.  The empty tree has no nodes.
#[inline]
#[must_use]
pub fn count_nodes<N: Node>(node: Option<&N>) -> usize {
    node.map_or(0, |n| 1 + count_nodes(n.left()) + count_nodes(n.right()))
}

/// Counts the nodes of the tree that have no children.
#[inline]
#[must_use]
pub fn count_leaves<N: Node>(node: Option<&N>) -> usize {
    match node {
        None => 0,
        Some(n) if n.is_leaf() => 1,
        Some(n) => count_leaves(n.left()) + count_leaves(n.right()),
    }
}

/// Calculates the number of nodes on the longest root-to-leaf path.
#[inline]
#[must_use]
pub fn height<N: Node>(node: Option<&N>) -> usize {
    node.map_or(0, |n| 1 + height(n.left()).max(height(n.right())))
}
