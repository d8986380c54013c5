use log::trace;

use crate::traits::Node;

/// Finds every path from the root to a leaf.  Each path lists the node values from the root
/// down to the leaf, and paths are ordered by the pre-order position of their leaf.
#[inline]
#[must_use]
pub fn find_all_root_to_leaf_paths<N>(node: Option<&N>) -> Vec<Vec<N::Value>>
where
    N: Node,
    N::Value: Clone,
{
    let mut paths = Vec::new();
    let mut current_path = Vec::new();
    if let Some(root) = node {
        collect_paths(root, &mut current_path, &mut paths);
    }
    trace!("Collected {} root-to-leaf paths", paths.len());
    paths
}

/// Extends `current_path` with `node`, records a copy of it for every leaf below, then restores
/// `current_path` before returning.
fn collect_paths<N>(node: &N, current_path: &mut Vec<N::Value>, paths: &mut Vec<Vec<N::Value>>)
where
    N: Node,
    N::Value: Clone,
{
    current_path.push(node.value().clone());
    if node.is_leaf() {
        paths.push(current_path.clone());
    } else {
        for child in node.left().into_iter().chain(node.right()) {
            collect_paths(child, current_path, paths);
        }
    }
    current_path.pop();
}
