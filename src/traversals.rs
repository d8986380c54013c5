#[cfg(not(any(feature = "hashbrown")))]
use std::collections::HashSet;
use std::collections::VecDeque;
use std::fmt::Display;
use std::hash::Hash;

#[cfg(feature = "hashbrown")]
use hashbrown::HashSet;
use log::{debug, trace};
use num_traits::{CheckedAdd, WrappingAdd, Zero};

use crate::traits::{Exception, Node, TraversalResult};
use crate::utils::tree_cell::TreeCell;

/// Sums the values of every leaf in the tree, wrapping around at the bounds of the value type.
/// A single node is its own leaf, and the empty tree sums to zero.
#[inline]
pub fn sum_leaf_nodes<N>(node: Option<&N>) -> N::Value
where
    N: Node,
    N::Value: WrappingAdd + Zero + Clone,
{
    match node {
        None => N::Value::zero(),
        Some(n) if n.is_leaf() => n.value().clone(),
        Some(n) => sum_leaf_nodes(n.left()).wrapping_add(&sum_leaf_nodes(n.right())),
    }
}

/// Sums the values of every leaf in the tree without overflowing.
/// # Errors
/// `Exception` generated when the running sum exceeds the bounds of the value type.
#[inline]
pub fn checked_sum_leaf_nodes<N>(node: Option<&N>) -> TraversalResult<N::Value>
where
    N: Node,
    N::Value: CheckedAdd + Zero + Clone,
{
    match node {
        None => Ok(N::Value::zero()),
        Some(n) if n.is_leaf() => Ok(n.value().clone()),
        Some(n) => {
            let left = checked_sum_leaf_nodes(n.left())?;
            let right = checked_sum_leaf_nodes(n.right())?;
            left.checked_add(&right).ok_or_else(|| {
                debug!("Leaf sum overflowed");
                Exception::new("Sum of leaf values overflowed")
            })
        }
    }
}

/// Counts the nodes of the tree that have at least one child.
#[inline]
#[must_use]
pub fn count_internal_nodes<N: Node>(node: Option<&N>) -> usize {
    match node {
        Some(n) if !n.is_leaf() => {
            1 + count_internal_nodes(n.left()) + count_internal_nodes(n.right())
        }
        _ => 0,
    }
}

/// Concatenates the values of the tree in post-order: left subtree, right subtree, then the
/// node itself.  No separators are inserted, and the empty tree yields an empty string.
#[inline]
#[must_use]
pub fn build_post_order_string<N>(node: Option<&N>) -> String
where
    N: Node,
    N::Value: Display,
{
    let mut buffer = String::new();
    write_post_order(node, &mut buffer);
    buffer
}

fn write_post_order<N>(node: Option<&N>, buffer: &mut String)
where
    N: Node,
    N::Value: Display,
{
    if let Some(n) = node {
        write_post_order(n.left(), buffer);
        write_post_order(n.right(), buffer);
        buffer.push_str(&n.value().to_string());
    }
}

/// Collects the values of the tree level by level, from top to bottom and left to right.
#[inline]
#[must_use]
pub fn collect_level_order_values<N>(node: Option<&N>) -> Vec<N::Value>
where
    N: Node,
    N::Value: Clone,
{
    let mut values = Vec::new();
    let mut queue = VecDeque::new();
    queue.extend(node);

    while let Some(current) = queue.pop_front() {
        values.push(current.value().clone());
        queue.extend(current.left());
        queue.extend(current.right());
    }
    values
}

/// Counts the number of unique values stored in the tree.
#[inline]
#[must_use]
pub fn count_distinct_values<N>(node: Option<&N>) -> usize
where
    N: Node,
    N::Value: Eq + Hash,
{
    let mut unique_values = HashSet::new();
    let mut stack: Vec<&N> = node.into_iter().collect();

    while let Some(current) = stack.pop() {
        unique_values.insert(current.value());
        stack.extend(current.right());
        stack.extend(current.left());
    }
    unique_values.len()
}

/// Checks if at least one root-to-leaf path has every value strictly greater than the value
/// before it.  The search stops at the first such path.
#[inline]
#[must_use]
pub fn has_strictly_increasing_path<N>(node: Option<&N>) -> bool
where
    N: Node,
    N::Value: PartialOrd,
{
    let mut stack: Vec<TreeCell<N>> = node.map(|n| TreeCell::new(n, 1)).into_iter().collect();

    while let Some(cell) = stack.pop() {
        if cell.node.is_leaf() {
            trace!("Found increasing path of length {}", cell.depth);
            return true;
        }
        let last_value = cell.node.value();
        stack.extend(cell.children(|child| child.value() > last_value).rev());
    }
    false
}
