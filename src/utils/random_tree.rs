use rand::Rng;

use crate::tree::tree_node::TreeNode;

/// Generates a random tree of at most `max_depth` levels with values drawn from `low..high`.
/// Each child link is left empty with probability `1 - fill`, so the generated shape varies
/// from degenerate chains to near complete trees.  A `max_depth` of zero yields the empty tree.
#[inline]
pub fn random_tree<R: Rng + ?Sized>(
    rng: &mut R,
    max_depth: usize,
    fill: f64,
    low: i32,
    high: i32,
) -> Option<TreeNode<i32>> {
    if max_depth == 0 {
        return None;
    }
    let value = rng.gen_range(low, high);
    let left = random_child(rng, max_depth - 1, fill, low, high);
    let right = random_child(rng, max_depth - 1, fill, low, high);
    Some(TreeNode::new(value, left, right))
}

fn random_child<R: Rng + ?Sized>(
    rng: &mut R,
    max_depth: usize,
    fill: f64,
    low: i32,
    high: i32,
) -> Option<TreeNode<i32>> {
    if max_depth == 0 || !rng.gen_bool(fill) {
        return None;
    }
    random_tree(rng, max_depth, fill, low, high)
}
