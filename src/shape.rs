use crate::traits::Node;

/// Checks if two trees have exactly the same arrangement of nodes, irrespective of the values
/// they hold.  The trees may store different value types, or even be different node types.
#[inline]
#[must_use]
pub fn have_same_shape<A: Node, B: Node>(node_a: Option<&A>, node_b: Option<&B>) -> bool {
    match (node_a, node_b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            have_same_shape(a.left(), b.left()) && have_same_shape(a.right(), b.right())
        }
        _ => false,
    }
}
