use crate::traits::Node;

/// Represents a position in the tree during tree traversal.
pub struct TreeCell<'a, NodeType> {
    /// The node currently being traversed.
    pub node: &'a NodeType,
    /// The depth of the traversal in the tree, starting at 1 for the root.
    pub depth: usize,
}

impl<'a, NodeType: Node> TreeCell<'a, NodeType> {
    /// Creates a new `TreeCell`.
    #[inline]
    pub const fn new(node: &'a NodeType, depth: usize) -> Self {
        Self { node, depth }
    }

    /// Creates the `TreeCell`s for the children of this cell's node that satisfy `admit`.
    /// The left child comes first.
    #[inline]
    pub fn children<F>(
        &self,
        mut admit: F,
    ) -> impl DoubleEndedIterator<Item = TreeCell<'a, NodeType>>
    where
        F: FnMut(&'a NodeType) -> bool,
    {
        let node = self.node;
        let depth = self.depth + 1;
        let left = node.left().filter(|&n| admit(n));
        let right = node.right().filter(|&n| admit(n));
        left.into_iter()
            .chain(right)
            .map(move |node| TreeCell::new(node, depth))
    }
}
