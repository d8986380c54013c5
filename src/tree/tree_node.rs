use crate::traits::Node;

/// A node in the tree.
///
/// Each node exclusively owns its subtrees, so a `TreeNode` can never be shared between two
/// parents or form a cycle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TreeNode<T> {
    /// The value stored in the node.
    pub value: T,
    /// The subtree reached by going down the left branch.
    pub left: Option<Box<TreeNode<T>>>,
    /// The subtree reached by going down the right branch.
    pub right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    /// Creates a new `TreeNode` from a value and its two optional subtrees.
    #[inline]
    pub fn new(value: T, left: Option<Self>, right: Option<Self>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Creates a new `TreeNode` with no children.
    #[inline]
    pub const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Replaces the left subtree of this node.
    #[inline]
    #[must_use]
    pub fn with_left(mut self, left: Self) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Replaces the right subtree of this node.
    #[inline]
    #[must_use]
    pub fn with_right(mut self, right: Self) -> Self {
        self.right = Some(Box::new(right));
        self
    }
}

impl<T> Node for TreeNode<T> {
    type Value = T;

    #[inline]
    fn value(&self) -> &T {
        &self.value
    }
    #[inline]
    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }
    #[inline]
    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}
