use std::fmt;

use tracing::instrument;

/// A node in a binary tree.
///
/// Each node exclusively owns its left and right subtrees: the structure is
/// a strict tree (acyclic, at most one parent per node, no parent links).
/// An absent subtree is represented as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Integer payload
    pub value: i64,
    /// Owned left subtree, `None` when absent
    pub left: Option<Box<TreeNode>>,
    /// Owned right subtree, `None` when absent
    pub right: Option<Box<TreeNode>>,
    /// Ordered, per-node labels; empty by default
    pub tags: Vec<String>,
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tags.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} [{}]", self.value, self.tags.join(", "))
        }
    }
}

impl TreeNode {
    /// Creates a leaf node with no children and no tags.
    pub fn new(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
            tags: Vec::new(),
        }
    }

    /// True when both children are absent.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the depth of the subtree rooted at this node.
    ///
    /// A leaf has depth 1. Callers holding an `Option<Box<TreeNode>>` treat
    /// `None` as depth 0 without invoking this.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        let left_d = self.left.as_ref().map_or(0, |n| n.depth());
        let right_d = self.right.as_ref().map_or(0, |n| n.depth());
        1 + left_d.max(right_d)
    }

    /// Number of nodes in the subtree rooted at this node.
    #[instrument(level = "trace", skip(self))]
    pub fn node_count(&self) -> usize {
        let left_n = self.left.as_ref().map_or(0, |n| n.node_count());
        let right_n = self.right.as_ref().map_or(0, |n| n.node_count());
        1 + left_n + right_n
    }

    /// Returns a lazy in-order iterator over the subtree's values.
    ///
    /// Yields the left subtree, then this node, then the right subtree;
    /// exactly `node_count()` values in total. Every call produces a fresh
    /// iterator with its own traversal stack, so independent iterations
    /// never share state.
    #[instrument(level = "trace", skip(self))]
    pub fn inorder(&self) -> Inorder<'_> {
        Inorder::new(self)
    }
}

/// In-order traversal iterator carrying an explicit stack.
///
/// One value is produced per pull; a partially consumed iterator can be
/// dropped at any point since no external resources are held.
pub struct Inorder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Inorder<'a> {
    fn new(root: &'a TreeNode) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: &'a TreeNode) {
        loop {
            self.stack.push(node);
            match node.left.as_deref() {
                Some(left) => node = left,
                None => break,
            }
        }
    }
}

impl<'a> Iterator for Inorder<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.push_left_spine(right);
        }
        Some(node.value)
    }
}
