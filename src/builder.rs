use tracing::instrument;

use crate::node::TreeNode;

/// Builds a balanced BST from a sorted ascending slice.
///
/// The middle element becomes the root, the halves on either side of it
/// become the left and right subtrees. For every node the sizes of the two
/// subtrees differ by at most one.
///
/// An empty slice yields `None`. The input is NOT validated: an unsorted
/// slice still produces a balanced tree, but one that violates the BST
/// ordering invariant. Callers wanting stricter guarantees must check the
/// input themselves.
#[instrument(level = "trace")]
pub fn build_tree(values: &[i64]) -> Option<Box<TreeNode>> {
    if values.is_empty() {
        return None;
    }
    let mid = values.len() / 2;
    Some(Box::new(TreeNode {
        value: values[mid],
        left: build_tree(&values[..mid]),
        right: build_tree(&values[mid + 1..]),
        tags: Vec::new(),
    }))
}
