use termtree::Tree;

use crate::node::TreeNode;

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeRender for TreeNode {
    fn to_tree_string(&self) -> Tree<String> {
        // The label is the node's Display form (value plus tags, if any)
        let root = self.to_string();

        let leaves: Vec<_> = [self.left.as_deref(), self.right.as_deref()]
            .into_iter()
            .flatten()
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_tree;

    #[test]
    fn test_render_contains_all_values() {
        let tree = build_tree(&[1, 2, 3]).unwrap();
        let rendered = tree.to_tree_string().to_string();
        assert!(rendered.contains('1'));
        assert!(rendered.contains('2'));
        assert!(rendered.contains('3'));
        // Root line comes first
        assert!(rendered.starts_with('2'));
    }
}
