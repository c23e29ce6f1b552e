//! Tests for balanced tree construction

use baltree::{build_tree, util::testing};
use rstest::rstest;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_empty_input_when_building_then_yields_no_tree() {
    assert!(build_tree(&[]).is_none());
}

#[test]
fn given_single_value_when_building_then_yields_leaf_with_depth_one() {
    let tree = build_tree(&[5]).unwrap();

    assert!(tree.is_leaf());
    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.inorder().collect::<Vec<_>>(), vec![5]);
}

#[rstest]
#[case(&[1], 1)]
#[case(&[1, 2], 2)]
#[case(&[1, 2, 3], 2)]
#[case(&[1, 2, 3, 4], 3)]
#[case(&[1, 2, 3, 4, 5, 6, 7], 3)]
#[case(&[1, 2, 3, 4, 5, 6, 7, 8], 4)]
fn given_sorted_input_when_building_then_depth_is_log_bound(
    #[case] values: &[i64],
    #[case] expected_depth: usize,
) {
    // For a balanced tree, depth == ceil(log2(n + 1))
    let tree = build_tree(values).unwrap();
    assert_eq!(tree.depth(), expected_depth);
}

#[rstest]
#[case(&[42])]
#[case(&[1, 2, 3])]
#[case(&[-5, 0, 3, 7, 100])]
#[case(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12])]
fn given_sorted_input_when_building_then_node_count_matches_input_length(#[case] values: &[i64]) {
    let tree = build_tree(values).unwrap();
    assert_eq!(tree.node_count(), values.len());
}

#[test]
fn given_any_node_when_built_then_subtree_sizes_differ_by_at_most_one() {
    let tree = build_tree(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).unwrap();

    let mut stack = vec![tree.as_ref()];
    while let Some(node) = stack.pop() {
        let left_n = node.left.as_ref().map_or(0, |n| n.node_count());
        let right_n = node.right.as_ref().map_or(0, |n| n.node_count());
        assert!(
            left_n.abs_diff(right_n) <= 1,
            "node {} has subtree sizes {} and {}",
            node.value,
            left_n,
            right_n
        );
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
}

#[test]
fn given_built_tree_when_walking_then_bst_ordering_holds() {
    let tree = build_tree(&[1, 3, 5, 7, 9]).unwrap();

    // Every left child is smaller, every right child is larger
    let mut stack = vec![tree.as_ref()];
    while let Some(node) = stack.pop() {
        if let Some(left) = node.left.as_deref() {
            assert!(left.value < node.value);
            stack.push(left);
        }
        if let Some(right) = node.right.as_deref() {
            assert!(right.value > node.value);
            stack.push(right);
        }
    }
}
