//! Balanced binary search trees from sorted sequences.
//!
//! The core is [`TreeNode`], a recursive node owning its subtrees, together
//! with [`build_tree`], which turns a sorted ascending slice into a balanced
//! BST. Traversal is lazy via [`TreeNode::inorder`].

pub mod builder;
pub mod cli;
pub mod display;
pub mod exitcode;
pub mod node;
pub mod util;

pub use builder::build_tree;
pub use node::{Inorder, TreeNode};
