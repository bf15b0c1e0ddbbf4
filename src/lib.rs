//! Height-balanced binary search trees with deterministic traversal rendering.
//!
//! [`AvlSet`](avl_tree::AvlSet) is the balanced set itself. [`BinaryTree`](binary_tree::BinaryTree)
//! is an unbalanced tree rebuilt from a preorder and inorder rendering, which makes it possible
//! to check the shape of an `AvlSet` from the outside.

pub mod avl_tree;
pub mod binary_tree;
pub mod queue;
pub mod traversal;
