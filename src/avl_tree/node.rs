use crate::avl_tree::tree;
use crate::traversal::BinaryNode;
use std::cmp;

/// A struct representing an internal node of an avl tree.
///
/// Nodes are only reachable through the [`BinaryNode`] trait, which is what
/// [`AvlSet::bfs_order_with`](crate::avl_tree::AvlSet::bfs_order_with) hands to its queue.
///
/// # Examples
/// ```
/// use balanced_collections::avl_tree::{AvlSet, Node};
/// use std::collections::VecDeque;
///
/// let mut set = AvlSet::new();
/// set.insert(2);
/// set.insert(1);
///
/// let queue: VecDeque<&Node<u32>> = VecDeque::new();
/// assert_eq!(set.bfs_order_with(queue, |value| value.to_string()), "21");
/// ```
///
/// The links and cached height of a node cannot be touched from outside the crate.
/// ```compile_fail
/// use balanced_collections::avl_tree::Node;
///
/// let node = Node::new(1);
/// assert_eq!(node.height, 1);
/// ```
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) height: usize,
    pub(crate) left: tree::Tree<T>,
    pub(crate) right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Node {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub(crate) fn update(&mut self) {
        let Node { height, left, right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub(crate) fn balance(&self) -> i32 {
        (tree::height(&self.left) as i32) - (tree::height(&self.right) as i32)
    }
}

impl<T> BinaryNode for Node<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}
