//! Rendering of binary trees in depth-first and breadth-first order.
//!
//! Every traversal calls the renderer exactly once per node, in visiting order, and concatenates
//! the results. The depth-first traversals use an explicit stack so that the depth of the tree
//! does not bound the depth of the call stack.

use crate::queue::Queue;

/// A node of a binary tree that can be traversed.
pub trait BinaryNode {
    type Value;

    fn value(&self) -> &Self::Value;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;
}

/// Renders a tree in root, left, right order.
pub fn preorder<N, F>(root: Option<&N>, mut render: F) -> String
where
    N: BinaryNode,
    F: FnMut(&N::Value) -> String,
{
    let mut ret = String::new();
    let mut stack: Vec<&N> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        ret.push_str(&render(node.value()));
        stack.extend(node.right());
        stack.extend(node.left());
    }
    ret
}

/// Renders a tree in left, root, right order.
pub fn inorder<N, F>(root: Option<&N>, mut render: F) -> String
where
    N: BinaryNode,
    F: FnMut(&N::Value) -> String,
{
    let mut ret = String::new();
    let mut stack = Vec::new();
    let mut curr = root;
    loop {
        while let Some(node) = curr {
            stack.push(node);
            curr = node.left();
        }
        match stack.pop() {
            Some(node) => {
                ret.push_str(&render(node.value()));
                curr = node.right();
            },
            None => return ret,
        }
    }
}

/// Renders a tree in left, right, root order.
pub fn postorder<N, F>(root: Option<&N>, mut render: F) -> String
where
    N: BinaryNode,
    F: FnMut(&N::Value) -> String,
{
    // root, right, left is the exact reverse of postorder
    let mut reversed = Vec::new();
    let mut stack: Vec<&N> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        reversed.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }

    reversed
        .into_iter()
        .rev()
        .map(|node| render(node.value()))
        .collect()
}

/// Renders a tree level by level, left to right, using `queue` to hold the frontier.
///
/// An empty tree renders as the empty string.
pub fn bfs_order<'a, N, Q, F>(root: Option<&'a N>, mut queue: Q, mut render: F) -> String
where
    N: BinaryNode,
    Q: Queue<&'a N>,
    F: FnMut(&N::Value) -> String,
{
    let mut ret = String::new();
    if let Some(root) = root {
        queue.enqueue(root);
    }
    while let Some(node) = queue.dequeue() {
        if let Some(left) = node.left() {
            queue.enqueue(left);
        }
        if let Some(right) = node.right() {
            queue.enqueue(right);
        }
        ret.push_str(&render(node.value()));
    }
    ret
}
