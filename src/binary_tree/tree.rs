use crate::binary_tree::node::Node;
use crate::binary_tree::{Error, Result};
use crate::queue::Queue;
use crate::traversal;
use log::debug;
use std::cmp;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

type Tree<T> = Option<Box<Node<T>>>;

/// A binary tree with no ordering or balance invariant.
///
/// A tree with distinct values is uniquely determined by its preorder and inorder traversals,
/// which is how a `BinaryTree` is built. Rebuilding the tree behind an
/// [`AvlSet`](crate::avl_tree::AvlSet) from its renderings makes its shape observable.
///
/// # Examples
/// ```
/// use balanced_collections::binary_tree::BinaryTree;
///
/// let tree = BinaryTree::from_preorder_inorder(vec![1, 2, 4], vec![4, 2, 1]).unwrap();
/// assert_eq!(tree.height(), 3);
/// assert!(!tree.is_balanced());
/// assert_eq!(tree.postorder(|value| value.to_string()), "421");
/// ```
pub struct BinaryTree<T> {
    root: Tree<T>,
}

impl<T> BinaryTree<T> {
    /// Builds the tree whose preorder traversal is `preorder` and whose inorder traversal is
    /// `inorder`. The values must be distinct.
    ///
    /// # Errors
    /// Returns `Error::LengthMismatch` if the traversals have different lengths,
    /// `Error::DuplicateValue` if a value is repeated, and `Error::InconsistentTraversals` if no
    /// tree has both traversals.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::binary_tree::{BinaryTree, Error};
    ///
    /// let tree = BinaryTree::from_preorder_inorder(vec![2, 1, 3], vec![1, 2, 3]).unwrap();
    /// assert!(tree.is_balanced());
    ///
    /// assert_eq!(
    ///     BinaryTree::from_preorder_inorder(vec![2, 1], vec![1, 2, 3]).err(),
    ///     Some(Error::LengthMismatch { preorder: 2, inorder: 3 }),
    /// );
    /// ```
    pub fn from_preorder_inorder(preorder: Vec<T>, inorder: Vec<T>) -> Result<Self>
    where
        T: Hash + Eq,
    {
        if preorder.len() != inorder.len() {
            debug!(
                "traversal lengths differ: {} preorder, {} inorder",
                preorder.len(),
                inorder.len()
            );
            return Err(Error::LengthMismatch {
                preorder: preorder.len(),
                inorder: inorder.len(),
            });
        }

        let mut indexes = HashMap::with_capacity(inorder.len());
        for (index, value) in inorder.iter().enumerate() {
            if indexes.insert(value, index).is_some() {
                debug!("duplicate value at inorder index {}", index);
                return Err(Error::DuplicateValue);
            }
        }

        let mut values = preorder.into_iter();
        let root = build(&mut values, &indexes, inorder.len())?;
        Ok(BinaryTree { root })
    }

    /// Returns the root node of the tree, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        height
    }

    /// Returns `true` if the heights of the two subtrees of every node differ by at most one.
    pub fn is_balanced(&self) -> bool {
        is_height_balanced(self.root())
    }

    /// Renders the tree in root, left, right order.
    pub fn preorder<F>(&self, render: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        traversal::preorder(self.root(), render)
    }

    /// Renders the tree in left, root, right order.
    pub fn inorder<F>(&self, render: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        traversal::inorder(self.root(), render)
    }

    /// Renders the tree in left, right, root order.
    pub fn postorder<F>(&self, render: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        traversal::postorder(self.root(), render)
    }

    /// Renders the tree level by level, left to right.
    pub fn bfs_order<F>(&self, render: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        self.bfs_order_with(VecDeque::new(), render)
    }

    /// Renders the tree level by level using `queue` to hold the nodes that are yet to be visited.
    pub fn bfs_order_with<'a, Q, F>(&'a self, queue: Q, render: F) -> String
    where
        Q: Queue<&'a Node<T>>,
        F: FnMut(&T) -> String,
    {
        traversal::bfs_order(self.root(), queue, render)
    }
}

impl<T> Drop for BinaryTree<T> {
    // unlinks nodes one at a time; a degenerate tree would overflow a recursive drop
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

enum Side {
    Left,
    Right,
}

// Each frame is the inorder range `lo..hi` of a subtree still to be built and the slot of its
// parent it hangs from. Frames are popped in the order a recursive build would visit them, so the
// preorder values are consumed front to back. Nodes are linked by preorder position and only
// boxed once every value has been placed.
fn build<T, I>(values: &mut I, indexes: &HashMap<&T, usize>, len: usize) -> Result<Tree<T>>
where
    T: Hash + Eq,
    I: Iterator<Item = T>,
{
    let mut placed = Vec::with_capacity(len);
    let mut links: Vec<(Option<usize>, Option<usize>)> = Vec::with_capacity(len);
    let mut frames: Vec<(usize, usize, Option<(usize, Side)>)> = vec![(0, len, None)];

    while let Some((lo, hi, parent)) = frames.pop() {
        if lo >= hi {
            continue;
        }

        let value = match values.next() {
            Some(value) => value,
            None => return Err(Error::InconsistentTraversals),
        };
        let index = match indexes.get(&value) {
            Some(&index) if lo <= index && index < hi => index,
            _ => {
                debug!("preorder value does not fall in inorder range {}..{}", lo, hi);
                return Err(Error::InconsistentTraversals);
            },
        };

        let position = placed.len();
        placed.push(value);
        links.push((None, None));
        match parent {
            Some((parent, Side::Left)) => links[parent].0 = Some(position),
            Some((parent, Side::Right)) => links[parent].1 = Some(position),
            None => {},
        }

        frames.push((index + 1, hi, Some((position, Side::Right))));
        frames.push((lo, index, Some((position, Side::Left))));
    }

    // children always come later in preorder than their parent
    let mut built: Vec<Tree<T>> = (0..placed.len()).map(|_| None).collect();
    for (position, value) in placed.into_iter().enumerate().rev() {
        let (left, right) = links[position];
        let mut node = Box::new(Node::new(value));
        node.left = left.and_then(|child| built[child].take());
        node.right = right.and_then(|child| built[child].take());
        built[position] = Some(node);
    }
    Ok(built.into_iter().next().and_then(|root| root))
}

enum Visit<'a, T> {
    Enter(Option<&'a Node<T>>),
    Exit(&'a Node<T>),
}

// Post-order walk that keeps the height of every finished subtree on a stack of its own.
fn is_height_balanced<T>(root: Option<&Node<T>>) -> bool {
    let mut heights: Vec<usize> = Vec::new();
    let mut stack = vec![Visit::Enter(root)];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(None) => heights.push(0),
            Visit::Enter(Some(node)) => {
                stack.push(Visit::Exit(node));
                stack.push(Visit::Enter(node.right.as_deref()));
                stack.push(Visit::Enter(node.left.as_deref()));
            },
            Visit::Exit(_) => {
                let (left, right) = match (heights.pop(), heights.pop()) {
                    (Some(right), Some(left)) => (left, right),
                    _ => unreachable!(),
                };
                if cmp::max(left, right) - cmp::min(left, right) > 1 {
                    return false;
                }
                heights.push(cmp::max(left, right) + 1);
            },
        }
    }
    true
}
