use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::queue::Queue;
use crate::traversal;
use std::collections::VecDeque;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Each node caches the height
/// of its subtree, so insertion and removal take logarithmic time.
///
/// The contents can be rendered in preorder, inorder, postorder and breadth-first order with a
/// caller-supplied function that turns each value into text.
///
/// # Examples
/// ```
/// use balanced_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// for value in &[10, 7, 15, 22, 9] {
///     set.insert(*value);
/// }
///
/// assert_eq!(set.len(), 5);
/// assert_eq!(set.inorder(|value| value.to_string()), "79101522");
/// assert_eq!(set.preorder(|value| value.to_string()), "10791522");
///
/// assert_eq!(set.remove(&15), Some(15));
/// assert_eq!(set.inorder(|value| value.to_string()), "791022");
/// ```
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet {
            tree: None,
            len: 0,
        }
    }

    /// Inserts a value into the set. If an equal value already exists in the set, it is replaced
    /// and the old value is returned.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.insert(1), None);
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), Some(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Option<T> {
        let ret = tree::insert(&mut self.tree, Node::new(value));
        if ret.is_none() {
            self.len += 1;
        }
        ret
    }

    /// Removes a value from the set. If the value exists in the set, it will return the stored
    /// value. Otherwise it will return `None`.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let ret = tree::remove(&mut self.tree, value);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        tree::contains(&self.tree, value)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the tree backing the set. An empty set has height zero.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// for value in 1..8 {
    ///     set.insert(value);
    /// }
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Renders the set in root, left, right order.
    pub fn preorder<F>(&self, render: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        traversal::preorder(self.tree.as_deref(), render)
    }

    /// Renders the set in left, root, right order, which is ascending order.
    pub fn inorder<F>(&self, render: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        traversal::inorder(self.tree.as_deref(), render)
    }

    /// Renders the set in left, right, root order.
    pub fn postorder<F>(&self, render: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        traversal::postorder(self.tree.as_deref(), render)
    }

    /// Renders the set level by level, left to right. An empty set renders as the empty string.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.bfs_order(|value: &u32| value.to_string()), "");
    ///
    /// for value in &[10, 7, 15, 22, 9] {
    ///     set.insert(*value);
    /// }
    /// assert_eq!(set.bfs_order(|value| value.to_string()), "10715922");
    /// ```
    pub fn bfs_order<F>(&self, render: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        self.bfs_order_with(VecDeque::new(), render)
    }

    /// Renders the set level by level using `queue` to hold the nodes that are yet to be visited.
    ///
    /// # Examples
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    /// use std::collections::LinkedList;
    ///
    /// let mut set = AvlSet::new();
    /// for value in 1..8 {
    ///     set.insert(value);
    /// }
    /// assert_eq!(set.bfs_order_with(LinkedList::new(), |value| value.to_string()), "4261357");
    /// ```
    pub fn bfs_order_with<'a, Q, F>(&'a self, queue: Q, render: F) -> String
    where
        Q: Queue<&'a Node<T>>,
        F: FnMut(&T) -> String,
    {
        traversal::bfs_order(self.tree.as_deref(), queue, render)
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::AvlSet;
    use std::collections::LinkedList;

    fn render(value: &u32) -> String {
        value.to_string()
    }

    fn sample() -> AvlSet<u32> {
        let mut set = AvlSet::new();
        for value in &[10, 7, 15, 22, 9] {
            set.insert(*value);
        }
        set
    }

    #[test]
    fn test_len_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.len(), 0);
        assert_eq!(set.height(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = AvlSet::new();
        assert_eq!(set.insert(1), None);
        assert!(set.contains(&1));
        assert!(!set.is_empty());
    }

    #[test]
    fn test_insert_replace() {
        let mut set = sample();
        assert_eq!(set.insert(15), Some(15));
        assert_eq!(set.len(), 5);
        assert_eq!(set.preorder(render), "10791522");
    }

    #[test]
    fn test_remove() {
        let mut set = AvlSet::new();
        set.insert(1);
        assert_eq!(set.remove(&1), Some(1));
        assert!(!set.contains(&1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut set = sample();
        assert_eq!(set.remove(&8), None);
        assert_eq!(set.len(), 5);
        assert_eq!(set.inorder(render), "79101522");
        assert_eq!(set.preorder(render), "10791522");
    }

    #[test]
    fn test_min_max() {
        let set = sample();
        assert_eq!(set.min(), Some(&7));
        assert_eq!(set.max(), Some(&22));
    }

    #[test]
    fn test_traversals() {
        let set = sample();
        assert_eq!(set.inorder(render), "79101522");
        assert_eq!(set.preorder(render), "10791522");
        assert_eq!(set.postorder(render), "97221510");
        assert_eq!(set.bfs_order(render), "10715922");
        assert_eq!(set.bfs_order_with(LinkedList::new(), render), "10715922");
    }

    #[test]
    fn test_traversals_rerunnable() {
        let set = sample();
        assert_eq!(set.postorder(render), set.postorder(render));
        assert_eq!(set.bfs_order(render), set.bfs_order(render));
    }

    #[test]
    fn test_remove_leaf_child_subtree() {
        let mut set = sample();
        assert_eq!(set.remove(&15), Some(15));
        assert_eq!(set.inorder(render), "791022");
        assert_eq!(set.preorder(render), "107922");
        assert_eq!(set.height(), 3);
    }

    #[test]
    fn test_remove_root() {
        let mut set = sample();
        assert_eq!(set.remove(&10), Some(10));
        assert_eq!(set.inorder(render), "791522");
        assert_eq!(set.preorder(render), "971522");
    }

    #[test]
    fn test_clear() {
        let mut set = sample();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.preorder(render), "");
        assert_eq!(set.inorder(render), "");
        assert_eq!(set.postorder(render), "");
        assert_eq!(set.bfs_order(render), "");
    }

    #[test]
    fn test_ascending_insert_is_balanced() {
        let mut set = AvlSet::new();
        for value in 1..8 {
            set.insert(value);
        }
        assert_eq!(set.height(), 3);
        assert_eq!(set.preorder(render), "4213657");
    }

    #[test]
    fn test_default() {
        let set: AvlSet<u32> = AvlSet::default();
        assert!(set.is_empty());
    }
}
