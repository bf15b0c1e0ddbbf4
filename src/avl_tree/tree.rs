use crate::avl_tree::node::Node;
use log::trace;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// The double rotation is only used when the heavy child leans the other way. A child that is
// exactly balanced (only possible after a removal) takes the single rotation.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                trace!("rebalancing LR case at height {}", node.height);
                node.left = Some(rotate_left(child));
            } else {
                trace!("rebalancing LL case at height {}", node.height);
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                trace!("rebalancing RL case at height {}", node.height);
                node.right = Some(rotate_right(child));
            } else {
                trace!("rebalancing RR case at height {}", node.height);
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// Detaches the node with the largest value, rebalancing every node on the way down to it.
fn remove_max<T>(tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    if let Some(node) = tree {
        if node.right.is_some() {
            let ret = remove_max(&mut node.right);
            balance(tree);
            return ret;
        }
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.left.take();
            node.update();
            Some(node)
        },
        None => None,
    }
}

// Joins the two subtrees of a removed node. The in-order predecessor becomes the new root; with
// no left subtree the right subtree takes the place of the removed node as-is.
fn combine_subtrees<T>(mut left_tree: Tree<T>, right_tree: Tree<T>) -> Tree<T> {
    match remove_max(&mut left_tree) {
        Some(mut new_root) => {
            trace!("splicing in-order predecessor");
            new_root.left = left_tree;
            new_root.right = right_tree;
            Some(new_root)
        },
        None => right_tree,
    }
}

pub fn insert<T>(tree: &mut Tree<T>, new_node: Node<T>) -> Option<T>
where
    T: Ord,
{
    let ret = match tree {
        Some(node) => match new_node.value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, new_node),
            Ordering::Greater => insert(&mut node.right, new_node),
            Ordering::Equal => return Some(mem::replace(&mut node.value, new_node.value)),
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    balance(tree);
    ret
}

pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match value.cmp(&node.value) {
            Ordering::Less => {
                let ret = remove(&mut node.left, value);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, value);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let Node { value, left, right, .. } = *node;
                *tree = combine_subtrees(left, right);
                Some(value)
            },
        },
        None => return None,
    };

    balance(tree);
    ret
}

pub fn contains<T>(tree: &Tree<T>, value: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        curr = match value.cmp(&node.value) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}
