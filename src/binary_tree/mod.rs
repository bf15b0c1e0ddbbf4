//! Unbalanced binary tree rebuilt from its preorder and inorder traversals.

mod node;
mod tree;

pub use self::node::Node;
pub use self::tree::BinaryTree;

use std::error;
use std::fmt;
use std::result;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The two traversals hold a different number of values.
    LengthMismatch { preorder: usize, inorder: usize },
    /// A value occurs more than once in the inorder traversal.
    DuplicateValue,
    /// The preorder traversal does not describe a tree with the given inorder traversal.
    InconsistentTraversals,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::LengthMismatch { preorder, inorder } => write!(
                f,
                "preorder traversal has {} values but inorder traversal has {}",
                preorder, inorder,
            ),
            Error::DuplicateValue => write!(f, "inorder traversal contains a duplicate value"),
            Error::InconsistentTraversals => {
                write!(f, "preorder and inorder traversals describe different trees")
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
