//! An unbalanced Binary Search Tree (BST) with a pluggable ordering and
//! equality policy.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The invariants of
//! this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value that
//!    sorts left of, or equal to, its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    that does not.
//!
//! > Equal values are always placed to the left. Nothing here rebalances the
//! > tree, so inserting sorted input produces a tree shaped like a list.
//!
//! What "sorts left" and "is equal" mean is decided by a [`Config`]: a key
//! accessor, a comparator and an equality predicate supplied at construction.
//!
//! # Examples
//!
//! ```
//! use ordered_binary_tree::OrderedBinaryTree;
//!
//! let mut tree = OrderedBinaryTree::new();
//! tree.add(50).add(30).add(70).add(20).add(40);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [20, 30, 40, 50, 70]);
//! assert_eq!(tree.minimum().map(|n| *n.value()), Some(20));
//!
//! assert_eq!(tree.delete(&30), Some(30));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [20, 40, 50, 70]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod config;
pub mod node;
pub mod traversal;
pub mod tree;

pub use config::Config;
pub use node::Node;
pub use traversal::Visit;
pub use tree::OrderedBinaryTree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
