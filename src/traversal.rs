//! Depth-first walks over a tree.
//!
//! Each order is available as an iterator ([`Inorder`], [`Preorder`],
//! [`Postorder`]) and as a visitor-driven walk on the tree (for example
//! [`inorder_traversal`](crate::OrderedBinaryTree::inorder_traversal)), where
//! the visitor can stop the walk early by returning a [`Visit`] value that
//! says so.
//!
//! The walks keep their own stack instead of recursing, so a tree built from
//! sorted input can be traversed however deep it is.

use std::iter::FusedIterator;
use std::ops::ControlFlow;

use crate::node::Node;

/// What a visitor returns to continue or halt a traversal.
///
/// * `()` always continues.
/// * `bool` halts on `false`.
/// * [`ControlFlow`] halts on `Break`.
pub trait Visit {
    /// Whether the traversal should go on to the next value.
    fn proceed(&self) -> bool;
}

impl Visit for () {
    fn proceed(&self) -> bool {
        true
    }
}

impl Visit for bool {
    fn proceed(&self) -> bool {
        *self
    }
}

impl<B, C> Visit for ControlFlow<B, C> {
    fn proceed(&self) -> bool {
        self.is_continue()
    }
}

/// Feeds every value of `values` to `visit` until it asks to halt.
pub(crate) fn walk<'a, T: 'a, R: Visit>(
    values: impl Iterator<Item = &'a T>,
    mut visit: impl FnMut(&T) -> R,
) {
    for value in values {
        if !visit(value).proceed() {
            log::trace!("traversal halted by visitor");
            return;
        }
    }
}

/// An in-order iterator: left subtree, node, right subtree. For a tree this
/// yields values in sorted order.
#[derive(Debug)]
pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl<T> FusedIterator for Inorder<'_, T> {}

/// A pre-order iterator: node, left subtree, right subtree.
#[derive(Debug)]
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is finished before it.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.value())
    }
}

impl<T> FusedIterator for Preorder<'_, T> {}

/// A post-order iterator: left subtree, right subtree, node.
#[derive(Debug)]
pub struct Postorder<'a, T> {
    /// Nodes paired with whether their children have been pushed already.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.value());
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<T> FusedIterator for Postorder<'_, T> {}
