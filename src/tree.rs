//! An unbalanced BST ordered by a configurable policy.
//!
//! # Examples
//!
//! ```
//! use ordered_binary_tree::OrderedBinaryTree;
//!
//! let mut tree = OrderedBinaryTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert!(tree.minimum().is_none());
//!
//! tree.add(2).add(1).add(3);
//! assert!(tree.contains(&1));
//! assert_eq!(tree.len(), 3);
//!
//! // Deleting a value returns it.
//! assert_eq!(tree.delete(&2), Some(2));
//! assert!(!tree.has(&2));
//! assert_eq!(tree.len(), 2);
//! ```

use std::fmt;

use crate::config::Config;
use crate::node::{self, Link, Node};
use crate::traversal::{self, Inorder, Postorder, Preorder, Visit};

/// An unbalanced Binary Search Tree storing values of type `T` that are
/// ordered by a key of type `K` (the value itself by default).
///
/// Values for which the comparator returns `true` go to the left, everything
/// else goes to the right. Equal values therefore end up in the left subtree
/// of the first node they compare equal to.
pub struct OrderedBinaryTree<T, K: ?Sized = T> {
    root: Link<T>,
    length: usize,
    config: Config<T, K>,
}

impl<T: PartialOrd> OrderedBinaryTree<T> {
    /// Generates a new, empty tree ordering values with `<=` and matching them
    /// with `==`.
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }
}

impl<T: PartialOrd> Default for OrderedBinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: ?Sized> Drop for OrderedBinaryTree<T, K> {
    fn drop(&mut self) {
        node::drop_subtree(self.root.take());
    }
}

impl<T, K: ?Sized> fmt::Debug for OrderedBinaryTree<T, K>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedBinaryTree")
            .field("length", &self.length)
            .field("values", &DebugValues(self))
            .finish()
    }
}

/// Lists the values in order without walking the nodes recursively.
struct DebugValues<'a, T, K: ?Sized>(&'a OrderedBinaryTree<T, K>);

impl<T: fmt::Debug, K: ?Sized> fmt::Debug for DebugValues<'_, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T, K: ?Sized> OrderedBinaryTree<T, K> {
    /// Generates a new, empty tree using the given ordering and equality
    /// policy. The policy is fixed until [`reset`](Self::reset) replaces it.
    pub fn with_config(config: Config<T, K>) -> Self {
        Self {
            root: None,
            length: 0,
            config,
        }
    }

    /// The policy this tree orders and matches values with.
    pub fn config(&self) -> &Config<T, K> {
        &self.config
    }

    /// Removes every value. With `Some(config)` the tree also switches to the
    /// new policy; with `None` it keeps the current one.
    pub fn reset(&mut self, config: Option<Config<T, K>>) {
        log::debug!("resetting tree of {} nodes", self.length);
        self.clear();
        if let Some(config) = config {
            self.config = config;
        }
    }

    /// Removes every value, keeping the policy.
    pub fn clear(&mut self) {
        node::drop_subtree(self.root.take());
        self.length = 0;
    }

    /// How many values are in the tree.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The top node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of levels in the tree: 0 when empty, 1 for a lone root.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
        }
        height
    }

    /// Inserts `value` as a new leaf. Values the comparator places left of (or
    /// equal to) a node descend to its left; others descend to its right.
    /// Every call adds a node, so equal values are all kept.
    ///
    /// Returns `self` so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_binary_tree::OrderedBinaryTree;
    ///
    /// let mut tree = OrderedBinaryTree::new();
    /// tree.add(5).add(5).add(1);
    ///
    /// // The second 5 sits in the left subtree of the first.
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.left().map(|n| *n.value()), Some(5));
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn add(&mut self, value: T) -> &mut Self {
        let mut link = &mut self.root;
        let mut depth = 0;
        while let Some(node) = link {
            link = if self.config.sorts_left(&value, &node.value) {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        log::trace!("adding node at depth {}", depth);
        *link = Some(Node::new_boxed(value));
        self.length += 1;
        self
    }

    /// Finds the node holding a value equal to `value`. The walk descends left
    /// when the comparator places `value` left of (or at) the visited node and
    /// right otherwise, stopping at the first node the equality predicate
    /// accepts.
    ///
    /// Returns `None` when the tree is empty or no node matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_binary_tree::OrderedBinaryTree;
    ///
    /// let mut tree = OrderedBinaryTree::new();
    /// tree.add(2).add(1);
    ///
    /// assert_eq!(tree.search(&1).map(|n| *n.value()), Some(1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, value: &T) -> Option<&Node<T>> {
        let mut node = self.root();
        while let Some(n) = node {
            if self.config.matches(&n.value, value) {
                return Some(n);
            }
            node = if self.config.sorts_left(value, &n.value) {
                n.left()
            } else {
                n.right()
            };
        }
        log::trace!("no node matched");
        None
    }

    /// Same as [`search`](Self::search).
    pub fn get(&self, value: &T) -> Option<&Node<T>> {
        self.search(value)
    }

    /// Whether some node holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Same as [`contains`](Self::contains).
    pub fn has(&self, value: &T) -> bool {
        self.contains(value)
    }

    /// The node holding the smallest value, or `None` for an empty tree.
    pub fn minimum(&self) -> Option<&Node<T>> {
        self.root().map(Node::minimum)
    }

    /// The node holding the largest value, or `None` for an empty tree.
    pub fn maximum(&self) -> Option<&Node<T>> {
        self.root().map(Node::maximum)
    }

    /// Iterates over the values in order.
    pub fn iter(&self) -> Inorder<'_, T> {
        Inorder::new(self.root())
    }

    /// Iterates over the values in order. Same as [`iter`](Self::iter).
    pub fn inorder(&self) -> Inorder<'_, T> {
        self.iter()
    }

    /// Iterates over the values in pre-order.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root())
    }

    /// Iterates over the values in post-order.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root())
    }

    /// Calls `visit` with every value in order (left subtree, node, right
    /// subtree). The walk halts as soon as `visit` returns `false` or
    /// [`ControlFlow::Break`](std::ops::ControlFlow::Break); see [`Visit`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_binary_tree::OrderedBinaryTree;
    ///
    /// let mut tree = OrderedBinaryTree::new();
    /// tree.add(50).add(30).add(70).add(20).add(40);
    ///
    /// let mut seen = Vec::new();
    /// tree.inorder_traversal(|x| {
    ///     seen.push(*x);
    ///     *x < 40
    /// });
    ///
    /// assert_eq!(seen, [20, 30, 40]);
    /// ```
    pub fn inorder_traversal<R: Visit>(&self, visit: impl FnMut(&T) -> R) {
        traversal::walk(self.inorder(), visit);
    }

    /// Calls `visit` with every value in pre-order (node, left subtree, right
    /// subtree) until it asks to halt.
    pub fn preorder_traversal<R: Visit>(&self, visit: impl FnMut(&T) -> R) {
        traversal::walk(self.preorder(), visit);
    }

    /// Calls `visit` with every value in post-order (left subtree, right
    /// subtree, node) until it asks to halt.
    pub fn postorder_traversal<R: Visit>(&self, visit: impl FnMut(&T) -> R) {
        traversal::walk(self.postorder(), visit);
    }

    /// Deletes the first node found holding a value equal to `value` and
    /// returns its value. If no node matches, nothing happens.
    ///
    /// A node with two children keeps its place in the tree: its in-order
    /// successor (the smallest value of its right subtree) is unlinked and
    /// moved into it. A node with one child is replaced by that child, and a
    /// leaf is simply unlinked.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_binary_tree::OrderedBinaryTree;
    ///
    /// let mut tree = OrderedBinaryTree::new();
    /// tree.add(50).add(30).add(70).add(20).add(40);
    ///
    /// assert_eq!(tree.delete(&30), Some(30));
    /// assert_eq!(tree.delete(&30), None);
    ///
    /// // 40 moved up into the slot 30 had.
    /// let left = tree.root().and_then(|n| n.left()).unwrap();
    /// assert_eq!(left.value(), &40);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [20, 40, 50, 70]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let link = find_link(&self.config, &mut self.root, value)?;
        let removed = unlink(link)?;
        self.length -= 1;
        Some(removed)
    }
}

/// Walks down from `link` to the link owning the node that matches `value`.
/// The returned link is the matching node's parent's `left`/`right` (or the
/// root link), which is what deletion has to rewrite.
fn find_link<'a, T, K: ?Sized>(
    config: &Config<T, K>,
    mut link: &'a mut Link<T>,
    value: &T,
) -> Option<&'a mut Link<T>> {
    loop {
        let node = link.as_ref()?;
        if config.matches(&node.value, value) {
            return Some(link);
        }
        let go_left = config.sorts_left(value, &node.value);
        let node = link.as_mut()?;
        link = if go_left {
            &mut node.left
        } else {
            &mut node.right
        };
    }
}

/// Removes the node owned by `link`, re-linking its children so the ordering
/// holds, and returns the value that left the tree.
fn unlink<T>(link: &mut Link<T>) -> Option<T> {
    let mut node = link.take()?;
    match (node.left.take(), node.right.take()) {
        (None, None) => {
            log::debug!("deleting leaf");
            Some(node.value)
        }
        (Some(left), None) => {
            log::debug!("deleting node with only a left child");
            *link = Some(left);
            Some(node.value)
        }
        (None, Some(right)) => {
            log::debug!("deleting node with only a right child");
            *link = Some(right);
            Some(node.value)
        }
        (Some(left), Some(right)) => {
            log::debug!("deleting node with two children, promoting its successor");
            let mut right = Some(right);
            let successor = node::take_minimum(&mut right)?;
            let removed = std::mem::replace(&mut node.value, successor);
            node.left = Some(left);
            node.right = right;
            *link = Some(node);
            Some(removed)
        }
    }
}

impl<'a, T, K: ?Sized> IntoIterator for &'a OrderedBinaryTree<T, K> {
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
