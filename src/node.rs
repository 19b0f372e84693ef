//! Nodes of an [`OrderedBinaryTree`](crate::OrderedBinaryTree).

use std::fmt;

/// An owning edge to a child subtree. Every `Node` is owned by exactly one
/// `Link`: its parent's `left` or `right`, or the tree's root.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds an inserted value and up to two children.
///
/// Nodes are only created by [`add`](crate::OrderedBinaryTree::add) and are
/// handed out by reference, so the shape of the tree can be inspected but not
/// changed through them.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

// Only the children's values are printed; nesting whole subtrees would recurse
// once per level.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, holding values that sort left of or equal
    /// to this one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The node holding the smallest value of the subtree rooted here, found
    /// by following left children.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_binary_tree::OrderedBinaryTree;
    ///
    /// let mut tree = OrderedBinaryTree::new();
    /// tree.add(50).add(30).add(70).add(60).add(80);
    ///
    /// let right = tree.root().and_then(|root| root.right()).unwrap();
    /// assert_eq!(right.minimum().value(), &60);
    /// assert_eq!(right.maximum().value(), &80);
    /// ```
    pub fn minimum(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The node holding the largest value of the subtree rooted here, found by
    /// following right children.
    pub fn maximum(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }
}

/// Removes the minimum node of the subtree owned by `link` and returns its
/// value. The removed node's right subtree takes its place.
pub(crate) fn take_minimum<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let mut node = link.take()?;
    *link = node.right.take();
    Some(node.value)
}

/// Drops every node owned by `link` one at a time, so that list-shaped trees
/// don't recurse once per level.
pub(crate) fn drop_subtree<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds `value` with the given children.
    fn node(value: i32, left: Link<i32>, right: Link<i32>) -> Link<i32> {
        let mut node = Node::new_boxed(value);
        node.left = left;
        node.right = right;
        Some(node)
    }

    fn leaf(value: i32) -> Link<i32> {
        node(value, None, None)
    }

    #[test]
    fn leaf_is_its_own_extreme() {
        let root = leaf(1).unwrap();

        assert!(root.is_leaf());
        assert_eq!(root.minimum().value(), &1);
        assert_eq!(root.maximum().value(), &1);
    }

    #[test]
    fn extremes_follow_one_side() {
        //      5
        //    /   \
        //   3     8
        //    \   /
        //     4 6
        let root = node(5, node(3, None, leaf(4)), node(8, leaf(6), None)).unwrap();

        assert!(!root.is_leaf());
        assert_eq!(root.minimum().value(), &3);
        assert_eq!(root.maximum().value(), &8);
        assert_eq!(root.right().map(|n| n.minimum().value()), Some(&6));
    }

    #[test]
    fn take_minimum_promotes_right_child() {
        let mut link = node(5, node(2, None, node(3, None, leaf(4))), leaf(9));

        assert_eq!(take_minimum(&mut link), Some(2));

        let root = link.as_deref().unwrap();
        assert_eq!(root.left().map(Node::value), Some(&3));
        assert_eq!(root.minimum().value(), &3);
    }

    #[test]
    fn take_minimum_of_single_node_empties_link() {
        let mut link = leaf(7);

        assert_eq!(take_minimum(&mut link), Some(7));
        assert!(link.is_none());
        assert_eq!(take_minimum(&mut link), None);
    }

    #[test]
    fn drop_subtree_handles_deep_lists() {
        let mut link = None;
        for value in 0..200_000 {
            link = node(value, link, None);
        }

        drop_subtree(link);
    }

    #[test]
    fn debug_shows_child_values() {
        let root = node(5, leaf(3), None).unwrap();

        assert_eq!(
            format!("{:?}", root),
            "Node { value: 5, left: Some(3), right: None }"
        );
    }

    #[test]
    fn debug_handles_deep_lists() {
        let mut link = None;
        for value in 0..200_000 {
            link = node(value, link, None);
        }

        assert_eq!(
            format!("{:?}", link.as_deref()),
            "Some(Node { value: 199999, left: Some(199998), right: None })"
        );
        drop_subtree(link);
    }
}
