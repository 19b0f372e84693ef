//! The ordering and equality policy of an [`OrderedBinaryTree`].
//!
//! A [`Config`] is plain data: a key accessor that projects a stored value
//! onto the part used for comparisons, a comparator answering "does `a` sort
//! to the left of (or equal to) `b`?", and an equality predicate used to
//! recognise the value being searched for or deleted.
//!
//! # Examples
//!
//! ```
//! use ordered_binary_tree::{Config, OrderedBinaryTree};
//!
//! struct Player {
//!     name: &'static str,
//!     score: u32,
//! }
//!
//! fn score(player: &Player) -> &u32 {
//!     &player.score
//! }
//!
//! let mut tree = OrderedBinaryTree::with_config(Config::keyed(score));
//! tree.add(Player { name: "ada", score: 30 });
//! tree.add(Player { name: "bob", score: 10 });
//!
//! let lowest = tree.minimum().map(|n| n.value().name);
//! assert_eq!(lowest, Some("bob"));
//! ```
//!
//! [`OrderedBinaryTree`]: crate::OrderedBinaryTree

use std::fmt;
use std::rc::Rc;

/// A binary predicate over keys. The defaults are plain `fn` pointers so they
/// work for keys that borrow, only caller-supplied closures are boxed.
enum Predicate<K: ?Sized> {
    Plain(fn(&K, &K) -> bool),
    Shared(Rc<dyn Fn(&K, &K) -> bool>),
}

impl<K: ?Sized> Predicate<K> {
    fn call(&self, a: &K, b: &K) -> bool {
        match self {
            Self::Plain(f) => f(a, b),
            Self::Shared(f) => f(a, b),
        }
    }
}

impl<K: ?Sized> Clone for Predicate<K> {
    fn clone(&self) -> Self {
        match self {
            Self::Plain(f) => Self::Plain(*f),
            Self::Shared(f) => Self::Shared(Rc::clone(f)),
        }
    }
}

/// Key accessor, comparator and equality predicate for a tree storing `T`
/// and comparing by `K`.
pub struct Config<T, K: ?Sized = T> {
    key: fn(&T) -> &K,
    compare: Predicate<K>,
    equals: Predicate<K>,
}

/// The default comparator: `a <= b`.
pub fn less_than_or_equal<K: PartialOrd + ?Sized>(a: &K, b: &K) -> bool {
    a <= b
}

/// The default equality predicate: `a == b`.
pub fn equals<K: PartialEq + ?Sized>(a: &K, b: &K) -> bool {
    a == b
}

fn identity<T>(value: &T) -> &T {
    value
}

impl<T: PartialOrd> Config<T> {
    /// Compares values directly with [`less_than_or_equal`] and [`equals`].
    pub fn new() -> Self {
        Self::keyed(identity)
    }
}

impl<T: PartialOrd> Default for Config<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: PartialOrd + ?Sized> Config<T, K> {
    /// Compares values by the key `key` returns, using the default policies on
    /// that key.
    pub fn keyed(key: fn(&T) -> &K) -> Self {
        Self {
            key,
            compare: Predicate::<K>::Plain(less_than_or_equal::<K>),
            equals: Predicate::<K>::Plain(equals::<K>),
        }
    }
}

impl<T, K: ?Sized> Config<T, K> {
    /// Builds a config from all three parts. Unlike [`Config::keyed`] this puts
    /// no bounds on `K`.
    pub fn custom(
        key: fn(&T) -> &K,
        compare: impl Fn(&K, &K) -> bool + 'static,
        equals: impl Fn(&K, &K) -> bool + 'static,
    ) -> Self {
        Self {
            key,
            compare: Predicate::Shared(Rc::new(compare)),
            equals: Predicate::Shared(Rc::new(equals)),
        }
    }

    /// Replaces the comparator. It must return `true` when `a` belongs to the
    /// left of (or at the same place as) `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_binary_tree::{Config, OrderedBinaryTree};
    ///
    /// let descending = Config::new().with_compare(|a: &i32, b: &i32| a >= b);
    /// let mut tree = OrderedBinaryTree::with_config(descending);
    /// tree.add(1).add(3).add(2);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn with_compare(mut self, compare: impl Fn(&K, &K) -> bool + 'static) -> Self {
        self.compare = Predicate::Shared(Rc::new(compare));
        self
    }

    /// Replaces the equality predicate used by search and delete.
    pub fn with_equals(mut self, equals: impl Fn(&K, &K) -> bool + 'static) -> Self {
        self.equals = Predicate::Shared(Rc::new(equals));
        self
    }

    /// Projects `value` onto its comparison key.
    pub fn key<'a>(&self, value: &'a T) -> &'a K {
        (self.key)(value)
    }

    /// Whether `a` is placed to the left of (or at) `b`.
    pub fn sorts_left(&self, a: &T, b: &T) -> bool {
        self.compare.call(self.key(a), self.key(b))
    }

    /// Whether `a` and `b` identify the same entry.
    pub fn matches(&self, a: &T, b: &T) -> bool {
        self.equals.call(self.key(a), self.key(b))
    }
}

impl<T, K: ?Sized> Clone for Config<T, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            compare: self.compare.clone(),
            equals: self.equals.clone(),
        }
    }
}

impl<T, K: ?Sized> fmt::Debug for Config<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config").finish_non_exhaustive()
    }
}
