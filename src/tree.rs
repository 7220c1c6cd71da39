//! A mutable BST that keeps duplicate values. Values smaller than a node go to its left, everything
//! else (including equal values) goes to its right. The tree never rebalances itself.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! tree.insert(2);
//! assert!(tree.contains(&1));
//!
//! // Duplicates are kept.
//! tree.insert(2);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 2]);
//!
//! // Removing takes out one node at a time.
//! assert_eq!(tree.remove(&2), Some(2));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::trace;

use crate::config::{Config, LastNodeRemoval};
use crate::iter::{InOrder, PreOrder, RevInOrder};

/// An owned, possibly missing, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single node of a [`Tree`]. Nodes can only be observed through shared references, which keeps
/// the search tree ordering intact.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree. Every value in it is strictly less than [`Node::value`].
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree. Every value in it is greater than or equal to
    /// [`Node::value`].
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Only shows the values of the immediate children so formatting never walks the whole subtree.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// A Binary Search Tree. See the [module docs][self] for the ordering rules.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
    config: Config,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Tearing the nodes down one at a time keeps a degenerate (list shaped) tree from recursing
    // once per level in `Box`'s destructor.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Two trees are equal when they have the same shape holding the same values. For search trees
/// that's the same as having equal pre-order traversals.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.pre_order().eq(other.pre_order())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` with the default [`Config`].
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Generates a new, empty `Tree` using the given [`Config`].
    pub fn with_config(config: Config) -> Self {
        Self {
            root: None,
            len: 0,
            config,
        }
    }

    /// Wraps an already ordered chain of nodes. The caller vouches for `len` and the ordering.
    pub(crate) fn from_root(root: Link<T>, len: usize) -> Self {
        Self {
            root,
            len,
            config: Config::default(),
        }
    }

    /// The configuration this tree was built with.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Replaces the configuration of this tree.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// How many nodes (duplicates included) are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a lone root a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.height(), 2);
    ///
    /// let tree: Tree<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }

        height
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// Iterates over the values in ascending (in-order) order.
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root(), self.len)
    }

    /// Iterates over the values in descending (reverse in-order) order.
    pub fn iter_rev(&self) -> RevInOrder<'_, T> {
        RevInOrder::new(self.root(), self.len)
    }

    /// Iterates over the values in pre-order: a node, then its left subtree, then its right
    /// subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root(), self.len)
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts a value as a new leaf. Equal values are placed in the right subtree so inserting
    /// a value that's already present adds another node for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(10);
    /// tree.insert(10);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.root().and_then(|root| root.right()).map(|n| *n.value()), Some(10));
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Whether any node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Finds the first node holding `value` on the way down from the root. If `value` was
    /// inserted several times this is the one closest to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&3).map(|node| node.is_leaf()), Some(true));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Removes the first node holding `value` on the way down from the root and returns the
    /// removed value. Nothing happens if `value` isn't in the tree.
    ///
    /// Removing the only node of a tree is governed by [`Config::last_node_removal`]: with the
    /// default, [`LastNodeRemoval::Keep`], it's ignored and `None` is returned.
    ///
    /// A node with two children takes on the value of its in-order successor (the smallest value
    /// in its right subtree) and the successor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<_> = [10, 5, 15, 13, 22].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&10), Some(10));
    /// assert_eq!(tree.root().map(|root| *root.value()), Some(13));
    /// assert_eq!(tree.remove(&10), None);
    ///
    /// let mut lonely: Tree<_> = [1].into_iter().collect();
    /// assert_eq!(lonely.remove(&1), None);
    /// assert!(lonely.contains(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        if self.len == 1 && self.config.last_node_removal == LastNodeRemoval::Keep {
            trace!("refusing to remove the only node in the tree");
            return None;
        }

        let mut slot = &mut self.root;
        loop {
            let ordering = match slot.as_ref() {
                None => return None,
                Some(node) => value.cmp(&node.value),
            };
            match ordering {
                Ordering::Less => slot = &mut slot.as_mut()?.left,
                Ordering::Equal => break,
                Ordering::Greater => slot = &mut slot.as_mut()?.right,
            }
        }

        let removed = Self::unlink(slot);
        if removed.is_some() {
            self.len -= 1;
        }

        removed
    }

    /// Removes the node in `slot` (if any), splicing its children back into the tree.
    fn unlink(slot: &mut Link<T>) -> Option<T> {
        let node = slot.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            trace!("removing node with two children");
            let successor = Self::take_min(&mut node.right)?;
            return Some(mem::replace(&mut node.value, successor));
        }

        trace!("removing node with at most one child");
        let Node { value, left, right } = *slot.take()?;
        *slot = left.or(right);
        Some(value)
    }

    /// Detaches the leftmost node under `slot` and returns its value. Its right subtree takes its
    /// place.
    fn take_min(slot: &mut Link<T>) -> Option<T> {
        let mut slot = slot;
        while slot.as_ref().map_or(false, |node| node.left.is_some()) {
            slot = &mut slot.as_mut()?.left;
        }

        let Node { value, right, .. } = *slot.take()?;
        *slot = right;
        Some(value)
    }

    /// Whether every node respects the search tree ordering: left descendants strictly smaller,
    /// right descendants greater or equal.
    pub fn is_bst(&self) -> bool {
        // Each entry is a node with the half-open range `[lower, upper)` its value must be in.
        let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = Vec::new();
        stack.extend(self.root().map(|root| (root, None, None)));

        while let Some((node, lower, upper)) = stack.pop() {
            let value = &node.value;
            let below = lower.map_or(false, |lower| value < lower);
            let above = upper.map_or(false, |upper| value >= upper);
            if below || above {
                return false;
            }
            stack.extend(node.left().map(|left| (left, lower, Some(value))));
            stack.extend(node.right().map(|right| (right, Some(value), upper)));
        }

        true
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Inserts every value in iteration order, so the first value becomes the root.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
