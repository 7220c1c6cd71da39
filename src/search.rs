//! Queries that lean on the search tree ordering to avoid looking at every node.

use std::cmp::Ordering;
use std::ptr;

use crate::distance::Distance;
use crate::error::{Error, Result};
use crate::tree::{Node, Tree};

impl<T> Tree<T>
where
    T: Ord + Distance,
{
    /// Finds the value numerically closest to `target`, or `None` for an empty tree.
    ///
    /// Only nodes on the search path for `target` are looked at. When two values are equally
    /// close, whichever comes first on that path (the one nearer the root) wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<i32> = [10, 5, 15, 2, 5, 13, 22, 1, 14].into_iter().collect();
    ///
    /// assert_eq!(tree.closest_value(&12), Some(&13));
    /// assert_eq!(tree.closest_value(&100), Some(&22));
    /// ```
    pub fn closest_value(&self, target: &T) -> Option<&T> {
        let mut closest = self.root()?.value();
        let mut current = self.root();

        while let Some(node) = current {
            if node.value().distance(target) < closest.distance(target) {
                closest = node.value();
            }
            current = match target.cmp(node.value()) {
                Ordering::Less => node.left(),
                Ordering::Equal => break,
                Ordering::Greater => node.right(),
            };
        }

        Some(closest)
    }
}

impl<T> Tree<T> {
    /// Finds the `k`th largest value, counting from 1. Duplicates count as separate ranks so in
    /// `[1, 5, 5]` both the first and second largest are `5`.
    ///
    /// Walks the tree largest-first and stops after `k` values.
    ///
    /// # Errors
    ///
    /// [`Error::RankOutOfRange`] unless `1 <= k <= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [15, 5, 20, 2, 5, 17, 22, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.kth_largest(3), Ok(&17));
    /// assert!(tree.kth_largest(0).is_err());
    /// ```
    pub fn kth_largest(&self, k: usize) -> Result<&T> {
        let out_of_range = Error::RankOutOfRange { k, len: self.len() };
        if k == 0 || k > self.len() {
            return Err(out_of_range);
        }

        self.iter_rev().nth(k - 1).ok_or(out_of_range)
    }
}

/// Whether `target` is `start` or somewhere below it. Rather than searching the whole subtree this
/// follows the search path for `target`'s value, so it's `O(height)`.
///
/// Nodes are compared by identity, not value, so with duplicates this still answers for the exact
/// node passed in.
pub fn is_descendant<T>(start: &Node<T>, target: &Node<T>) -> bool
where
    T: Ord,
{
    let mut current = Some(start);
    while let Some(node) = current {
        if ptr::eq(node, target) {
            return true;
        }
        current = if target.value() < node.value() {
            node.left()
        } else {
            node.right()
        };
    }

    false
}

/// Given three distinct nodes of the same tree, checks whether `middle` sits on the path between
/// the other two: one of `first`/`last` is its ancestor and the other its descendant.
///
/// # Examples
///
/// ```
/// use bstree::{search, Tree};
///
/// let tree: Tree<_> = [5, 2, 7, 1, 4, 6, 8, 0, 3].into_iter().collect();
/// let node = |v| tree.find(&v).unwrap();
///
/// assert!(search::validate_three_nodes(node(5), node(2), node(3)));
/// assert!(search::validate_three_nodes(node(3), node(2), node(5)));
/// assert!(!search::validate_three_nodes(node(5), node(1), node(4)));
/// ```
pub fn validate_three_nodes<T>(first: &Node<T>, middle: &Node<T>, last: &Node<T>) -> bool
where
    T: Ord,
{
    let downward = is_descendant(first, middle) && is_descendant(middle, last);
    let upward = is_descendant(last, middle) && is_descendant(middle, first);

    downward || upward
}
