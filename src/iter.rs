//! Traversals over a [`Tree`][crate::Tree]. They all keep an explicit stack of pending nodes
//! instead of recursing, so walking a degenerate tree costs heap, not call stack.

use std::iter::FusedIterator;

use crate::tree::Node;

/// Ascending iterator over the values of a tree. Created by [`Tree::iter`][crate::Tree::iter].
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree has been queued but whose own value hasn't been yielded.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
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

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for InOrder<'_, T> {}
impl<T> FusedIterator for InOrder<'_, T> {}

/// Descending iterator over the values of a tree. Created by
/// [`Tree::iter_rev`][crate::Tree::iter_rev].
///
/// Stops walking as soon as it's dropped, so taking the first `k` values only visits
/// `O(height + k)` nodes.
pub struct RevInOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> RevInOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_right_spine(root);
        iter
    }

    fn push_right_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.right();
        }
    }
}

impl<'a, T> Iterator for RevInOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_right_spine(node.left());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for RevInOrder<'_, T> {}
impl<T> FusedIterator for RevInOrder<'_, T> {}

/// Pre-order iterator over the values of a tree. Created by
/// [`Tree::pre_order`][crate::Tree::pre_order].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PreOrder<'_, T> {}
impl<T> FusedIterator for PreOrder<'_, T> {}
