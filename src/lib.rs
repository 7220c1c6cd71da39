//! This crate exposes a mutable Binary Search Tree (BST) that keeps duplicate values, plus the
//! classic algorithms usually written against one.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The invariants of this crate's BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree doesn't rebalance itself, so
//! inserting values in sorted order gives a tree shaped like a linked list. When the values are
//! known up front, [`Tree::from_sorted`] builds a tree with the smallest possible height instead.
//! BSTs also naturally support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! ## What's in here
//!
//! - [`Tree`]: insert, contains, remove, and traversals.
//! - [`Tree::closest_value`] and [`Tree::kth_largest`].
//! - [`Tree::from_sorted`] and [`Tree::from_preorder`] for building trees in bulk.
//! - [`search::validate_three_nodes`] for checking ancestor/descendant chains.
//! - [`fixture`] for describing trees as flat node lists.
//!
//! Apart from [`Tree::from_sorted`], whose recursion depth is logarithmic in the input size,
//! nothing here recurses once per level of the tree, so degenerate trees are safe to build,
//! walk, and drop.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod build;
mod config;
mod distance;
mod error;
pub mod fixture;
pub mod iter;
pub mod search;
mod tree;

pub use config::{Config, LastNodeRemoval};
pub use distance::Distance;
pub use error::{Error, Result};
pub use tree::{Node, Tree};
