//! Knobs controlling how a [`Tree`][crate::Tree] behaves.

use serde::{Deserialize, Serialize};

/// What [`Tree::remove`][crate::Tree::remove] does when asked to remove the only node in a tree.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LastNodeRemoval {
    /// The removal is ignored and the tree keeps its root.
    #[default]
    Keep,
    /// The root is removed leaving an empty tree.
    Remove,
}

/// Per-tree configuration.
///
/// # Examples
///
/// ```
/// use bstree::{Config, LastNodeRemoval, Tree};
///
/// let mut tree = Tree::with_config(Config {
///     last_node_removal: LastNodeRemoval::Remove,
/// });
/// tree.insert(1);
///
/// assert_eq!(tree.remove(&1), Some(1));
/// assert!(tree.is_empty());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// See [`LastNodeRemoval`].
    pub last_node_removal: LastNodeRemoval,
}
