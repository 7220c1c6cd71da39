//! A flat, serializable description of a tree: a list of nodes, each naming its children by id,
//! plus the id of the root. Handy for writing tests against hand-shaped trees.
//!
//! # Examples
//!
//! ```
//! use bstree::fixture::{NodeSpec, TreeSpec};
//!
//! let spec = TreeSpec {
//!     root: "10".to_string(),
//!     nodes: vec![
//!         NodeSpec::new("10", 10, Some("5"), Some("15")),
//!         NodeSpec::new("5", 5, None, None),
//!         NodeSpec::new("15", 15, None, None),
//!     ],
//! };
//! let tree = spec.build().unwrap();
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [5, 10, 15]);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::build::{assemble, shape};
use crate::error::{Error, Result};
use crate::tree::Tree;

/// One node of a [`TreeSpec`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec<T> {
    /// Unique name of this node within the fixture.
    pub id: String,
    /// The node's value.
    pub value: T,
    /// Id of the left child.
    #[serde(default)]
    pub left: Option<String>,
    /// Id of the right child.
    #[serde(default)]
    pub right: Option<String>,
}

impl<T> NodeSpec<T> {
    /// Shorthand for building a `NodeSpec` from string slices.
    pub fn new(id: &str, value: T, left: Option<&str>, right: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            value,
            left: left.map(str::to_string),
            right: right.map(str::to_string),
        }
    }
}

/// A whole tree as a node list plus the id of its root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSpec<T> {
    /// Every node of the tree, in any order.
    pub nodes: Vec<NodeSpec<T>>,
    /// Id of the root node.
    pub root: String,
}

impl<T> TreeSpec<T>
where
    T: Ord,
{
    /// Links the nodes together into a [`Tree`].
    ///
    /// # Errors
    ///
    /// Fails when there are no nodes, ids repeat, a child id doesn't exist, a node is reachable
    /// more than once (or through a cycle), a node can't be reached from the root, or the values
    /// break the search tree ordering.
    pub fn build(self) -> Result<Tree<T>> {
        let result = self.link();
        if let Err(err) = &result {
            debug!(%err, "rejected tree fixture");
        }
        result
    }

    fn link(self) -> Result<Tree<T>> {
        if self.nodes.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut ids = HashMap::with_capacity(self.nodes.len());
        for (index, node) in self.nodes.iter().enumerate() {
            if ids.insert(node.id.as_str(), index).is_some() {
                return Err(Error::DuplicateId(node.id.clone()));
            }
        }
        let lookup = |id: &str| {
            ids.get(id)
                .copied()
                .ok_or_else(|| Error::UnknownNode(id.to_string()))
        };

        // Number the nodes in pre-order, which is the layout `assemble` expects.
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut position: Vec<Option<usize>> = vec![None; self.nodes.len()];
        let mut stack = vec![lookup(self.root.as_str())?];
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if position[index].is_some() {
                return Err(Error::SharedNode(node.id.clone()));
            }
            position[index] = Some(order.len());
            order.push(index);

            if let Some(right) = &node.right {
                stack.push(lookup(right.as_str())?);
            }
            if let Some(left) = &node.left {
                stack.push(lookup(left.as_str())?);
            }
        }

        if let Some(detached) = position.iter().position(Option::is_none) {
            return Err(Error::DetachedNode(self.nodes[detached].id.clone()));
        }

        let child_position = |child: &Option<String>| -> Result<Option<usize>> {
            match child {
                Some(id) => Ok(position[lookup(id.as_str())?]),
                None => Ok(None),
            }
        };
        let mut left = Vec::with_capacity(order.len());
        let mut right = Vec::with_capacity(order.len());
        for &index in &order {
            left.push(child_position(&self.nodes[index].left)?);
            right.push(child_position(&self.nodes[index].right)?);
        }

        let len = order.len();
        let mut values: Vec<Option<T>> = self
            .nodes
            .into_iter()
            .map(|node| Some(node.value))
            .collect();
        let values: Vec<T> = order.iter().filter_map(|&index| values[index].take()).collect();

        let tree = Tree::from_root(assemble(values, &left, &right), len);
        if !tree.is_bst() {
            return Err(Error::NotSearchTree);
        }

        Ok(tree)
    }
}

impl<T> TreeSpec<T>
where
    T: Clone,
{
    /// Describes an existing tree. Ids are the nodes' positions in pre-order, so the root is
    /// `"0"`. Returns `None` for an empty tree since a fixture always has a root.
    pub fn from_tree(tree: &Tree<T>) -> Option<Self> {
        if tree.is_empty() {
            return None;
        }
        let (values, left, right) = shape(tree);
        let id = |position: Option<usize>| position.map(|position| position.to_string());
        let nodes = values
            .into_iter()
            .enumerate()
            .map(|(position, value)| NodeSpec {
                id: position.to_string(),
                value: value.clone(),
                left: id(left[position]),
                right: id(right[position]),
            })
            .collect();

        Some(Self {
            nodes,
            root: "0".to_string(),
        })
    }
}
