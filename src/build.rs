//! Building whole trees at once instead of inserting values one by one.

use tracing::debug;

use crate::error::{Error, Result};
use crate::tree::{Link, Node, Tree};

impl<T> Tree<T>
where
    T: Ord + Clone,
{
    /// Builds a tree of minimum height from strictly ascending values. Every subtree is rooted at
    /// the middle of its range of values, giving a height of `ceil(log2(n + 1))`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] for an empty slice and [`Error::NotStrictlyAscending`] if some value
    /// isn't greater than the one before it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_sorted(&[1, 2, 5, 7, 10, 13, 14, 15, 22]).unwrap();
    ///
    /// assert_eq!(tree.height(), 4);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 5, 7, 10, 13, 14, 15, 22]);
    /// ```
    pub fn from_sorted(values: &[T]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyInput);
        }
        if let Some(index) = values.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(Error::NotStrictlyAscending { index: index + 1 });
        }

        let tree = Tree::from_root(build_balanced(values), values.len());
        debug!(len = tree.len(), height = tree.height(), "built minimum height tree");
        Ok(tree)
    }

    /// Rebuilds the unique tree whose pre-order traversal is `values`.
    ///
    /// Each value is placed within the half-open range `[lower, upper)` allowed by its ancestors:
    /// a left child's range ends at its parent's value and a right child's range starts there, so
    /// duplicates always land on the right.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] for an empty slice and [`Error::InvalidPreorder`] if `values` isn't
    /// the pre-order traversal of any search tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let preorder = [10, 4, 2, 1, 5, 17, 19, 18];
    /// let tree = Tree::from_preorder(&preorder).unwrap();
    ///
    /// assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), preorder);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 5, 10, 17, 18, 19]);
    /// ```
    pub fn from_preorder(values: &[T]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyInput);
        }

        let (left, right) = preorder_links(values)?;
        let root = assemble(values.to_vec(), &left, &right);
        let tree = Tree::from_root(root, values.len());
        debug!(len = tree.len(), height = tree.height(), "rebuilt tree from pre-order");
        Ok(tree)
    }
}

/// Copies the shape and values of the tree node for node. The configuration is kept too.
impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let (values, left, right) = shape(self);
        let values = values.into_iter().cloned().collect();
        let mut tree = Tree::from_root(assemble(values, &left, &right), self.len());
        tree.set_config(self.config());
        tree
    }
}

/// The values of `tree` in pre-order, along with the pre-order positions of each node's left
/// and right children. This is the layout [`assemble`] takes.
pub(crate) fn shape<T>(tree: &Tree<T>) -> (Vec<&T>, Vec<Option<usize>>, Vec<Option<usize>>) {
    let mut values = Vec::with_capacity(tree.len());
    let mut left = Vec::with_capacity(tree.len());
    let mut right = Vec::with_capacity(tree.len());

    // Each entry carries the position of its parent and whether it's the left child.
    let mut stack: Vec<(&Node<T>, Option<(usize, bool)>)> = Vec::new();
    stack.extend(tree.root().map(|root| (root, None)));
    while let Some((node, parent)) = stack.pop() {
        let position = values.len();
        match parent {
            Some((parent, true)) => left[parent] = Some(position),
            Some((parent, false)) => right[parent] = Some(position),
            None => {}
        }

        if let Some(child) = node.right() {
            stack.push((child, Some((position, false))));
        }
        if let Some(child) = node.left() {
            stack.push((child, Some((position, true))));
        }
        values.push(node.value());
        left.push(None);
        right.push(None);
    }

    (values, left, right)
}

/// Recursive helper for [`Tree::from_sorted`]. Recursion depth is the height of the result,
/// which is logarithmic.
fn build_balanced<T>(values: &[T]) -> Link<T>
where
    T: Clone,
{
    if values.is_empty() {
        return None;
    }

    let mid = values.len() / 2;
    Some(Box::new(Node {
        value: values[mid].clone(),
        left: build_balanced(&values[..mid]),
        right: build_balanced(&values[mid + 1..]),
    }))
}

/// Works out, for each position of a pre-order traversal, the positions of its left and right
/// children.
///
/// `stack` holds the path of nodes that can still take a right child, in strictly decreasing
/// order. A value smaller than the top is its left child; otherwise it's the right child of the
/// largest stacked value not above it. Once a value has become a right child, nothing after it
/// may be smaller than its parent.
fn preorder_links<T>(values: &[T]) -> Result<(Vec<Option<usize>>, Vec<Option<usize>>)>
where
    T: Ord,
{
    let mut left = vec![None; values.len()];
    let mut right = vec![None; values.len()];
    if values.is_empty() {
        return Ok((left, right));
    }

    let mut stack = vec![0];
    let mut lower: Option<&T> = None;
    for (index, value) in values.iter().enumerate().skip(1) {
        if lower.map_or(false, |lower| value < lower) {
            return Err(Error::InvalidPreorder { index });
        }

        match stack.last() {
            Some(&top) if *value < values[top] => left[top] = Some(index),
            _ => {
                let mut parent = None;
                while let Some(&top) = stack.last() {
                    if values[top] > *value {
                        break;
                    }
                    parent = stack.pop();
                }
                if let Some(parent) = parent {
                    right[parent] = Some(index);
                    lower = Some(&values[parent]);
                }
            }
        }
        stack.push(index);
    }

    Ok((left, right))
}

/// Turns values laid out in pre-order, plus the child positions of each, into linked nodes.
/// Children always come after their parent in pre-order, so walking backwards means both children
/// of a node are finished before it is. The root is the first position.
pub(crate) fn assemble<T>(
    values: Vec<T>,
    left: &[Option<usize>],
    right: &[Option<usize>],
) -> Link<T> {
    let mut built: Vec<Link<T>> = Vec::with_capacity(values.len());
    built.resize_with(values.len(), || None);

    for (index, value) in values.into_iter().enumerate().rev() {
        let node = Node {
            value,
            left: left[index].and_then(|child| built[child].take()),
            right: right[index].and_then(|child| built[child].take()),
        };
        built[index] = Some(Box::new(node));
    }

    built.into_iter().next().flatten()
}
