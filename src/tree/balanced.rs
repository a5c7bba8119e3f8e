//! Height-balanced binary search tree with exclusive node ownership.
//!
//! Every node owns its children through `Option<Box<..>>`, so the mutating
//! operations thread subtrees by value: a recursion step takes a subtree out
//! of its slot, reshapes it and hands the (possibly rotated) root back to the
//! parent. Heights are cached per node and refreshed on the unwind path.

use std::cmp::Ordering;
use std::mem;

use tracing::trace;

use super::error::{TreeError, TreeResult};

struct Node<T> {
    element: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
    height: i32,
}

impl<T> Node<T> {
    fn new(element: T) -> Self {
        Node {
            element,
            left: None,
            right: None,
            height: 1,
        }
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn balance_factor(&self) -> i32 {
        let left_height = self.left.as_ref().map_or(0, |node| node.height());
        let right_height = self.right.as_ref().map_or(0, |node| node.height());
        left_height - right_height
    }

    fn update_height(&mut self) {
        let left_height = self.left.as_ref().map_or(0, |node| node.height());
        let right_height = self.right.as_ref().map_or(0, |node| node.height());
        self.height = 1 + std::cmp::max(left_height, right_height);
    }
}

/// An AVL tree: a binary search tree that rebalances itself on every insert
/// and removal, keeping lookups logarithmic in the worst case.
///
/// Ordering comes from the comparator `F`. [`BalancedTree::new`] uses the
/// element type's natural order; [`BalancedTree::with_comparator`] accepts any
/// three-way comparison, which also decides what counts as a duplicate.
///
/// ```
/// use avl_tree::BalancedTree;
///
/// let mut tree = BalancedTree::new();
/// tree.insert(3)?;
/// tree.insert(1)?;
/// tree.insert(2)?;
///
/// let ordered: Vec<i32> = tree.iter().copied().collect();
/// assert_eq!(ordered, vec![1, 2, 3]);
/// # Ok::<(), avl_tree::TreeError>(())
/// ```
pub struct BalancedTree<T, F = fn(&T, &T) -> Ordering>
where
    F: Fn(&T, &T) -> Ordering,
{
    root: Option<Box<Node<T>>>,
    len: usize,
    compare: F,
}

impl<T: Ord> BalancedTree<T, fn(&T, &T) -> Ordering> {
    /// Creates an empty tree ordered by [`Ord`].
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }
}

impl<T: Ord> Default for BalancedTree<T, fn(&T, &T) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> BalancedTree<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty tree ordered by `compare`.
    ///
    /// Two elements for which `compare` returns [`Ordering::Equal`] are
    /// treated as the same element, whatever their other fields hold.
    pub fn with_comparator(compare: F) -> Self {
        BalancedTree {
            root: None,
            len: 0,
            compare,
        }
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree in nodes; an empty tree has height 0.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |node| node.height()) as usize
    }

    /// Drops every element and resets the count.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts `element` into the tree.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or [`TreeError::DuplicateKey`] if an element
    /// comparing equal is already stored. A rejected insert leaves the tree
    /// untouched and drops the offered element.
    pub fn insert(&mut self, element: T) -> TreeResult<()> {
        let root = self.root.take();
        let (root, result) = self.insert_node(root, element);
        self.root = Some(root);
        result
    }

    /// Looks up the stored element comparing equal to `element`.
    ///
    /// # Returns
    ///
    /// A reference to the stored element, or [`TreeError::NotFound`].
    pub fn get(&self, element: &T) -> TreeResult<&T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match (self.compare)(element, &node.element) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Ok(&node.element),
            }
        }
        Err(TreeError::NotFound)
    }

    /// Removes the stored element comparing equal to `element`.
    ///
    /// # Returns
    ///
    /// The removed element by value, or [`TreeError::NotFound`]; a failed
    /// removal leaves the tree untouched.
    pub fn remove(&mut self, element: &T) -> TreeResult<T> {
        let root = self.root.take();
        let (root, result) = self.remove_node(root, element);
        self.root = root;
        result
    }

    /// In-order iterator, smallest element first under the tree's comparator.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    fn insert_node(
        &mut self,
        node: Option<Box<Node<T>>>,
        element: T,
    ) -> (Box<Node<T>>, TreeResult<()>) {
        let mut node = match node {
            Some(node) => node,
            None => {
                self.len += 1;
                return (Box::new(Node::new(element)), Ok(()));
            }
        };

        let ordering = (self.compare)(&element, &node.element);
        let result = match ordering {
            Ordering::Less => {
                let left = node.left.take();
                let (child, result) = self.insert_node(left, element);
                node.left = Some(child);
                result
            }
            Ordering::Greater => {
                let right = node.right.take();
                let (child, result) = self.insert_node(right, element);
                node.right = Some(child);
                result
            }
            Ordering::Equal => Err(TreeError::DuplicateKey),
        };

        if result.is_err() {
            // Nothing below changed, so cached heights are still valid.
            return (node, result);
        }
        (Self::rebalance(node), result)
    }

    fn remove_node(
        &mut self,
        node: Option<Box<Node<T>>>,
        element: &T,
    ) -> (Option<Box<Node<T>>>, TreeResult<T>) {
        let mut node = match node {
            Some(node) => node,
            None => return (None, Err(TreeError::NotFound)),
        };

        let ordering = (self.compare)(element, &node.element);
        let result = match ordering {
            Ordering::Less => {
                let left = node.left.take();
                let (child, result) = self.remove_node(left, element);
                node.left = child;
                result
            }
            Ordering::Greater => {
                let right = node.right.take();
                let (child, result) = self.remove_node(right, element);
                node.right = child;
                result
            }
            Ordering::Equal => {
                self.len -= 1;
                return match (node.left.take(), node.right.take()) {
                    (None, right) => {
                        let Node { element, .. } = *node;
                        (right, Ok(element))
                    }
                    (left, None) => {
                        let Node { element, .. } = *node;
                        (left, Ok(element))
                    }
                    (left, Some(right)) => {
                        // Two children: promote the in-order successor and
                        // rebalance the shortened right subtree on the way up.
                        let (right, successor) = Self::remove_min(right);
                        let removed = mem::replace(&mut node.element, successor);
                        node.left = left;
                        node.right = right;
                        (Some(Self::rebalance(node)), Ok(removed))
                    }
                };
            }
        };

        if result.is_err() {
            return (Some(node), result);
        }
        (Some(Self::rebalance(node)), result)
    }

    /// Detaches the smallest node of the given subtree, yielding the shrunken
    /// (and rebalanced) subtree together with the detached element.
    fn remove_min(mut node: Box<Node<T>>) -> (Option<Box<Node<T>>>, T) {
        match node.left.take() {
            None => {
                let Node { element, right, .. } = *node;
                (right, element)
            }
            Some(left) => {
                let (left, min) = Self::remove_min(left);
                node.left = left;
                (Some(Self::rebalance(node)), min)
            }
        }
    }

    /// Refreshes the node's cached height and restores the AVL invariant with
    /// at most two rotations.
    ///
    /// A child balance of zero (possible only after a removal) takes the
    /// single-rotation path; double rotations are reserved for children
    /// leaning against the imbalance.
    fn rebalance(mut node: Box<Node<T>>) -> Box<Node<T>> {
        node.update_height();
        let balance = node.balance_factor();

        if balance > 1 {
            let left = node.left.take().expect("left-heavy node has a left child");
            if left.balance_factor() < 0 {
                trace!(balance, "left-right imbalance, double rotation");
                node.left = Some(Self::rotate_left(left));
            } else {
                trace!(balance, "left-left imbalance, single rotation");
                node.left = Some(left);
            }
            return Self::rotate_right(node);
        }

        if balance < -1 {
            let right = node
                .right
                .take()
                .expect("right-heavy node has a right child");
            if right.balance_factor() > 0 {
                trace!(balance, "right-left imbalance, double rotation");
                node.right = Some(Self::rotate_right(right));
            } else {
                trace!(balance, "right-right imbalance, single rotation");
                node.right = Some(right);
            }
            return Self::rotate_left(node);
        }

        node
    }

    fn rotate_right(mut node: Box<Node<T>>) -> Box<Node<T>> {
        let mut pivot = node.left.take().expect("right rotation needs a left child");
        node.left = pivot.right.take();
        node.update_height();
        pivot.right = Some(node);
        pivot.update_height();
        pivot
    }

    fn rotate_left(mut node: Box<Node<T>>) -> Box<Node<T>> {
        let mut pivot = node.right.take().expect("left rotation needs a right child");
        node.right = pivot.left.take();
        node.update_height();
        pivot.left = Some(node);
        pivot.update_height();
        pivot
    }
}

/// In-order iterator over a [`BalancedTree`], driven by an explicit stack of
/// the not-yet-visited ancestors.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.element)
    }
}

impl<'a, T, F> IntoIterator for &'a BalancedTree<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
