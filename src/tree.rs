//! An unbalanced, multiset-tolerant BST of integers. Every node uniquely owns
//! its children so the whole structure is a plain recursive `Box` tree.
//!
//! Values equal to a node's value are always routed into its right subtree.
//! That means duplicates are kept (each `add` creates a node) and an in-order
//! walk is non-decreasing rather than strictly increasing.
//!
//! # Examples
//!
//! ```
//! use bst_sort::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(1));
//! assert_eq!(tree.height(), -1);
//!
//! tree.add(2);
//! tree.add(1);
//! tree.add(2);
//! assert!(tree.search(2));
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.in_order().collect::<Vec<_>>(), [1, 2, 2]);
//!
//! // Removing a value drops one copy of it.
//! tree.remove(2);
//! assert!(tree.search(2));
//! tree.remove(2);
//! assert!(!tree.search(2));
//!
//! // Removing a value that isn't there does nothing.
//! tree.remove(42);
//! assert_eq!(tree.size(), 1);
//! ```

use std::cmp::Ordering;
use std::iter::FromIterator;

use tracing::{debug, trace};

use crate::{Error, Result};

mod traverse;

pub use traverse::{InOrder, Levels, PostOrder, PreOrder};

/// The type of value stored in a [`Tree`].
pub type Value = i64;

/// An owned, possibly absent, subtree.
pub type Link = Option<Box<Node>>;

/// A Binary Search Tree of [`Value`]s. The tree owns an optional root [`Node`]
/// and takes care of creating it on the first insertion and replacing it when
/// the root itself is removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree {
    root: Link,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Adds `value` to the tree. Adding a value that is already present adds
    /// another copy to the right of the existing one.
    pub fn add(&mut self, value: Value) {
        match self.root.as_mut() {
            Some(root) => root.add(value),
            None => {
                debug!(value, "creating root node");
                self.root = Some(Node::new_boxed(value));
            }
        }
    }

    /// Returns whether any node in the tree holds `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_sort::tree::Tree;
    ///
    /// let tree: Tree = vec![50, 30, 70].into_iter().collect();
    ///
    /// assert!(tree.search(30));
    /// assert!(!tree.search(99));
    /// ```
    pub fn search(&self, value: Value) -> bool {
        self.root.as_ref().map_or(false, |root| root.search(value))
    }

    /// Returns the smallest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no nodes.
    pub fn min(&self) -> Result<Value> {
        self.root
            .as_ref()
            .map(|root| root.min())
            .ok_or(Error::EmptyTree { operation: "min" })
    }

    /// Returns the largest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no nodes.
    pub fn max(&self) -> Result<Value> {
        self.root
            .as_ref()
            .map(|root| root.max())
            .ok_or(Error::EmptyTree { operation: "max" })
    }

    /// Gets the height of this tree, counted in edges. An empty tree has a
    /// height of `-1` and a tree with a single node has a height of `0`.
    pub fn height(&self) -> isize {
        self.root.as_ref().map_or(-1, |root| root.height())
    }

    /// Removes one node holding `value` from the tree. If the tree never
    /// contained `value`, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_sort::tree::Tree;
    ///
    /// let mut tree: Tree = vec![50, 30, 70, 60, 80].into_iter().collect();
    ///
    /// // The root has two children so it takes the value of its in-order successor.
    /// tree.remove(50);
    /// assert_eq!(tree.root().map(|root| root.value()), Some(60));
    /// assert_eq!(tree.in_order().collect::<Vec<_>>(), [30, 60, 70, 80]);
    /// ```
    pub fn remove(&mut self, value: Value) {
        self.root = self.root.take().and_then(|root| root.remove(value));
    }

    /// Checks each node against its immediate parent: left children must be
    /// strictly smaller and right children must be at least as large.
    ///
    /// This is a *local* check. A node is never compared against the bounds set
    /// by its grandparents, so a tree can pass this check while some deep node
    /// sits on the wrong side of an ancestor. An empty tree is trivially valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_sort::tree::Tree;
    ///
    /// let mut tree: Tree = vec![50, 30, 40].into_iter().collect();
    /// assert!(tree.is_bst());
    ///
    /// // 99 is larger than the root but it's only compared against 30.
    /// if let Some(forty) = tree
    ///     .root_mut()
    ///     .and_then(|root| root.left_mut())
    ///     .and_then(|thirty| thirty.right_mut())
    /// {
    ///     forty.set_value(99);
    /// }
    /// assert!(tree.is_bst());
    /// ```
    pub fn is_bst(&self) -> bool {
        self.root.as_ref().map_or(true, |root| root.is_bst())
    }

    /// Returns how many nodes are in the tree. Duplicates are counted once per
    /// insertion.
    pub fn size(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.size())
    }

    /// Returns how many nodes in the tree hold an even value.
    pub fn par(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.par())
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Visits each node, then its left subtree, then its right subtree.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self.root.as_deref())
    }

    /// Visits the left subtree, then each node, then its right subtree. The
    /// values come out in non-decreasing order.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    /// Visits the left subtree, then the right subtree, then each node.
    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder::new(self.root.as_deref())
    }

    /// Visits the tree breadth first, left to right within each level.
    pub fn levels(&self) -> Levels<'_> {
        Levels::new(self.root.as_deref())
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Mutable access to the root node, if any. See [`Node::set_value`] for the
    /// caveats of editing nodes in place.
    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_deref_mut()
    }
}

impl From<Node> for Tree {
    fn from(root: Node) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }
}

impl FromIterator<Value> for Tree {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Value> for Tree {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

/// A `Node` holds a value and up to two children. Every operation on a node
/// treats a missing child as an empty subtree.
///
/// Nothing keeps the tree balanced, and adding, removing, searching, measuring
/// and dropping a node all recurse once per level below it. A tree built from
/// sorted input is a single chain, so those operations need stack proportional
/// to the number of nodes. The traversal iterators don't recurse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    value: Value,
    left: Link,
    right: Link,
}

impl Node {
    /// Constructs a new leaf `Node` with the given `value`.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    fn new_boxed(value: Value) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// This node's value.
    pub fn value(&self) -> Value {
        self.value
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Mutable access to the left child, if any.
    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    /// Mutable access to the right child, if any.
    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// Overwrites this node's value in place.
    ///
    /// **Note** Nothing stops this from breaking the BST invariant. Searches and
    /// removals on a tree edited like this may miss values that are present.
    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    /// Adds `value` somewhere below this node. Smaller values go left, equal or
    /// larger values go right, and a new leaf is created wherever the path runs
    /// out.
    pub fn add(&mut self, value: Value) {
        let child = if value < self.value {
            &mut self.left
        } else {
            &mut self.right
        };

        match child {
            Some(child) => child.add(value),
            None => *child = Some(Self::new_boxed(value)),
        }
    }

    /// Returns whether this subtree holds `value`. Stops at the first match.
    pub fn search(&self, value: Value) -> bool {
        match value.cmp(&self.value) {
            Ordering::Less => self.left.as_ref().map_or(false, |n| n.search(value)),
            Ordering::Equal => true,
            Ordering::Greater => self.right.as_ref().map_or(false, |n| n.search(value)),
        }
    }

    /// The value of the leftmost node in this subtree.
    pub fn min(&self) -> Value {
        match &self.left {
            Some(left) => left.min(),
            None => self.value,
        }
    }

    /// The value of the rightmost node in this subtree.
    pub fn max(&self) -> Value {
        match &self.right {
            Some(right) => right.max(),
            None => self.value,
        }
    }

    /// How many edges are on the longest path from this node down to a leaf.
    /// A leaf has a height of `0`.
    pub fn height(&self) -> isize {
        let left = self.left.as_ref().map_or(-1, |n| n.height());
        let right = self.right.as_ref().map_or(-1, |n| n.height());
        left.max(right) + 1
    }

    /// Removes one node holding `value` from this subtree and returns the new
    /// root of the subtree. The caller must put the returned link where this
    /// node used to be since this node may be the one removed.
    ///
    /// A node with two children isn't unlinked. Instead it takes the value of
    /// its in-order successor (the smallest value in its right subtree) and
    /// that successor is removed from the right subtree.
    pub fn remove(mut self: Box<Self>, value: Value) -> Link {
        match value.cmp(&self.value) {
            Ordering::Less => {
                self.left = remove_from(self.left.take(), value);
                Some(self)
            }
            Ordering::Greater => {
                self.right = remove_from(self.right.take(), value);
                Some(self)
            }
            Ordering::Equal => match (self.left.take(), self.right.take()) {
                (None, right) => right,
                (left, None) => left,
                (Some(left), Some(right)) => {
                    let successor = right.min();
                    debug!(removed = value, successor, "promoting in-order successor");

                    self.value = successor;
                    self.left = Some(left);
                    self.right = right.remove(successor);
                    Some(self)
                }
            },
        }
    }

    /// Checks this subtree with the same local rule as [`Tree::is_bst`].
    pub fn is_bst(&self) -> bool {
        let left_ok = self
            .left
            .as_ref()
            .map_or(true, |left| left.value < self.value && left.is_bst());
        let right_ok = self
            .right
            .as_ref()
            .map_or(true, |right| right.value >= self.value && right.is_bst());

        left_ok && right_ok
    }

    /// How many nodes are in this subtree, including this one.
    pub fn size(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.size());
        let right = self.right.as_ref().map_or(0, |n| n.size());
        1 + left + right
    }

    /// How many nodes in this subtree hold an even value.
    pub fn par(&self) -> usize {
        let own = usize::from(self.value % 2 == 0);
        let left = self.left.as_ref().map_or(0, |n| n.par());
        let right = self.right.as_ref().map_or(0, |n| n.par());
        own + left + right
    }

    /// Pre-order walk of this subtree.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(Some(self))
    }

    /// In-order walk of this subtree.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(Some(self))
    }

    /// Post-order walk of this subtree.
    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder::new(Some(self))
    }

    /// Breadth-first walk of this subtree.
    pub fn levels(&self) -> Levels<'_> {
        Levels::new(Some(self))
    }
}

fn remove_from(link: Link, value: Value) -> Link {
    match link {
        Some(node) => node.remove(value),
        None => {
            trace!(value, "value not found, nothing removed");
            None
        }
    }
}
