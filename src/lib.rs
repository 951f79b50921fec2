//! This crate exposes an unbalanced Binary Search Tree and a handful of
//! classic sorting algorithms, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The invariants of the BST in
//! [`tree`] are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value strictly less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than *or equal to* its own value.
//!
//! The second rule means duplicates are allowed: inserting a value that is
//! already present routes the new copy to the right. Visiting the left subtree,
//! then the subtree root, then the right subtree therefore yields the values in
//! non-decreasing order.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The tree never rebalances itself so inserting sorted input produces a tree
//! shaped like a linked list with `O(N)` height.
//!
//! ## Sorting
//!
//! The [`sort`] module holds six textbook sorting algorithms: selection,
//! bubble, insertion, merge, randomized quicksort and counting sort.
//!
//! # Examples
//!
//! ```
//! use bst_sort::sort;
//! use bst_sort::tree::Tree;
//!
//! let tree: Tree = sort::SAMPLE.iter().copied().collect();
//! let in_order: Vec<_> = tree.in_order().collect();
//!
//! assert_eq!(in_order, sort::merge_sort(&sort::SAMPLE));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod sort;
pub mod tree;

pub use error::{Error, Result};
