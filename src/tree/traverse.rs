//! Lazy depth-first and breadth-first walks over a [`Node`] and its subtrees.
//!
//! Each iterator borrows the tree and keeps its own explicit stack (or queue)
//! so walking a deep tree doesn't recurse. Asking the tree for a new iterator
//! always starts over from the root.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::{Node, Value};

/// Pre-order iterator: node, left subtree, right subtree.
#[derive(Clone, Debug)]
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrder<'a> {
    pub(super) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is popped before it.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.value())
    }
}

impl FusedIterator for PreOrder<'_> {}

/// In-order iterator: left subtree, node, right subtree.
#[derive(Clone, Debug)]
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    pub(super) fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and every left descendant of it, so the smallest value not
    /// yet visited ends up on top.
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl FusedIterator for InOrder<'_> {}

/// Post-order iterator: left subtree, right subtree, node.
#[derive(Clone, Debug)]
pub struct PostOrder<'a> {
    /// Each entry records whether the node's children have already been pushed.
    stack: Vec<(&'a Node, bool)>,
}

impl<'a> PostOrder<'a> {
    pub(super) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.value());
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl FusedIterator for PostOrder<'_> {}

/// Level-order iterator. Nodes are visited breadth first using a FIFO queue
/// seeded with the root; a node's left child is queued before its right.
#[derive(Clone, Debug)]
pub struct Levels<'a> {
    queue: VecDeque<&'a Node>,
}

impl<'a> Levels<'a> {
    pub(super) fn new(root: Option<&'a Node>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for Levels<'a> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.value())
    }
}

impl FusedIterator for Levels<'_> {}
