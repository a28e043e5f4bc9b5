// src/model/tree.rs
//! The in-memory rooted tree assembled by the fetch phase.
//!
//! Adjacency is a mapping from a parent id to its ordered child blocks.
//! The root is the caller-supplied id and is not itself a block; only its
//! children are modeled. The tree is built once per run and never mutated
//! after the fetch phase completes.

use super::Block;
use crate::types::PageRef;
use std::collections::HashMap;

/// Owned mapping from a parent id to its ordered direct children.
///
/// Invariant: a key exists only for ids whose children were actually
/// fetched (the root, plus every block whose `has_children` flag was true).
/// An id absent from the mapping is treated as a leaf regardless of its
/// `has_children` flag, which bounds traversal even when the server reports
/// inconsistent flags or cyclic parentage.
#[derive(Debug, Clone)]
pub struct BlockTree {
    root: PageRef,
    children: HashMap<PageRef, Vec<Block>>,
}

impl BlockTree {
    pub fn new(root: PageRef) -> Self {
        Self {
            root,
            children: HashMap::new(),
        }
    }

    /// The caller-supplied root id.
    pub fn root(&self) -> &PageRef {
        &self.root
    }

    /// The root's direct children, in API response order.
    pub fn roots(&self) -> &[Block] {
        self.children_of(&self.root)
    }

    /// Ordered children of `parent`; empty when `parent` was never expanded.
    pub fn children_of(&self, parent: &PageRef) -> &[Block] {
        self.children.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `parent` has an expansion stored.
    pub fn contains(&self, parent: &PageRef) -> bool {
        self.children.contains_key(parent)
    }

    /// Stores the ordered children fetched for `parent`.
    pub fn insert(&mut self, parent: PageRef, children: Vec<Block>) {
        self.children.insert(parent, children);
    }

    /// Set of expanded parent ids (for diagnostics and tests).
    pub fn expanded_parents(&self) -> impl Iterator<Item = &PageRef> {
        self.children.keys()
    }

    /// Total number of blocks stored across all parents.
    pub fn node_count(&self) -> usize {
        self.children.values().map(Vec::len).sum()
    }
}
